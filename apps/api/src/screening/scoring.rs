//! Skill Scoring — turns detector and extractor output into per-skill scores.
//!
//! For each configured skill, in order:
//! 1. `skill` weight when the skill detector reported it
//! 2. [`SECTION_BONUS`] for every experience section that mentions it
//! 3. `sub_skill` weight per detected subskill
//! 4. `project` weight per project mentioning the skill or a detected subskill
//! 5. `certificate` weight once, only when the running score is already positive
//!
//! Each skill is clamped to 0–100; the aggregate is the clamped sum of those.

use serde::Serialize;
use tracing::debug;

use crate::extraction::projects::Project;
use crate::extraction::section::{section_contribution, ExperienceSection, SECTION_BONUS};
use crate::extraction::skills::detect_subskills;
use crate::models::screening::{serialize_score, SkillConfiguration, SkillScores};

pub const MAX_SCORE: f64 = 100.0;

/// Extractor output the scorer reads. Borrowed from the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInputs<'a> {
    pub text: &'a str,
    pub detected_skills: &'a [String],
    pub projects: &'a [Project],
    pub certifications: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub skill_scores: SkillScores,
    #[serde(serialize_with = "serialize_score")]
    pub total_score: f64,
}

pub fn compute_scores(inputs: &ScoringInputs<'_>, config: &SkillConfiguration) -> ScoreReport {
    let mut skill_scores = SkillScores::default();
    let mut total_score = 0.0;

    for skill in config.skills() {
        let score = score_skill(skill, inputs, config);
        debug!("{skill}: total score {score}");
        skill_scores.insert(skill.clone(), score);
        total_score += score;
    }

    ScoreReport {
        skill_scores,
        total_score: clamp_score(total_score),
    }
}

fn score_skill(skill: &str, inputs: &ScoringInputs<'_>, config: &SkillConfiguration) -> f64 {
    let weights = &config.weights;
    let skill_lower = skill.to_lowercase();
    let mut score = 0.0;

    if inputs
        .detected_skills
        .iter()
        .any(|s| s.to_lowercase() == skill_lower)
    {
        debug!("{skill}: detected, adding {}", weights.skill);
        score += weights.skill;
    }

    for section in ExperienceSection::ALL {
        let bonus = section_contribution(inputs.text, skill, section, SECTION_BONUS);
        if bonus > 0.0 {
            debug!("{skill}: found in {}, adding {bonus}", section.label());
        }
        score += bonus;
    }

    let subskills = detect_subskills(inputs.text, skill, config);
    for subskill in &subskills {
        debug!("{skill}: subskill \"{subskill}\", adding {}", weights.sub_skill);
        score += weights.sub_skill;
    }

    let subskills_lower: Vec<String> = subskills.iter().map(|s| s.to_lowercase()).collect();
    for project in inputs.projects {
        let haystack = project.searchable_text();
        let relevant = haystack.contains(&skill_lower)
            || subskills_lower.iter().any(|s| haystack.contains(s.as_str()));
        if relevant {
            debug!(
                "{skill}: relevant project \"{}\", adding {}",
                project.title, weights.project
            );
            score += weights.project;
        }
    }

    // Certifications only reinforce a skill that already scored.
    if score > 0.0
        && inputs
            .certifications
            .iter()
            .any(|c| c.to_lowercase().contains(&skill_lower))
    {
        debug!("{skill}: relevant certification, adding {}", weights.certificate);
        score += weights.certificate;
    }

    clamp_score(score)
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, MAX_SCORE)
}
