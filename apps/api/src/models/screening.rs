use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::extraction::education::EducationRecord;
use crate::extraction::projects::Project;

/// Configuration payload sent by the caller in the multipart `data` field.
///
/// Every field is optional on the wire, and `null` counts as absent. Missing weights
/// are treated as 0.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreeningPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub selected_skills: Vec<String>,
    #[serde(deserialize_with = "subskill_table")]
    pub subskills: HashMap<String, Vec<String>>,
    pub skill_score: Option<f64>,
    pub sub_skill_score: Option<f64>,
    pub project_score: Option<f64>,
    pub certificate_score: Option<f64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SubskillTable {
    Map(HashMap<String, Vec<String>>),
    List(Vec<serde_json::Value>),
}

/// Accepts a skill → subskills map. `null` and arrays carry no subskills.
fn subskill_table<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<SubskillTable>::deserialize(deserializer)? {
        Some(SubskillTable::Map(table)) => Ok(table),
        Some(SubskillTable::List(items)) => {
            if !items.is_empty() {
                debug!("Ignoring {} subskill entries sent as a list", items.len());
            }
            Ok(HashMap::new())
        }
        None => Ok(HashMap::new()),
    }
}

/// Points awarded per signal when scoring a skill.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreWeights {
    pub skill: f64,
    pub sub_skill: f64,
    pub project: f64,
    pub certificate: f64,
}

/// Skills, subskills and weights for a single screening request.
///
/// Built once at request entry and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct SkillConfiguration {
    skills: Vec<String>,
    subskills: HashMap<String, Vec<String>>,
    pub weights: ScoreWeights,
}

impl SkillConfiguration {
    pub fn new(skills: impl IntoIterator<Item = String>, weights: ScoreWeights) -> Self {
        let mut deduped: Vec<String> = Vec::new();
        for skill in skills {
            if !deduped.contains(&skill) {
                deduped.push(skill);
            }
        }
        Self {
            skills: deduped,
            subskills: HashMap::new(),
            weights,
        }
    }

    pub fn from_payload(payload: ScreeningPayload) -> Self {
        let weights = ScoreWeights {
            skill: payload.skill_score.unwrap_or(0.0),
            sub_skill: payload.sub_skill_score.unwrap_or(0.0),
            project: payload.project_score.unwrap_or(0.0),
            certificate: payload.certificate_score.unwrap_or(0.0),
        };
        let mut config = Self::new(payload.selected_skills, weights);
        for (skill, subskills) in payload.subskills {
            for subskill in subskills {
                config.add_subskill(&skill, subskill);
            }
        }
        config
    }

    /// Registers a subskill under `skill`. Repeats are dropped.
    pub fn add_subskill(&mut self, skill: &str, subskill: String) {
        let list = self.subskills.entry(skill.to_string()).or_default();
        if list.contains(&subskill) {
            debug!("{subskill} already exists under {skill}");
            return;
        }
        list.push(subskill);
    }

    #[cfg(test)]
    pub fn with_subskills(mut self, skill: &str, subskills: &[&str]) -> Self {
        for subskill in subskills {
            self.add_subskill(skill, subskill.to_string());
        }
        self
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Looks up subskills by exact key, falling back to the lowercase key.
    pub fn subskills_for(&self, skill: &str) -> Option<&[String]> {
        self.subskills
            .get(skill)
            .or_else(|| self.subskills.get(&skill.to_lowercase()))
            .map(Vec::as_slice)
    }
}

/// Per-skill scores in configuration order. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillScores(Vec<(String, f64)>);

impl SkillScores {
    pub fn insert(&mut self, skill: impl Into<String>, score: f64) {
        let skill = skill.into();
        match self.0.iter_mut().find(|(name, _)| *name == skill) {
            Some(entry) => entry.1 = score,
            None => self.0.push((skill, score)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, skill: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, score)| *score)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SkillScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (skill, score) in &self.0 {
            map.serialize_entry(skill, &Score(*score))?;
        }
        map.end()
    }
}

struct Score(f64);

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_score(&self.0, serializer)
    }
}

/// Writes whole scores as JSON integers (`35`, not `35.0`).
pub fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if score.fract() == 0.0 {
        serializer.serialize_i64(*score as i64)
    } else {
        serializer.serialize_f64(*score)
    }
}

/// Candidate identity and contact details. Misses carry sentinels, never nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
}

/// Full response body of a screening request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub text: String,
    pub skill_scores: SkillScores,
    #[serde(serialize_with = "serialize_score")]
    pub total_score: f64,
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub certifications: Vec<String>,
    pub education_percentages: EducationRecord,
    pub projects: Vec<Project>,
}
