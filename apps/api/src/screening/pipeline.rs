//! Screening pipeline — runs every extractor over the decoded text, then scores.
//!
//! Pure and synchronous: the same (text, configuration) always yields the same result.

use tracing::info;

use crate::extraction::certifications::extract_certifications;
use crate::extraction::contact::extract_profile;
use crate::extraction::education::extract_education;
use crate::extraction::projects::extract_projects;
use crate::extraction::skills::detect_skills;
use crate::models::screening::{ScreeningResult, SkillConfiguration};
use crate::screening::scoring::{compute_scores, ScoringInputs};

pub fn screen_text(text: String, config: &SkillConfiguration) -> ScreeningResult {
    let detected_skills = detect_skills(&text, config.skills());
    let certifications = extract_certifications(&text);
    let profile = extract_profile(&text);
    let education_percentages = extract_education(&text);
    let projects = extract_projects(&text);

    let report = compute_scores(
        &ScoringInputs {
            text: &text,
            detected_skills: &detected_skills,
            projects: &projects,
            certifications: &certifications,
        },
        config,
    );

    info!(
        skills = config.skills().len(),
        detected = detected_skills.len(),
        projects = projects.len(),
        certifications = certifications.len(),
        total_score = report.total_score,
        "Screening complete"
    );

    ScreeningResult {
        text,
        skill_scores: report.skill_scores,
        total_score: report.total_score,
        profile,
        certifications,
        education_percentages,
        projects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::contact::{UNKNOWN_COLLEGE, UNKNOWN_NAME};
    use crate::extraction::education::NOT_MENTIONED;
    use crate::models::screening::ScreeningPayload;

    const SCENARIO_TEXT: &str = "John Smith\njohn@x.com\n(555) 123-4567\nWork Experience\nBuilt tools using Python and Node.js.\nCertified Python Course.";

    fn scenario_config() -> SkillConfiguration {
        let payload: ScreeningPayload = serde_json::from_str(
            r#"{
                "selectedSkills": ["Python", "Node"],
                "skillScore": 10,
                "subSkillScore": 5,
                "projectScore": 5,
                "certificateScore": 5
            }"#,
        )
        .unwrap();
        SkillConfiguration::from_payload(payload)
    }

    #[test]
    fn test_reference_scenario_end_to_end() {
        let result = screen_text(SCENARIO_TEXT.to_string(), &scenario_config());

        assert_eq!(result.skill_scores.get("Python"), Some(35.0));
        assert_eq!(result.skill_scores.get("Node"), Some(30.0));
        assert_eq!(result.total_score, 65.0);
        assert_eq!(result.profile.name, "John Smith");
        assert_eq!(result.profile.email, "john@x.com");
        assert_eq!(result.profile.phone, "(555) 123-4567");
        assert_eq!(result.profile.college, UNKNOWN_COLLEGE);
        assert_eq!(result.certifications, vec!["Certified Python Course."]);
        assert_eq!(result.education_percentages.tenth, NOT_MENTIONED);
        assert!(result.projects.is_empty());
        assert_eq!(result.text, SCENARIO_TEXT);
    }

    #[test]
    fn test_empty_skills_still_extracts_entities() {
        let config = SkillConfiguration::from_payload(ScreeningPayload::default());
        let result = screen_text(SCENARIO_TEXT.to_string(), &config);

        assert!(result.skill_scores.is_empty());
        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.profile.email, "john@x.com");
        assert_eq!(result.certifications.len(), 1);
    }

    #[test]
    fn test_output_is_idempotent() {
        let config = scenario_config();
        let first = serde_json::to_string(&screen_text(SCENARIO_TEXT.to_string(), &config)).unwrap();
        let second = serde_json::to_string(&screen_text(SCENARIO_TEXT.to_string(), &config)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_response_shape_is_complete() {
        let config = SkillConfiguration::default();
        let value = serde_json::to_value(screen_text(String::new(), &config)).unwrap();
        for key in [
            "text",
            "skillScores",
            "totalScore",
            "name",
            "email",
            "phone",
            "college",
            "certifications",
            "educationPercentages",
            "projects",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["name"], UNKNOWN_NAME);
    }
}
