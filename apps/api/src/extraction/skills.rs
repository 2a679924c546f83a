//! Skill and subskill detection over résumé text.

use regex::RegexBuilder;
use tracing::{debug, warn};

use crate::models::screening::SkillConfiguration;

/// Maps raw skill spellings onto a canonical label.
///
/// `node`/`node.js` → `Node`, `c`/`c++` → `C/C++`; anything else is returned as-is.
pub fn normalize_skill(raw: &str) -> String {
    match raw.to_lowercase().as_str() {
        "node" | "node.js" => "Node".to_string(),
        "c" | "c++" => "C/C++".to_string(),
        _ => raw.to_string(),
    }
}

/// Finds configured skill names in `text`, case-insensitive and bounded by ASCII
/// word boundaries.
///
/// Returns normalized labels in first-seen order without duplicates. Labels keep
/// the casing found in the text, not the configured casing.
pub fn detect_skills(text: &str, skills: &[String]) -> Vec<String> {
    let alternatives: Vec<String> = skills
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| regex::escape(s))
        .collect();
    if alternatives.is_empty() {
        return Vec::new();
    }

    let pattern = format!(r"(?-u:\b)({})(?-u:\b)", alternatives.join("|"));
    let skill_re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            warn!("Could not build skill pattern: {e}");
            return Vec::new();
        }
    };

    let mut detected: Vec<String> = Vec::new();
    for m in skill_re.find_iter(text) {
        let label = normalize_skill(m.as_str());
        if !detected.contains(&label) {
            detected.push(label);
        }
    }
    detected
}

/// Returns the configured subskills of `skill` that occur anywhere in `text`
/// (case-insensitive substring), in configuration order.
pub fn detect_subskills(text: &str, skill: &str, config: &SkillConfiguration) -> Vec<String> {
    let Some(subskills) = config.subskills_for(skill) else {
        debug!("No subskills configured for skill: {skill}");
        return Vec::new();
    };

    let text_lower = text.to_lowercase();
    subskills
        .iter()
        .filter(|sub| text_lower.contains(&sub.to_lowercase()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::screening::ScoreWeights;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_node_variants() {
        assert_eq!(normalize_skill("node"), "Node");
        assert_eq!(normalize_skill("Node.JS"), "Node");
        assert_eq!(normalize_skill("NODE"), "Node");
    }

    #[test]
    fn test_normalize_c_variants() {
        assert_eq!(normalize_skill("c"), "C/C++");
        assert_eq!(normalize_skill("C++"), "C/C++");
    }

    #[test]
    fn test_normalize_passes_other_labels_through() {
        assert_eq!(normalize_skill("pYthon"), "pYthon");
    }

    #[test]
    fn test_detects_case_insensitively_with_text_casing() {
        let found = detect_skills("Expert in PYTHON and rust.", &skills(&["Python", "Rust"]));
        assert_eq!(found, vec!["PYTHON", "rust"]);
    }

    #[test]
    fn test_absent_skill_is_not_detected() {
        let found = detect_skills("Worked with Go and Kotlin", &skills(&["Python", "Go"]));
        assert_eq!(found, vec!["Go"]);
    }

    #[test]
    fn test_word_boundaries_are_respected() {
        let found = detect_skills("JavaScript developer", &skills(&["Java"]));
        assert!(found.is_empty());
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        let found = detect_skills("éPython and Rustñ", &skills(&["Python", "Rust"]));
        assert_eq!(found, vec!["Python", "Rust"]);
    }

    #[test]
    fn test_node_js_collapses_to_node() {
        let found = detect_skills("Built APIs in Node.js and node", &skills(&["Node.js", "Node"]));
        assert_eq!(found, vec!["Node"]);
    }

    #[test]
    fn test_c_and_cpp_collapse() {
        let found = detect_skills("Languages: C, C++ (basic)", &skills(&["C", "C++"]));
        assert_eq!(found, vec!["C/C++"]);
    }

    #[test]
    fn test_repeated_labels_are_kept_once() {
        let found = detect_skills("Python, Python, python", &skills(&["Python"]));
        assert_eq!(found, vec!["Python", "python"]);
    }

    #[test]
    fn test_empty_skill_list_yields_nothing() {
        assert!(detect_skills("Python everywhere", &[]).is_empty());
        assert!(detect_skills("Python everywhere", &skills(&[""])).is_empty());
    }

    #[test]
    fn test_subskills_found_in_config_order() {
        let config = SkillConfiguration::new(skills(&["Python"]), ScoreWeights::default())
            .with_subskills("python", &["Flask", "Django", "Pandas"]);
        let found = detect_subskills("Used django and FLASK daily", "Python", &config);
        assert_eq!(found, vec!["Flask", "Django"]);
    }

    #[test]
    fn test_subskills_missing_config_is_empty() {
        let config = SkillConfiguration::default();
        assert!(detect_subskills("Django", "Python", &config).is_empty());
    }
}
