use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches `<title> | <skills used> <year>` lines.
static PROJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z0-9\s\-_]+?)\s*\|\s*(.*?)\s*(\d{4})").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub skills_used: String,
    pub year: String,
}

impl Project {
    /// Lowercased text used when checking a project for skill relevance.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.skills_used).to_lowercase()
    }
}

/// All project entries in document order. Non-overlapping, left to right.
pub fn extract_projects(text: &str) -> Vec<Project> {
    PROJECT_RE
        .captures_iter(text)
        .map(|caps| Project {
            title: caps[1].trim().to_string(),
            skills_used: caps[2].trim().to_string(),
            year: caps[3].to_string(),
        })
        .collect()
}
