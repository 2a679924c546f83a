//! Education-level scores (percentages or CGPA) keyed by level.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const NOT_MENTIONED: &str = "Not Mentioned";

// The 10th/12th gap excludes the characters of "10th", "12th", "UG" and "PG" so a
// score is never borrowed from a neighbouring level.
static TENTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Matric|Senior\s*Secondary|10th)[^10th12thUGPG]*?((?-u:\b)(?:[0-9]{1,2}(?:\.[0-9]{1,2})?|100)%)")
        .unwrap()
});

static TWELFTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Higher\s*Secondary|10\+2|12th)[^10th12thUGPG]*?((?-u:\b)(?:[0-9]{1,2}(?:\.[0-9]{1,2})?|100)%)")
        .unwrap()
});

static UNDERGRADUATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Bachelor[\s\S]*?)([0-9]{2,3}%|(?:[0-9]\.[0-9]{1,2})\s*CGPA)").unwrap()
});

static POSTGRADUATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Master[\s\S]*?)([0-9]{2,3}%|(?:[0-9]\.[0-9]{1,2})\s*CGPA)").unwrap()
});

/// Always carries all four levels; unmatched levels hold [`NOT_MENTIONED`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationRecord {
    #[serde(rename = "10th")]
    pub tenth: String,
    #[serde(rename = "12th")]
    pub twelfth: String,
    #[serde(rename = "UG")]
    pub undergraduate: String,
    #[serde(rename = "PG")]
    pub postgraduate: String,
}

fn score_after(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_MENTIONED.to_string())
}

pub fn extract_education(text: &str) -> EducationRecord {
    EducationRecord {
        tenth: score_after(&TENTH_RE, text),
        twelfth: score_after(&TWELFTH_RE, text),
        undergraduate: score_after(&UNDERGRADUATE_RE, text),
        postgraduate: score_after(&POSTGRADUATE_RE, text),
    }
}
