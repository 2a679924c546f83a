//! Candidate identity extractors: name, email, phone and college.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::screening::CandidateProfile;

pub const UNKNOWN_NAME: &str = "Unknown Name";
pub const UNKNOWN_COLLEGE: &str = "Unknown College";

// Word boundaries, digits and word characters are ASCII-only throughout.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)").unwrap()
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(?[0-9]{3}\)?[\s-]?[0-9]{3}[\s-]?[0-9]{4}").unwrap());

// Capture group 2 is the institution name between "(" / "," and ")" / ",".
static COLLEGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(University|College)[\s\S]*?(?:\(|,)([A-Za-z0-9_\s]+?)(?:\)|,)").unwrap()
});

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][a-z]+(?: [A-Z][a-z]+)+|[A-Z\s]+(?: [A-Z\s]+)+").unwrap()
});

static INITIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]\s+[A-Z]").unwrap());

pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn extract_college(text: &str) -> String {
    COLLEGE_RE
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| UNKNOWN_COLLEGE.to_string())
}

/// First capitalized or all-caps multi-word run in the text.
///
/// When the run looks like it swallowed a trailing word after an initial
/// ("JOHN A SMITH RESUME"), the last token is dropped.
pub fn extract_name(text: &str) -> String {
    let Some(m) = NAME_RE.find(text) else {
        return UNKNOWN_NAME.to_string();
    };

    let full_name = m.as_str().trim();
    if INITIAL_RE.is_match(full_name) {
        if let Some((head, _)) = full_name.rsplit_once(' ') {
            return head.to_string();
        }
    }
    full_name.to_string()
}

pub fn extract_profile(text: &str) -> CandidateProfile {
    CandidateProfile {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        college: extract_college(text),
    }
}
