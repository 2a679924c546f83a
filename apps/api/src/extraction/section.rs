//! Section-scoped skill checks.
//!
//! A section runs from the first case-insensitive occurrence of its heading up to the
//! next "Education", "Projects" or "Certifications" heading, or the end of the text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Points a skill earns for each experience section that mentions it.
pub const SECTION_BONUS: f64 = 20.0;

static SECTION_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Education|Projects|Certifications").unwrap());

static EXPERIENCE_SUMMARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Experience Summary").unwrap());
static PROFESSIONAL_EXPERIENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Professional Experience").unwrap());
static WORK_EXPERIENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Work Experience").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceSection {
    Summary,
    Professional,
    Work,
}

impl ExperienceSection {
    pub const ALL: [ExperienceSection; 3] = [
        ExperienceSection::Summary,
        ExperienceSection::Professional,
        ExperienceSection::Work,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceSection::Summary => "Experience Summary",
            ExperienceSection::Professional => "Professional Experience",
            ExperienceSection::Work => "Work Experience",
        }
    }

    fn heading(self) -> &'static Regex {
        match self {
            ExperienceSection::Summary => &*EXPERIENCE_SUMMARY,
            ExperienceSection::Professional => &*PROFESSIONAL_EXPERIENCE,
            ExperienceSection::Work => &*WORK_EXPERIENCE,
        }
    }

    /// Slice of `text` covered by this section, heading included.
    pub fn span(self, text: &str) -> Option<&str> {
        let heading = self.heading().find(text)?;
        let end = SECTION_END
            .find_at(text, heading.end())
            .map_or(text.len(), |m| m.start());
        Some(&text[heading.start()..end])
    }
}

/// Returns `score` when `skill` appears inside `section`, otherwise 0.
pub fn section_contribution(
    text: &str,
    skill: &str,
    section: ExperienceSection,
    score: f64,
) -> f64 {
    match section.span(text) {
        Some(span) if span.to_lowercase().contains(&skill.to_lowercase()) => score,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        Skills: Kotlin\n\
        WORK EXPERIENCE\n\
        Shipped services in Rust and Go.\n\
        Education\n\
        B.Tech, used Java in labs.\n";

    #[test]
    fn test_span_stops_at_next_boundary() {
        let span = ExperienceSection::Work.span(RESUME).unwrap();
        assert!(span.starts_with("WORK EXPERIENCE"));
        assert!(span.contains("Rust"));
        assert!(!span.contains("Java"));
    }

    #[test]
    fn test_span_runs_to_end_without_boundary() {
        let text = "Professional Experience\nLed the Python migration.";
        let span = ExperienceSection::Professional.span(text).unwrap();
        assert_eq!(span, text);
    }

    #[test]
    fn test_missing_heading_has_no_span() {
        assert!(ExperienceSection::Summary.span(RESUME).is_none());
    }

    #[test]
    fn test_boundary_match_is_case_insensitive() {
        let text = "Work Experience\nRust\nPROJECTS\nJava";
        assert_eq!(ExperienceSection::Work.span(text), Some("Work Experience\nRust\n"));
    }

    #[test]
    fn test_contribution_when_skill_inside_section() {
        assert_eq!(
            section_contribution(RESUME, "rust", ExperienceSection::Work, SECTION_BONUS),
            20.0
        );
    }

    #[test]
    fn test_no_contribution_when_skill_outside_section() {
        assert_eq!(
            section_contribution(RESUME, "Java", ExperienceSection::Work, SECTION_BONUS),
            0.0
        );
        assert_eq!(
            section_contribution(RESUME, "Kotlin", ExperienceSection::Work, SECTION_BONUS),
            0.0
        );
    }

    #[test]
    fn test_sections_contribute_independently() {
        let text = "Experience Summary\nPython\nProfessional Experience\nPython\nWork Experience\nPython";
        let total: f64 = ExperienceSection::ALL
            .iter()
            .map(|s| section_contribution(text, "Python", *s, SECTION_BONUS))
            .sum();
        assert_eq!(total, 60.0);
    }
}
