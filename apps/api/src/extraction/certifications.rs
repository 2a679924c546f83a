use once_cell::sync::Lazy;
use regex::Regex;

static CERTIFICATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Acquired|Obtained|Earned|Certificate|Certified|Course).*?\.").unwrap()
});

/// Phrases that start with a certification keyword and run to the next period.
///
/// Phrases mentioning JavaScript are dropped so they never count toward a "Java" skill.
pub fn extract_certifications(text: &str) -> Vec<String> {
    CERTIFICATION_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|cert| !cert.to_lowercase().contains("javascript"))
        .collect()
}
