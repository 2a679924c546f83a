// Rule-based extractors over decoded résumé text.
// Every extractor is a pure function of the text; misses resolve to sentinels or
// empty collections, never errors.

pub mod certifications;
pub mod contact;
pub mod education;
pub mod projects;
pub mod section;
pub mod skills;
