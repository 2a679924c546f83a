// Screening: multipart intake, extraction pipeline and skill scoring.
// Configuration is built per request and passed down explicitly; nothing here
// holds state between requests.

pub mod handlers;
pub mod pipeline;
pub mod scoring;
pub mod upload;
