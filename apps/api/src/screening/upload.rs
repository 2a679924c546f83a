use axum::extract::Multipart;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::models::screening::ScreeningPayload;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";
/// Multipart field carrying the JSON skill configuration.
pub const DATA_FIELD: &str = "data";

/// An uploaded résumé with its declared content type.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Parsed form fields from the multipart upload.
#[derive(Debug)]
pub struct UploadForm {
    pub file: UploadedFile,
    pub payload: ScreeningPayload,
}

/// Parse a multipart upload into the résumé file and its configuration.
///
/// A missing `data` field means an empty configuration; a missing `resume` field
/// or malformed JSON is a validation error.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut payload = ScreeningPayload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            RESUME_FIELD => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file data: {e}")))?;
                debug!("Received {filename} ({content_type}, {} bytes)", data.len());
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            }
            DATA_FIELD => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read data: {e}")))?;
                if !raw.trim().is_empty() {
                    payload = serde_json::from_str(&raw)
                        .map_err(|e| AppError::Validation(format!("Invalid data JSON: {e}")))?;
                }
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    let file = file.ok_or_else(|| {
        AppError::Validation(format!("No file uploaded in '{RESUME_FIELD}' field"))
    })?;

    Ok(UploadForm { file, payload })
}
