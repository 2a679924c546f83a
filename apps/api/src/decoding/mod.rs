//! Document decoding — turns uploaded PDF/DOCX bytes into plain text.
//!
//! `AppState` holds an `Arc<dyn DocumentDecoder>` so handlers never depend on a
//! concrete backend. Decoding is CPU-bound and runs on the blocking pool.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

pub mod docx;
pub mod pdf;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The two upload formats the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves a declared content type, ignoring parameters such as `charset`.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Some(DocumentFormat::Pdf),
            DOCX_MIME => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => PDF_MIME,
            DocumentFormat::Docx => DOCX_MIME,
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Error parsing PDF: {0}")]
    Pdf(String),

    #[error("Error extracting text from DOCX file: {0}")]
    Docx(String),

    #[error("Decoder task failed: {0}")]
    Task(String),
}

#[async_trait]
pub trait DocumentDecoder: Send + Sync {
    async fn decode(&self, format: DocumentFormat, data: Bytes) -> Result<String, DecodeError>;
}

/// Pure-Rust decoder: `pdf-extract` for PDF, `zip` + `quick-xml` for DOCX.
pub struct NativeDecoder;

#[async_trait]
impl DocumentDecoder for NativeDecoder {
    async fn decode(&self, format: DocumentFormat, data: Bytes) -> Result<String, DecodeError> {
        debug!("Decoding {} bytes as {}", data.len(), format.mime());
        tokio::task::spawn_blocking(move || match format {
            DocumentFormat::Pdf => pdf::extract_text(&data),
            DocumentFormat::Docx => docx::extract_text(&data),
        })
        .await
        .map_err(|e| DecodeError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_supported_formats() {
        assert_eq!(
            DocumentFormat::from_mime("application/pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_mime(DOCX_MIME),
            Some(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_from_mime_ignores_parameters_and_case() {
        assert_eq!(
            DocumentFormat::from_mime("Application/PDF; charset=binary"),
            Some(DocumentFormat::Pdf)
        );
    }

    #[test]
    fn test_from_mime_rejects_other_types() {
        assert_eq!(DocumentFormat::from_mime("image/png"), None);
        assert_eq!(DocumentFormat::from_mime("application/msword"), None);
        assert_eq!(DocumentFormat::from_mime(""), None);
    }

    #[tokio::test]
    async fn test_native_decoder_reports_bad_pdf() {
        let result = NativeDecoder
            .decode(DocumentFormat::Pdf, Bytes::from_static(b"not a pdf"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_native_decoder_reads_docx() {
        let data = docx::tests::build_docx(
            r#"<w:document xmlns:w="w"><w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p></w:body></w:document>"#,
        );
        let text = NativeDecoder
            .decode(DocumentFormat::Docx, Bytes::from(data))
            .await
            .unwrap();
        assert_eq!(text.trim(), "Jane Doe");
    }
}
