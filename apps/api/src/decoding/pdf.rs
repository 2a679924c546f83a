use super::DecodeError;

/// Extracts the text layer of an in-memory PDF.
pub fn extract_text(data: &[u8]) -> Result<String, DecodeError> {
    if !data.starts_with(b"%PDF-") {
        return Err(DecodeError::Pdf("missing %PDF- header".to_string()));
    }
    pdf_extract::extract_text_from_mem(data).map_err(|e| DecodeError::Pdf(e.to_string()))
}
