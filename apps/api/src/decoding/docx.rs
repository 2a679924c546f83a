use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::DecodeError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts body text from an in-memory DOCX (Office Open XML) package.
///
/// Paragraphs end with a newline; `<w:tab/>` and `<w:br/>` become tab and newline.
pub fn extract_text(data: &[u8]) -> Result<String, DecodeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| DecodeError::Docx(format!("Failed to open archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DecodeError::Docx(format!("{DOCUMENT_PART} not found: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| DecodeError::Docx(format!("Failed to read {DOCUMENT_PART}: {e}")))?;

    document_text(&xml)
}

fn document_text(xml: &str) -> Result<String, DecodeError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let chunk = e
                    .unescape()
                    .map_err(|err| DecodeError::Docx(err.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DecodeError::Docx(format!(
                    "Malformed XML at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}
