use std::io::Cursor;

use docx_rust::document::BodyContent;
use docx_rust::DocxFile;

use crate::models::{AppError, AppResult};

/// The only upload extension accepted by the service.
pub const DOCX_EXTENSION: &str = ".docx";

/// Suffix check on the declared filename; no content sniffing.
pub fn is_docx_filename(filename: &str) -> bool {
    filename.ends_with(DOCX_EXTENSION)
}

/// Parses a docx container and concatenates the text of every paragraph in
/// document order, one paragraph per line.
///
/// A byte stream that is not a valid docx container yields `AppError::Parse`.
pub fn extract_text(content: &[u8]) -> AppResult<String> {
    let docx_file = DocxFile::from_reader(Cursor::new(content))
        .map_err(|e| AppError::Parse(e.to_string()))?;
    let docx = docx_file
        .parse()
        .map_err(|e| AppError::Parse(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .body
        .content
        .iter()
        .filter_map(|block| match block {
            BodyContent::Paragraph(paragraph) => {
                Some(paragraph.iter_text().map(|text| text.as_ref()).collect())
            }
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}
