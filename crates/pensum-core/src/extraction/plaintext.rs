use crate::error::PensumError;
use crate::extraction::{split_form_feeds, PdfExtractor};
use std::path::Path;

/// Reads UTF-8 text files, treating form feeds as page breaks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PdfExtractor for PlainTextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, PensumError> {
        if !path.exists() {
            return Err(PensumError::InputNotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)
            .map_err(|e| PensumError::Extraction(format!("{}: {}", path.display(), e)))?;
        let text = String::from_utf8(bytes).map_err(|_| {
            PensumError::Extraction(format!("{} is not valid UTF-8 text", path.display()))
        })?;
        Ok(split_form_feeds(&text))
    }

    fn backend_name(&self) -> &str {
        "plaintext"
    }
}
