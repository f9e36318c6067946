pub mod pdftotext;
pub mod plaintext;

use crate::error::PensumError;
use std::io::Write;
use std::path::Path;

pub use pdftotext::PdftotextExtractor;
pub use plaintext::PlainTextExtractor;

/// Trait for document text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract the text of each page, in page order.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, PensumError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join pages into one document, each preceded by a `--- PAGE n ---` line.
/// Blank pages are left out but keep their number.
pub fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| format!("--- PAGE {} ---\n{}\n", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract pages from an in-memory upload by writing it to a temporary file.
pub fn extract_pages_from_bytes(
    bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<String>, PensumError> {
    let mut tmpfile =
        tempfile::NamedTempFile::new().map_err(|e| PensumError::Extraction(e.to_string()))?;
    tmpfile
        .write_all(bytes)
        .map_err(|e| PensumError::Extraction(e.to_string()))?;
    tmpfile
        .flush()
        .map_err(|e| PensumError::Extraction(e.to_string()))?;
    extractor.extract_pages(tmpfile.path())
}

/// Split text on form feeds, the page separator pdftotext emits.
pub(crate) fn split_form_feeds(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split('\x0c').map(String::from).collect();
    // pdftotext terminates the last page with a form feed too
    if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
        pages.pop();
    }
    pages
}
