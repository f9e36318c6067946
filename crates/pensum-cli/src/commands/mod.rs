pub mod analyze;
pub mod catalog;
pub mod classify;
pub mod rules;
pub mod segment;

use pensum_core::config::AnalyzerConfig;
use pensum_core::error::PensumError;
use pensum_core::extraction::{PdfExtractor, PdftotextExtractor, PlainTextExtractor};
use pensum_core::Analyzer;
use std::path::Path;

/// Build an analyzer from an optional config file plus environment overrides.
pub fn load_analyzer(config: Option<&Path>) -> Result<Analyzer, PensumError> {
    let config = match config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    Analyzer::from_config(config.with_env_overrides()?)
}

/// Pick an extraction backend by file extension.
pub fn extractor_for(path: &Path) -> Box<dyn PdfExtractor> {
    if has_extension(path, "pdf") {
        Box::new(PdftotextExtractor::new())
    } else {
        Box::new(PlainTextExtractor)
    }
}

pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
