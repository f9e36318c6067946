use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PensumError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load ruleset from {path}: {reason}")]
    RulesetLoad { path: PathBuf, reason: String },

    #[error("invalid ruleset: {0}")]
    RulesetInvalid(String),

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("translation failed: {0}")]
    Translation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PensumError {
    /// True for failures that happen before any text reaches the pipeline
    /// (missing, unreadable or unparseable input documents).
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            PensumError::InputNotFound(_)
                | PensumError::Extraction(_)
                | PensumError::PdftotextNotFound
                | PensumError::PdftotextFailed { .. }
        )
    }
}
