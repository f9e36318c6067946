use crate::error::PensumError;
use crate::report::MISTAKE_CAP;
use crate::segment::MIN_PARAGRAPH_CHARS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Analyzer settings, read from a TOML file and the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of mistakes kept in the cliff notes.
    pub mistake_cap: usize,
    /// Paragraph fallback drops chunks shorter than this.
    pub min_paragraph_chars: usize,
    /// Translate problems into this language when a translator is available.
    pub target_language: Option<String>,
    pub sources: SourcesConfig,
}

/// Replacement files for the builtin rule sets and catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub subject_rules: Option<PathBuf>,
    pub solution_rules: Option<PathBuf>,
    pub theory_bucket_rules: Option<PathBuf>,
    pub theories: Option<PathBuf>,
    pub templates: Option<PathBuf>,
    pub formulas: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            mistake_cap: MISTAKE_CAP,
            min_paragraph_chars: MIN_PARAGRAPH_CHARS,
            target_language: None,
            sources: SourcesConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load a config file. Relative source paths are resolved against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, PensumError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PensumError::Config(format!("{}: {}", path.display(), e)))?;
        let mut config: AnalyzerConfig = toml::from_str(&content)
            .map_err(|e| PensumError::Config(format!("{}: {}", path.display(), e)))?;

        if let Some(base) = path.parent() {
            config.sources.resolve_against(base);
        }
        config.validate()?;
        Ok(config)
    }

    /// Apply `PENSUM_MISTAKE_CAP`, `PENSUM_MIN_PARAGRAPH_CHARS` and
    /// `PENSUM_TARGET_LANGUAGE`.
    pub fn with_env_overrides(self) -> Result<Self, PensumError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, PensumError> {
        if let Some(value) = lookup("PENSUM_MISTAKE_CAP") {
            self.mistake_cap = parse_number("PENSUM_MISTAKE_CAP", &value)?;
        }
        if let Some(value) = lookup("PENSUM_MIN_PARAGRAPH_CHARS") {
            self.min_paragraph_chars = parse_number("PENSUM_MIN_PARAGRAPH_CHARS", &value)?;
        }
        if let Some(value) = lookup("PENSUM_TARGET_LANGUAGE") {
            let value = value.trim();
            self.target_language = (!value.is_empty()).then(|| value.to_string());
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), PensumError> {
        if self.mistake_cap == 0 {
            return Err(PensumError::Config("mistake_cap must be at least 1".into()));
        }
        if let Some(lang) = &self.target_language {
            if lang.trim().is_empty() {
                return Err(PensumError::Config(
                    "target_language must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

impl SourcesConfig {
    fn resolve_against(&mut self, base: &Path) {
        for path in [
            &mut self.subject_rules,
            &mut self.solution_rules,
            &mut self.theory_bucket_rules,
            &mut self.theories,
            &mut self.templates,
            &mut self.formulas,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

fn parse_number(key: &str, value: &str) -> Result<usize, PensumError> {
    value
        .trim()
        .parse()
        .map_err(|_| PensumError::Config(format!("{key} must be a non-negative integer, got '{value}'")))
}
