use crate::classify::Classifier;
use crate::error::PensumError;
use crate::model::ProblemRecord;

/// Language assumed for every record when no translator is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Optional language detection and translation backend.
pub trait Translator: Send + Sync {
    /// ISO 639-1 code of the text's language.
    fn detect_language(&self, text: &str) -> Result<String, PensumError>;

    fn translate(&self, text: &str, target_language: &str) -> Result<String, PensumError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Translate records that are not in `target_language`, re-classifying the
/// translated text.
///
/// A record whose detection or translation fails is kept unchanged.
pub fn localize_records(
    records: Vec<ProblemRecord>,
    translator: &dyn Translator,
    target_language: &str,
    subjects: &Classifier,
) -> Vec<ProblemRecord> {
    records
        .into_iter()
        .map(|record| match localize(&record, translator, target_language) {
            Ok(Some(text)) => {
                let problem_type = subjects.classify(&text).to_string();
                tracing::debug!(number = record.number, %problem_type, "translated problem");
                ProblemRecord {
                    number: record.number,
                    text,
                    problem_type,
                }
            }
            Ok(None) => record,
            Err(e) => {
                tracing::warn!(
                    number = record.number,
                    backend = translator.backend_name(),
                    error = %e,
                    "translation failed, keeping original text"
                );
                record
            }
        })
        .collect()
}

fn localize(
    record: &ProblemRecord,
    translator: &dyn Translator,
    target_language: &str,
) -> Result<Option<String>, PensumError> {
    let detected = translator.detect_language(&record.text)?;
    if detected.eq_ignore_ascii_case(target_language) {
        return Ok(None);
    }
    let text = translator.translate(&record.text, target_language)?;
    if text.trim().is_empty() {
        return Err(PensumError::Translation("backend returned empty text".into()));
    }
    Ok(Some(text))
}
