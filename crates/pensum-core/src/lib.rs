pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod extraction;
pub mod language;
pub mod model;
pub mod report;
pub mod rules;
pub mod segment;
pub mod solution;

use catalog::Catalog;
use classify::Classifiers;
use config::AnalyzerConfig;
use error::PensumError;
use extraction::PdfExtractor;
use language::Translator;
use model::{ProblemRecord, SolutionBundle};
use report::outcome::Report;
use report::AggregateOptions;
use segment::{SegmentOptions, Segmentation};
use std::path::Path;

/// The analysis pipeline with its rule sets, catalog and settings.
///
/// Everything it holds is read-only, so one analyzer can serve any number of
/// documents (and threads).
#[derive(Debug, Clone)]
pub struct Analyzer {
    catalog: Catalog,
    classifiers: Classifiers,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Builtin rule sets and catalog with default settings.
    pub fn builtin() -> Result<Self, PensumError> {
        Self::from_config(AnalyzerConfig::default())
    }

    /// Load every table named in `config.sources`, falling back to the
    /// builtin one.
    pub fn from_config(config: AnalyzerConfig) -> Result<Self, PensumError> {
        config.validate()?;
        let sources = &config.sources;

        let ruleset = |path: Option<&Path>, preset: &str| match path {
            Some(p) => rules::load_ruleset(p),
            None => rules::builtin::load_preset(preset),
        };
        let classifiers = Classifiers::from_defs(
            &ruleset(sources.subject_rules.as_deref(), rules::builtin::SUBJECTS)?,
            &ruleset(sources.solution_rules.as_deref(), rules::builtin::SOLUTION_TYPES)?,
            &ruleset(
                sources.theory_bucket_rules.as_deref(),
                rules::builtin::THEORY_BUCKETS,
            )?,
        )?;

        let theories = match &sources.theories {
            Some(p) => catalog::load_theories(p)?,
            None => catalog::builtin::theories()?,
        };
        let templates = match &sources.templates {
            Some(p) => catalog::load_templates(p)?,
            None => catalog::builtin::templates()?,
        };
        let formulas = match &sources.formulas {
            Some(p) => catalog::load_formulas(p)?,
            None => catalog::builtin::formulas()?,
        };

        Ok(Analyzer {
            catalog: Catalog::new(theories, templates, formulas)?,
            classifiers,
            config,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classifiers(&self) -> &Classifiers {
        &self.classifiers
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Document-level subject of `text`.
    pub fn classify(&self, text: &str) -> &str {
        self.classifiers.subjects.classify(text)
    }

    /// Solution-template category of `text`.
    pub fn classify_solution(&self, text: &str) -> &str {
        self.classifiers.solutions.classify(text)
    }

    pub fn segment(&self, text: &str) -> Vec<ProblemRecord> {
        self.segmentation(text).records
    }

    pub fn segmentation(&self, text: &str) -> Segmentation {
        let options = SegmentOptions {
            min_paragraph_chars: self.config.min_paragraph_chars,
        };
        segment::segment_with(text, &self.classifiers.subjects, &options)
    }

    pub fn format(&self, record: &ProblemRecord) -> SolutionBundle {
        solution::format(record, &self.classifiers.solutions, &self.catalog)
    }

    pub fn aggregate(&self, bundles: Vec<SolutionBundle>) -> Report {
        let options = AggregateOptions {
            mistake_cap: self.config.mistake_cap,
        };
        report::aggregate(
            bundles,
            &self.catalog,
            &self.classifiers.theory_buckets,
            &options,
        )
    }

    /// Segment, format and aggregate a whole document.
    pub fn analyze(&self, text: &str) -> Report {
        self.analyze_localized(text, None)
    }

    /// Like [`analyze`](Self::analyze), translating records into the
    /// configured target language (default English) first when a translator
    /// is given.
    pub fn analyze_localized(&self, text: &str, translator: Option<&dyn Translator>) -> Report {
        let segmentation = self.segmentation(text);
        if segmentation.records.is_empty() {
            tracing::warn!("no problems found in document");
        }
        let records = self.localize(segmentation.records, translator);
        self.analyze_records(&records)
    }

    /// Format and aggregate records that were segmented elsewhere.
    pub fn analyze_records(&self, records: &[ProblemRecord]) -> Report {
        let bundles = records.iter().map(|r| self.format(r)).collect();
        self.aggregate(bundles)
    }

    fn localize(
        &self,
        records: Vec<ProblemRecord>,
        translator: Option<&dyn Translator>,
    ) -> Vec<ProblemRecord> {
        let Some(translator) = translator else {
            return records;
        };
        let target = self
            .config
            .target_language
            .as_deref()
            .unwrap_or(language::DEFAULT_LANGUAGE);
        language::localize_records(records, translator, target, &self.classifiers.subjects)
    }
}

/// Extract a document and join its pages with page markers.
pub fn extract_document(path: &Path, extractor: &dyn PdfExtractor) -> Result<String, PensumError> {
    let pages = extractor.extract_pages(path)?;
    tracing::info!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "extracted document"
    );
    Ok(extraction::join_pages(&pages))
}

/// Main API entry point: analyze a homework document on disk.
///
/// Only extraction failures are returned as errors; a document without
/// recognizable problems yields an empty report.
pub fn analyze_pdf(
    path: &Path,
    extractor: &dyn PdfExtractor,
    analyzer: &Analyzer,
    translator: Option<&dyn Translator>,
) -> Result<Report, PensumError> {
    let text = extract_document(path, extractor)?;
    Ok(analyzer.analyze_localized(&text, translator))
}
