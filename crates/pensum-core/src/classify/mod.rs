pub mod engine;
pub mod outcome;

pub use engine::Classifier;
pub use outcome::Classification;

use crate::error::PensumError;
use crate::rules::builtin::{self, SOLUTION_TYPES, SUBJECTS, THEORY_BUCKETS};
use crate::rules::schema::RuleSetDef;

/// The three rule sets used by the pipeline.
///
/// The document-level subject and the solution-template category are decided
/// by different vocabularies and can disagree for the same text.
#[derive(Debug, Clone)]
pub struct Classifiers {
    /// Document-level subject ("calculus", "circuit_analysis", ..., "other").
    pub subjects: Classifier,
    /// Solution-template category ("derivative", ..., "general").
    pub solutions: Classifier,
    /// Theory-name buckets for the cliff notes ("Calculus", ..., "General").
    pub theory_buckets: Classifier,
}

impl Classifiers {
    pub fn builtin() -> Result<Self, PensumError> {
        Self::from_defs(
            &builtin::load_preset(SUBJECTS)?,
            &builtin::load_preset(SOLUTION_TYPES)?,
            &builtin::load_preset(THEORY_BUCKETS)?,
        )
    }

    pub fn from_defs(
        subjects: &RuleSetDef,
        solutions: &RuleSetDef,
        theory_buckets: &RuleSetDef,
    ) -> Result<Self, PensumError> {
        Ok(Classifiers {
            subjects: Classifier::compile(subjects)?,
            solutions: Classifier::compile(solutions)?,
            theory_buckets: Classifier::compile(theory_buckets)?,
        })
    }
}
