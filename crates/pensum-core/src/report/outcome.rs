use crate::model::SolutionBundle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The end product of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    /// Same order as the input records.
    pub problems_analyzed: Vec<SolutionBundle>,
    pub cliff_notes: CliffNotes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_problems: usize,
    /// Distinct document-level types, uppercased.
    pub problem_types: BTreeSet<String>,
    /// Size of the theory catalog, not the number of theories cited.
    pub total_theories: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliffNotes {
    pub overview: Overview,
    pub methodology: Vec<MethodologyStep>,
    pub concepts_by_type: Vec<ConceptSummary>,
    pub theories: Vec<TheoryUsage>,
    pub mistakes: Vec<String>,
    pub formulas: Vec<FormulaGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub total_problems: usize,
    /// Sorted distinct template titles.
    pub template_types: Vec<String>,
    pub unique_theories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodologyStep {
    pub step: u32,
    pub title: String,
    pub content: String,
}

/// Problems that share a solution template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptSummary {
    pub template: String,
    pub title: String,
    pub problems: Vec<u32>,
    pub key_concepts: String,
}

/// One cited theory and where it was cited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheoryUsage {
    pub name: String,
    pub bucket: String,
    /// Ascending, no duplicates.
    pub problems: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaGroup {
    pub bucket: String,
    pub formulas: Vec<String>,
}
