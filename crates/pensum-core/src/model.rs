use serde::{Deserialize, Serialize};

/// One segmented homework problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// Declared problem number, or the 1-based position when none was printed.
    pub number: u32,
    /// Verbatim problem statement, trimmed.
    pub text: String,
    /// Document-level subject key (e.g. "calculus"), "other" when nothing matched.
    #[serde(rename = "type")]
    pub problem_type: String,
}

impl ProblemRecord {
    pub fn new(number: u32, text: impl Into<String>, problem_type: impl Into<String>) -> Self {
        ProblemRecord {
            number,
            text: text.into(),
            problem_type: problem_type.into(),
        }
    }
}

/// One step of a templated solution narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub step: u32,
    pub title: String,
    pub explanation: String,
    pub worked_example: String,
}

/// The formatted solution for a single problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionBundle {
    pub number: u32,
    /// Document-level subject, kept for display.
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Solution category whose template was used (e.g. "derivative").
    pub template: String,
    /// Display title of the template (e.g. "CALCULUS - DERIVATIVES").
    pub template_title: String,
    /// Copy of the problem statement.
    pub problem: String,
    pub steps: Vec<SolutionStep>,
    /// Theories cited by the template.
    pub theories: Vec<String>,
    /// Theory catalog entries for the document-level subject.
    #[serde(default)]
    pub domain_theories: Vec<String>,
    pub key_concepts: String,
    pub common_mistakes: String,
}
