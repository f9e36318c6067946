use serde::{Deserialize, Serialize};

/// The label chosen for a piece of text and the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Position of the deciding rule in priority order; `None` for the default.
    pub rule_index: Option<usize>,
    /// The substring that triggered the rule.
    pub matched: Option<String>,
}

impl Classification {
    pub fn is_default(&self) -> bool {
        self.rule_index.is_none()
    }
}
