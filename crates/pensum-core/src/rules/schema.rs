use serde::{Deserialize, Serialize};

/// An ordered set of keyword rules mapping text to a single label.
///
/// Rules are evaluated in declaration order and the first match wins, so the
/// position of a rule in `rules` is its priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Label returned when no rule matches.
    pub default_label: String,
    pub rules: Vec<KeywordRuleDef>,
}

/// A single label and the alternatives that select it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRuleDef {
    pub label: String,
    /// Literal substrings, matched case-insensitively.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Raw regular expressions, matched case-insensitively.
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl KeywordRuleDef {
    /// All alternatives as regex fragments, keywords escaped.
    pub fn alternatives(&self) -> Vec<String> {
        self.keywords
            .iter()
            .map(|k| regex::escape(k))
            .chain(self.patterns.iter().cloned())
            .collect()
    }
}
