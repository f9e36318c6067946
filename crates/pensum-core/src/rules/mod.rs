pub mod builtin;
pub mod schema;

use crate::error::PensumError;
use regex::Regex;
use schema::RuleSetDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a keyword rule set from a JSON file.
pub fn load_ruleset(path: &Path) -> Result<RuleSetDef, PensumError> {
    let content = std::fs::read_to_string(path).map_err(|e| PensumError::RulesetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_ruleset(&content, path)
}

/// Parse a rule set from a JSON string.
pub fn parse_ruleset(json: &str, source: &Path) -> Result<RuleSetDef, PensumError> {
    let ruleset: RuleSetDef = serde_json::from_str(json).map_err(|e| PensumError::RulesetLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Parse a rule set from a JSON string (no file path context).
pub fn parse_ruleset_str(json: &str) -> Result<RuleSetDef, PensumError> {
    let ruleset: RuleSetDef = serde_json::from_str(json).map_err(PensumError::Json)?;
    validate_ruleset(&ruleset)?;
    Ok(ruleset)
}

/// Validate that a rule set is well-formed.
pub fn validate_ruleset(ruleset: &RuleSetDef) -> Result<(), PensumError> {
    if ruleset.name.trim().is_empty() {
        return Err(PensumError::RulesetInvalid("name must not be empty".into()));
    }

    if ruleset.default_label.trim().is_empty() {
        return Err(PensumError::RulesetInvalid(format!(
            "ruleset '{}' has an empty default_label",
            ruleset.name
        )));
    }

    if ruleset.rules.is_empty() {
        return Err(PensumError::RulesetInvalid("rules must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for rule in &ruleset.rules {
        if rule.label.trim().is_empty() {
            return Err(PensumError::RulesetInvalid(
                "rule label must not be empty".into(),
            ));
        }

        if !seen.insert(rule.label.as_str()) {
            return Err(PensumError::RulesetInvalid(format!(
                "label '{}' is declared more than once",
                rule.label
            )));
        }

        if rule.keywords.is_empty() && rule.patterns.is_empty() {
            return Err(PensumError::RulesetInvalid(format!(
                "rule '{}' has no keywords or patterns",
                rule.label
            )));
        }

        if rule.keywords.iter().any(|k| k.is_empty()) {
            return Err(PensumError::RulesetInvalid(format!(
                "rule '{}' contains an empty keyword",
                rule.label
            )));
        }

        for pattern in &rule.patterns {
            if pattern.is_empty() {
                return Err(PensumError::RulesetInvalid(format!(
                    "rule '{}' contains an empty pattern",
                    rule.label
                )));
            }
            if let Err(e) = Regex::new(pattern) {
                return Err(PensumError::RulesetInvalid(format!(
                    "rule '{}' has invalid pattern '{}': {}",
                    rule.label, pattern, e
                )));
            }
        }
    }

    Ok(())
}
