use crate::classify::outcome::Classification;
use crate::error::PensumError;
use crate::rules::schema::RuleSetDef;
use regex::{Regex, RegexBuilder};

/// A compiled keyword rule set.
///
/// Evaluates its rules by linear scan in declaration order; the first rule
/// with any matching alternative decides the label.
#[derive(Debug, Clone)]
pub struct Classifier {
    name: String,
    default_label: String,
    rules: Vec<CompiledRule>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    label: String,
    pattern: Regex,
}

impl Classifier {
    /// Compile a rule set. Each rule becomes one case-insensitive alternation.
    pub fn compile(ruleset: &RuleSetDef) -> Result<Self, PensumError> {
        crate::rules::validate_ruleset(ruleset)?;

        let mut rules = Vec::with_capacity(ruleset.rules.len());
        for rule in &ruleset.rules {
            let source = format!("(?:{})", rule.alternatives().join("|"));
            let pattern = RegexBuilder::new(&source)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    PensumError::RulesetInvalid(format!(
                        "rule '{}' in '{}' does not compile: {}",
                        rule.label, ruleset.name, e
                    ))
                })?;
            rules.push(CompiledRule {
                label: rule.label.clone(),
                pattern,
            });
        }

        Ok(Classifier {
            name: ruleset.name.clone(),
            default_label: ruleset.default_label.clone(),
            rules,
        })
    }

    /// Return the label of the first matching rule, or the default label.
    ///
    /// Never fails: empty or unrecognizable text yields the default.
    pub fn classify(&self, text: &str) -> &str {
        self.rules
            .iter()
            .find(|r| r.pattern.is_match(text))
            .map(|r| r.label.as_str())
            .unwrap_or(&self.default_label)
    }

    /// Like [`classify`](Self::classify) but also reports which rule and
    /// which piece of text decided.
    pub fn explain(&self, text: &str) -> Classification {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(m) = rule.pattern.find(text) {
                return Classification {
                    label: rule.label.clone(),
                    rule_index: Some(index),
                    matched: Some(m.as_str().to_string()),
                };
            }
        }
        Classification {
            label: self.default_label.clone(),
            rule_index: None,
            matched: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Rule labels in priority order (the default label is not included).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.label.as_str())
    }
}
