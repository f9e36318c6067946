use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subject domain → ordered list of theory names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoryCatalogDef {
    pub name: String,
    pub version: String,
    /// Domain used when a subject has no entry of its own.
    pub default_domain: String,
    pub domains: BTreeMap<String, Vec<String>>,
}

/// Solution category → template bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateTableDef {
    pub name: String,
    pub version: String,
    /// Template used for categories without a bundle.
    pub default_template: String,
    /// Universal steps printed at the top of the cliff notes.
    #[serde(default)]
    pub methodology: Vec<MethodologyStepDef>,
    pub templates: BTreeMap<String, TemplateDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDef {
    /// Display title, e.g. "CALCULUS - DERIVATIVES".
    pub title: String,
    pub steps: Vec<StepDef>,
    pub theories: Vec<String>,
    pub key_concepts: String,
    pub common_mistakes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDef {
    pub title: String,
    pub explanation: String,
    #[serde(default)]
    pub worked_example: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodologyStepDef {
    pub title: String,
    pub content: String,
}

/// Theory bucket → quick-reference formulas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaTableDef {
    pub name: String,
    pub version: String,
    pub groups: BTreeMap<String, Vec<String>>,
}
