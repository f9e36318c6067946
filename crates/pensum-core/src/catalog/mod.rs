pub mod builtin;
pub mod schema;

use crate::error::PensumError;
use schema::{FormulaTableDef, TemplateDef, TemplateTableDef, TheoryCatalogDef};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read-only reference data shared by every analysis run.
///
/// Only constructed through [`Catalog::new`], so the template table always
/// holds its default template.
#[derive(Debug, Clone)]
pub struct Catalog {
    theories: TheoryCatalogDef,
    templates: TemplateTableDef,
    formulas: FormulaTableDef,
}

impl Catalog {
    pub fn new(
        theories: TheoryCatalogDef,
        templates: TemplateTableDef,
        formulas: FormulaTableDef,
    ) -> Result<Self, PensumError> {
        validate_theories(&theories)?;
        validate_templates(&templates)?;
        validate_formulas(&formulas)?;
        if !theories.domains.contains_key(&theories.default_domain) {
            tracing::warn!(
                default_domain = %theories.default_domain,
                "theory catalog has no entry for its default domain; unknown subjects get no theories"
            );
        }
        Ok(Catalog {
            theories,
            templates,
            formulas,
        })
    }

    pub fn theories(&self) -> &TheoryCatalogDef {
        &self.theories
    }

    pub fn templates(&self) -> &TemplateTableDef {
        &self.templates
    }

    pub fn formulas(&self) -> &FormulaTableDef {
        &self.formulas
    }

    /// Theories for a subject domain, falling back to the default domain and
    /// then to an empty list.
    pub fn theories_for(&self, domain: &str) -> &[String] {
        let key = domain.to_lowercase();
        self.theories
            .domains
            .get(&key)
            .or_else(|| self.theories.domains.get(&self.theories.default_domain))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of theory names across the whole catalog.
    pub fn total_theories(&self) -> usize {
        self.theories.domains.values().map(|v| v.len()).sum()
    }

    /// Template bundle for a solution category, with the key actually used.
    /// Unknown categories resolve to the default template.
    pub fn template_for(&self, category: &str) -> (&str, &TemplateDef) {
        if let Some((key, template)) = self.templates.templates.get_key_value(category) {
            return (key.as_str(), template);
        }
        let key = self.templates.default_template.as_str();
        // checked by Catalog::new
        (key, &self.templates.templates[key])
    }

    pub fn formulas_for(&self, bucket: &str) -> Option<&[String]> {
        self.formulas.groups.get(bucket).map(|v| v.as_slice())
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, PensumError> {
    let content = std::fs::read_to_string(path).map_err(|e| PensumError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| PensumError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn load_theories(path: &Path) -> Result<TheoryCatalogDef, PensumError> {
    let def: TheoryCatalogDef = load_json(path)?;
    validate_theories(&def)?;
    Ok(def)
}

pub fn load_templates(path: &Path) -> Result<TemplateTableDef, PensumError> {
    let def: TemplateTableDef = load_json(path)?;
    validate_templates(&def)?;
    Ok(def)
}

pub fn load_formulas(path: &Path) -> Result<FormulaTableDef, PensumError> {
    let def: FormulaTableDef = load_json(path)?;
    validate_formulas(&def)?;
    Ok(def)
}

pub fn parse_theories_str(json: &str) -> Result<TheoryCatalogDef, PensumError> {
    let def: TheoryCatalogDef = serde_json::from_str(json)?;
    validate_theories(&def)?;
    Ok(def)
}

pub fn parse_templates_str(json: &str) -> Result<TemplateTableDef, PensumError> {
    let def: TemplateTableDef = serde_json::from_str(json)?;
    validate_templates(&def)?;
    Ok(def)
}

pub fn parse_formulas_str(json: &str) -> Result<FormulaTableDef, PensumError> {
    let def: FormulaTableDef = serde_json::from_str(json)?;
    validate_formulas(&def)?;
    Ok(def)
}

pub fn validate_theories(def: &TheoryCatalogDef) -> Result<(), PensumError> {
    if def.domains.is_empty() {
        return Err(PensumError::CatalogInvalid(
            "theory catalog has no domains".into(),
        ));
    }
    for (domain, theories) in &def.domains {
        if domain.trim().is_empty() {
            return Err(PensumError::CatalogInvalid(
                "domain name must not be empty".into(),
            ));
        }
        if domain.to_lowercase() != *domain {
            return Err(PensumError::CatalogInvalid(format!(
                "domain '{}' must be lowercase",
                domain
            )));
        }
        if theories.iter().any(|t| t.trim().is_empty()) {
            return Err(PensumError::CatalogInvalid(format!(
                "domain '{}' contains an empty theory name",
                domain
            )));
        }
    }
    Ok(())
}

pub fn validate_templates(def: &TemplateTableDef) -> Result<(), PensumError> {
    if def.templates.is_empty() {
        return Err(PensumError::CatalogInvalid(
            "template table has no templates".into(),
        ));
    }
    if !def.templates.contains_key(&def.default_template) {
        return Err(PensumError::CatalogInvalid(format!(
            "default template '{}' is not defined",
            def.default_template
        )));
    }
    for (key, template) in &def.templates {
        if template.title.trim().is_empty() {
            return Err(PensumError::CatalogInvalid(format!(
                "template '{}' has an empty title",
                key
            )));
        }
        if template.steps.is_empty() {
            return Err(PensumError::CatalogInvalid(format!(
                "template '{}' has no steps",
                key
            )));
        }
        if let Some(pos) = template.steps.iter().position(|s| s.title.trim().is_empty()) {
            return Err(PensumError::CatalogInvalid(format!(
                "template '{}' step {} has an empty title",
                key,
                pos + 1
            )));
        }
    }
    Ok(())
}

pub fn validate_formulas(def: &FormulaTableDef) -> Result<(), PensumError> {
    for (bucket, formulas) in &def.groups {
        if formulas.is_empty() {
            return Err(PensumError::CatalogInvalid(format!(
                "formula group '{}' is empty",
                bucket
            )));
        }
    }
    Ok(())
}
