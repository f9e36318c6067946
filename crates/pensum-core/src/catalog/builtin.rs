use crate::catalog::schema::{FormulaTableDef, TemplateTableDef, TheoryCatalogDef};
use crate::catalog::{parse_formulas_str, parse_templates_str, parse_theories_str, Catalog};
use crate::error::PensumError;

const THEORIES_JSON: &str = include_str!("../../../../catalog/theories.json");
const TEMPLATES_JSON: &str = include_str!("../../../../catalog/templates.json");
const FORMULAS_JSON: &str = include_str!("../../../../catalog/formulas.json");

pub fn theories() -> Result<TheoryCatalogDef, PensumError> {
    parse_theories_str(THEORIES_JSON)
}

pub fn templates() -> Result<TemplateTableDef, PensumError> {
    parse_templates_str(TEMPLATES_JSON)
}

pub fn formulas() -> Result<FormulaTableDef, PensumError> {
    parse_formulas_str(FORMULAS_JSON)
}

/// The catalog shipped with the binary.
pub fn load() -> Result<Catalog, PensumError> {
    Catalog::new(theories()?, templates()?, formulas()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifiers;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = load().unwrap();
        assert!(catalog.theories().domains.contains_key("general"));
        assert!(catalog.templates().templates.contains_key("general"));
        assert_eq!(catalog.templates().methodology.len(), 5);
    }

    #[test]
    fn test_every_subject_label_has_theories() {
        let catalog = load().unwrap();
        let classifiers = Classifiers::builtin().unwrap();
        for label in classifiers.subjects.labels() {
            assert!(
                catalog.theories().domains.contains_key(label),
                "subject '{label}' missing from theory catalog"
            );
        }
    }

    #[test]
    fn test_every_solution_label_has_template() {
        let catalog = load().unwrap();
        let classifiers = Classifiers::builtin().unwrap();
        for label in classifiers
            .solutions
            .labels()
            .chain(std::iter::once(classifiers.solutions.default_label()))
        {
            let template = catalog.templates().templates.get(label);
            assert!(template.is_some(), "solution '{label}' has no template");
            assert_eq!(template.unwrap().steps.len(), 5);
        }
    }

    #[test]
    fn test_calculus_theories() {
        let catalog = load().unwrap();
        let calculus = catalog.theories_for("calculus");
        assert!(calculus.iter().any(|t| t == "derivative"));
        assert!(calculus.iter().any(|t| t == "integral"));
    }
}
