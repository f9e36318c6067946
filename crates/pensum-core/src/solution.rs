use crate::catalog::Catalog;
use crate::classify::Classifier;
use crate::model::{ProblemRecord, SolutionBundle, SolutionStep};

/// Build the templated solution for one problem.
///
/// The template is chosen by `solutions`, which may disagree with the
/// record's document-level type; the record's type is kept for display.
/// Categories without a template get the default one.
pub fn format(record: &ProblemRecord, solutions: &Classifier, catalog: &Catalog) -> SolutionBundle {
    let category = solutions.classify(&record.text);
    let (key, template) = catalog.template_for(category);
    tracing::debug!(
        number = record.number,
        problem_type = %record.problem_type,
        template = key,
        "formatted problem"
    );

    let steps = template
        .steps
        .iter()
        .enumerate()
        .map(|(i, s)| SolutionStep {
            step: i as u32 + 1,
            title: s.title.clone(),
            explanation: s.explanation.clone(),
            worked_example: s.worked_example.clone(),
        })
        .collect();

    SolutionBundle {
        number: record.number,
        problem_type: record.problem_type.clone(),
        template: key.to_string(),
        template_title: template.title.clone(),
        problem: record.text.clone(),
        steps,
        theories: template.theories.clone(),
        domain_theories: catalog.theories_for(&record.problem_type).to_vec(),
        key_concepts: template.key_concepts.clone(),
        common_mistakes: template.common_mistakes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::classify::Classifiers;

    fn setup() -> (Classifiers, Catalog) {
        (Classifiers::builtin().unwrap(), builtin::load().unwrap())
    }

    #[test]
    fn test_derivative_template() {
        let (c, catalog) = setup();
        let record = ProblemRecord::new(1, "Find the derivative of x^2.", "calculus");
        let bundle = format(&record, &c.solutions, &catalog);

        assert_eq!(bundle.number, 1);
        assert_eq!(bundle.problem_type, "calculus");
        assert_eq!(bundle.template, "derivative");
        assert_eq!(bundle.template_title, "CALCULUS - DERIVATIVES");
        assert_eq!(bundle.problem, "Find the derivative of x^2.");
        assert_eq!(bundle.steps.len(), 5);
        let numbers: Vec<u32> = bundle.steps.iter().map(|s| s.step).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert!(!bundle.theories.is_empty());
        assert_eq!(bundle.domain_theories, catalog.theories_for("calculus"));
    }

    #[test]
    fn test_template_follows_solution_classifier() {
        let (c, catalog) = setup();
        let record = ProblemRecord::new(4, "Find the slope of the beam deflection curve", "mechanics_of_materials");
        let bundle = format(&record, &c.solutions, &catalog);
        assert_eq!(bundle.problem_type, "mechanics_of_materials");
        assert_eq!(bundle.template, "derivative");
        assert_eq!(
            bundle.domain_theories,
            catalog.theories_for("mechanics_of_materials")
        );
    }

    #[test]
    fn test_unrecognized_text_uses_general() {
        let (c, catalog) = setup();
        let record = ProblemRecord::new(3, "the quick brown fox", "astrology");
        let bundle = format(&record, &c.solutions, &catalog);
        assert_eq!(bundle.template, "general");
        assert_eq!(bundle.template_title, "GENERAL PROBLEM");
        assert_eq!(bundle.steps.len(), 5);
        assert_eq!(bundle.problem_type, "astrology");
        assert_eq!(bundle.domain_theories, catalog.theories_for("general"));
    }

    #[test]
    fn test_category_without_template_falls_back() {
        let c = Classifiers::builtin().unwrap();
        let mut templates = builtin::templates().unwrap();
        templates.templates.remove("chemistry");
        let catalog = Catalog::new(
            builtin::theories().unwrap(),
            templates,
            builtin::formulas().unwrap(),
        )
        .unwrap();
        let record = ProblemRecord::new(2, "Balance H2 + O2 -> H2O.", "chemistry");
        let bundle = format(&record, &c.solutions, &catalog);
        assert_eq!(bundle.template, "general");
    }

    #[test]
    fn test_single_template_catalog_serves_every_category() {
        let c = Classifiers::builtin().unwrap();
        let mut templates = builtin::templates().unwrap();
        templates.templates.retain(|key, _| key == "general");
        let catalog = Catalog::new(
            builtin::theories().unwrap(),
            templates,
            builtin::formulas().unwrap(),
        )
        .unwrap();

        for text in ["the quick brown fox", "Find the derivative of x^2.", "Balance H2 + O2 -> H2O."] {
            let bundle = format(&ProblemRecord::new(1, text, "other"), &c.solutions, &catalog);
            assert_eq!(bundle.template, "general");
            assert_eq!(bundle.steps.len(), 5);
        }
    }
}
