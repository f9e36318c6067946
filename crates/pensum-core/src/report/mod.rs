pub mod outcome;

use crate::catalog::Catalog;
use crate::classify::Classifier;
use crate::model::SolutionBundle;
use outcome::{
    CliffNotes, ConceptSummary, FormulaGroup, MethodologyStep, Overview, Report, Summary,
    TheoryUsage,
};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Default number of mistakes kept in the cliff notes.
pub const MISTAKE_CAP: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    pub mistake_cap: usize,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        AggregateOptions {
            mistake_cap: MISTAKE_CAP,
        }
    }
}

/// Fold formatted solutions into a report.
///
/// `theory_buckets` assigns each cited theory name to a coarse subject used
/// to group theories and pick formula lists. An empty input gives a report
/// with zero counts.
pub fn aggregate(
    bundles: Vec<SolutionBundle>,
    catalog: &Catalog,
    theory_buckets: &Classifier,
    options: &AggregateOptions,
) -> Report {
    let summary = Summary {
        total_problems: bundles.len(),
        problem_types: bundles
            .iter()
            .map(|b| b.problem_type.to_uppercase())
            .collect(),
        total_theories: catalog.total_theories(),
    };

    let cliff_notes = cliff_notes(&bundles, catalog, theory_buckets, options);
    tracing::info!(
        problems = summary.total_problems,
        theories = cliff_notes.overview.unique_theories,
        mistakes = cliff_notes.mistakes.len(),
        "aggregated report"
    );

    Report {
        summary,
        problems_analyzed: bundles,
        cliff_notes,
    }
}

fn cliff_notes(
    bundles: &[SolutionBundle],
    catalog: &Catalog,
    theory_buckets: &Classifier,
    options: &AggregateOptions,
) -> CliffNotes {
    let theories = theory_usage(bundles, theory_buckets);

    let template_types: BTreeSet<&str> = bundles.iter().map(|b| b.template_title.as_str()).collect();
    let overview = Overview {
        total_problems: bundles.len(),
        template_types: template_types.into_iter().map(String::from).collect(),
        unique_theories: theories.len(),
    };

    let methodology = catalog
        .templates()
        .methodology
        .iter()
        .enumerate()
        .map(|(i, m)| MethodologyStep {
            step: i as u32 + 1,
            title: m.title.clone(),
            content: m.content.clone(),
        })
        .collect();

    CliffNotes {
        overview,
        methodology,
        concepts_by_type: concepts_by_type(bundles),
        formulas: formulas(bundles, catalog, theory_buckets),
        theories,
        mistakes: mistakes(bundles, options.mistake_cap),
    }
}

fn theory_usage(bundles: &[SolutionBundle], theory_buckets: &Classifier) -> Vec<TheoryUsage> {
    let mut usage: BTreeMap<&str, BTreeSet<u32>> = BTreeMap::new();
    for bundle in bundles {
        for theory in &bundle.theories {
            usage.entry(theory.as_str()).or_default().insert(bundle.number);
        }
    }

    usage
        .into_iter()
        .map(|(name, problems)| TheoryUsage {
            name: name.to_string(),
            bucket: theory_buckets.classify(name).to_string(),
            problems: problems.into_iter().collect(),
        })
        .collect()
}

fn concepts_by_type(bundles: &[SolutionBundle]) -> Vec<ConceptSummary> {
    let mut groups: Vec<ConceptSummary> = Vec::new();
    for bundle in bundles {
        match groups.iter_mut().find(|g| g.template == bundle.template) {
            Some(group) => {
                if !group.problems.contains(&bundle.number) {
                    group.problems.push(bundle.number);
                }
            }
            None => groups.push(ConceptSummary {
                template: bundle.template.clone(),
                title: bundle.template_title.clone(),
                problems: vec![bundle.number],
                key_concepts: bundle.key_concepts.clone(),
            }),
        }
    }
    groups.sort_by(|a, b| a.template.cmp(&b.template));
    groups
}

/// Mistake lines across all bundles, first occurrence wins, capped.
fn mistakes(bundles: &[SolutionBundle], cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    bundles
        .iter()
        .flat_map(|b| b.common_mistakes.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .take(cap)
        .map(String::from)
        .collect()
}

fn formulas(
    bundles: &[SolutionBundle],
    catalog: &Catalog,
    theory_buckets: &Classifier,
) -> Vec<FormulaGroup> {
    let mut buckets: Vec<&str> = Vec::new();
    for theory in bundles.iter().flat_map(|b| b.theories.iter()) {
        let bucket = theory_buckets.classify(theory);
        if !buckets.contains(&bucket) {
            buckets.push(bucket);
        }
    }

    buckets
        .into_iter()
        .filter_map(|bucket| {
            catalog.formulas_for(bucket).map(|formulas| FormulaGroup {
                bucket: bucket.to_string(),
                formulas: formulas.to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::classify::Classifiers;

    fn bundle(number: u32, problem_type: &str, theories: &[&str], mistakes: &str) -> SolutionBundle {
        SolutionBundle {
            number,
            problem_type: problem_type.to_string(),
            template: "general".to_string(),
            template_title: "GENERAL PROBLEM".to_string(),
            problem: format!("problem {number}"),
            steps: Vec::new(),
            theories: theories.iter().map(|t| t.to_string()).collect(),
            domain_theories: Vec::new(),
            key_concepts: String::new(),
            common_mistakes: mistakes.to_string(),
        }
    }

    fn run(bundles: Vec<SolutionBundle>) -> Report {
        let catalog = builtin::load().unwrap();
        let classifiers = Classifiers::builtin().unwrap();
        aggregate(
            bundles,
            &catalog,
            &classifiers.theory_buckets,
            &AggregateOptions::default(),
        )
    }

    #[test]
    fn test_empty_input() {
        let catalog = builtin::load().unwrap();
        let report = run(Vec::new());
        assert_eq!(report.summary.total_problems, 0);
        assert!(report.summary.problem_types.is_empty());
        assert_eq!(report.summary.total_theories, catalog.total_theories());
        assert!(report.problems_analyzed.is_empty());
        assert!(report.cliff_notes.theories.is_empty());
        assert!(report.cliff_notes.mistakes.is_empty());
        assert!(report.cliff_notes.formulas.is_empty());
        assert!(report.cliff_notes.concepts_by_type.is_empty());
        assert_eq!(report.cliff_notes.overview.unique_theories, 0);
    }

    #[test]
    fn test_summary_types_uppercased() {
        let report = run(vec![
            bundle(1, "calculus", &[], ""),
            bundle(2, "chemistry", &[], ""),
            bundle(3, "calculus", &[], ""),
        ]);
        assert_eq!(report.summary.total_problems, 3);
        let types: Vec<&str> = report
            .summary
            .problem_types
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(types, vec!["CALCULUS", "CHEMISTRY"]);
    }

    #[test]
    fn test_theory_usage_numbers_ascending_unique() {
        let report = run(vec![
            bundle(5, "physics", &["Momentum and Impulse", "Power Rule"], ""),
            bundle(2, "calculus", &["Power Rule", "Power Rule"], ""),
            bundle(9, "algebra", &["Linear Equations"], ""),
            bundle(2, "calculus", &["Momentum and Impulse"], ""),
        ]);
        let usage = &report.cliff_notes.theories;
        let names: Vec<&str> = usage.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Linear Equations", "Momentum and Impulse", "Power Rule"]);
        assert_eq!(usage[0].problems, vec![9]);
        assert_eq!(usage[1].problems, vec![2, 5]);
        assert_eq!(usage[2].problems, vec![2, 5]);
        assert_eq!(usage[0].bucket, "Algebra");
        assert_eq!(usage[1].bucket, "Physics");
        assert_eq!(usage[2].bucket, "Calculus");
        assert_eq!(report.cliff_notes.overview.unique_theories, 3);
    }

    #[test]
    fn test_mistakes_dedup_and_cap() {
        let bundles: Vec<SolutionBundle> = (0..20)
            .map(|i| {
                bundle(
                    i + 1,
                    "general",
                    &[],
                    &format!("Mistake {i}\n  Mistake {}\n\n", i + 1),
                )
            })
            .collect();
        let report = run(bundles);
        let expected: Vec<String> = (0..15).map(|i| format!("Mistake {i}")).collect();
        assert_eq!(report.cliff_notes.mistakes, expected);
    }

    #[test]
    fn test_mistake_cap_option() {
        let catalog = builtin::load().unwrap();
        let classifiers = Classifiers::builtin().unwrap();
        let report = aggregate(
            vec![bundle(1, "general", &[], "a\nb\nc\nd")],
            &catalog,
            &classifiers.theory_buckets,
            &AggregateOptions { mistake_cap: 2 },
        );
        assert_eq!(report.cliff_notes.mistakes, vec!["a", "b"]);
    }

    #[test]
    fn test_formulas_first_seen_and_skip_unknown() {
        let report = run(vec![
            bundle(1, "physics", &["Newton's Second Law", "Percent Yield"], ""),
            bundle(2, "calculus", &["Power Rule", "Momentum and Impulse"], ""),
        ]);
        let buckets: Vec<&str> = report
            .cliff_notes
            .formulas
            .iter()
            .map(|g| g.bucket.as_str())
            .collect();
        assert_eq!(buckets, vec!["Physics", "Calculus"]);
        assert!(report.cliff_notes.formulas[0]
            .formulas
            .iter()
            .any(|f| f.contains("F = ma")));
    }

    #[test]
    fn test_concepts_grouped_by_template() {
        let mut a = bundle(1, "calculus", &[], "");
        a.template = "derivative".into();
        a.template_title = "CALCULUS - DERIVATIVES".into();
        a.key_concepts = "rates of change".into();
        let b = bundle(2, "other", &[], "");
        let mut c = a.clone();
        c.number = 3;
        c.key_concepts = "ignored".into();

        let report = run(vec![a, b, c]);
        let groups = &report.cliff_notes.concepts_by_type;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].template, "derivative");
        assert_eq!(groups[0].problems, vec![1, 3]);
        assert_eq!(groups[0].key_concepts, "rates of change");
        assert_eq!(groups[1].template, "general");
        assert_eq!(
            report.cliff_notes.overview.template_types,
            vec!["CALCULUS - DERIVATIVES", "GENERAL PROBLEM"]
        );
    }

    #[test]
    fn test_concepts_sorted_by_template() {
        let first = bundle(1, "other", &[], "");
        let mut second = bundle(2, "calculus", &[], "");
        second.template = "derivative".into();
        second.template_title = "CALCULUS - DERIVATIVES".into();

        let report = run(vec![first, second]);
        let templates: Vec<&str> = report
            .cliff_notes
            .concepts_by_type
            .iter()
            .map(|g| g.template.as_str())
            .collect();
        assert_eq!(templates, vec!["derivative", "general"]);
        assert_eq!(report.cliff_notes.concepts_by_type[1].problems, vec![1]);
    }

    #[test]
    fn test_methodology_numbered() {
        let report = run(Vec::new());
        let steps: Vec<u32> = report.cliff_notes.methodology.iter().map(|m| m.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.cliff_notes.methodology[0].title, "UNDERSTAND THE PROBLEM");
    }
}
