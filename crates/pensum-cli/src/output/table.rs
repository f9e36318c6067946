use pensum_core::model::SolutionBundle;
use pensum_core::report::outcome::{CliffNotes, Report};
use pensum_core::segment::Segmentation;

pub fn print_report(report: &Report, show_steps: bool) {
    let summary = &report.summary;
    let types: Vec<&str> = summary.problem_types.iter().map(String::as_str).collect();
    println!("=== Homework analysis ===\n");
    println!("  Problems: {}", summary.total_problems);
    if !types.is_empty() {
        println!("  Types:    {}", types.join(", "));
    }
    println!("  Catalog:  {} theories\n", summary.total_theories);

    for bundle in &report.problems_analyzed {
        print_bundle(bundle, show_steps);
    }

    if !report.problems_analyzed.is_empty() {
        print_cliff_notes(&report.cliff_notes);
    }
}

fn print_bundle(bundle: &SolutionBundle, show_steps: bool) {
    println!(
        "--- PROBLEM {} [{}] ---\n",
        bundle.number,
        bundle.problem_type.to_uppercase()
    );
    for line in wrap(&bundle.problem, 76) {
        println!("  {}", line);
    }
    println!();
    println!("  Template: {}", bundle.template_title);

    if !bundle.theories.is_empty() {
        println!("  Theories:");
        for theory in &bundle.theories {
            println!("    - {}", theory);
        }
    }

    println!("  Steps:");
    for step in &bundle.steps {
        println!("    {}. {}", step.step, step.title);
        if show_steps {
            for line in wrap(&step.explanation, 70) {
                println!("         {}", line);
            }
            if !step.worked_example.is_empty() {
                for line in step.worked_example.lines() {
                    println!("         | {}", line);
                }
            }
        }
    }
    println!();
}

fn print_cliff_notes(notes: &CliffNotes) {
    println!("=== Cliff notes ===\n");
    println!(
        "  {} problem(s), {} distinct theories",
        notes.overview.total_problems, notes.overview.unique_theories
    );
    println!("  Templates: {}\n", notes.overview.template_types.join(", "));

    if !notes.methodology.is_empty() {
        println!("  Method:");
        for step in &notes.methodology {
            println!("    {}. {}: {}", step.step, step.title, step.content);
        }
        println!();
    }

    if !notes.concepts_by_type.is_empty() {
        println!("  Key concepts:");
        for group in &notes.concepts_by_type {
            let numbers: Vec<String> = group.problems.iter().map(|n| n.to_string()).collect();
            println!("    {} (problems {})", group.title, numbers.join(", "));
            for line in group.key_concepts.lines().filter(|l| !l.trim().is_empty()) {
                println!("      {}", line.trim());
            }
        }
        println!();
    }

    if !notes.theories.is_empty() {
        let max_name = notes
            .theories
            .iter()
            .map(|t| t.name.chars().count())
            .max()
            .unwrap_or(20)
            .min(60);
        println!("  Theories used:");
        for usage in &notes.theories {
            let numbers: Vec<String> = usage.problems.iter().map(|n| n.to_string()).collect();
            println!(
                "    {:<width$}  [{}]  problems {}",
                usage.name,
                usage.bucket,
                numbers.join(", "),
                width = max_name
            );
        }
        println!();
    }

    if !notes.mistakes.is_empty() {
        println!("  Common mistakes:");
        for mistake in &notes.mistakes {
            println!("    - {}", mistake);
        }
        println!();
    }

    for group in &notes.formulas {
        println!("  {} formulas:", group.bucket);
        for formula in &group.formulas {
            println!("    {}", formula);
        }
        println!();
    }
}

pub fn print_segmentation(segmentation: &Segmentation) {
    print!("{}", format_segmentation(segmentation));
}

/// Format a segmentation as human-readable text.
pub fn format_segmentation(segmentation: &Segmentation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} problem(s), split by {}\n\n",
        segmentation.records.len(),
        segmentation.strategy
    ));

    let max_type = segmentation
        .records
        .iter()
        .map(|r| r.problem_type.len())
        .max()
        .unwrap_or(5);

    for record in &segmentation.records {
        let first_line = record.text.lines().next().unwrap_or("");
        let mut preview: String = first_line.chars().take(60).collect();
        if first_line.chars().count() > 60 || record.text.lines().nth(1).is_some() {
            preview.push_str("...");
        }
        out.push_str(&format!(
            "  {:>3}  {:<width$}  {}\n",
            record.number,
            record.problem_type,
            preview,
            width = max_type
        ));
    }

    out
}

/// Greedy word wrap; words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pensum_core::model::ProblemRecord;
    use pensum_core::segment::StrategyKind;

    #[test]
    fn test_format_segmentation() {
        let segmentation = Segmentation {
            strategy: StrategyKind::ExplicitMarker,
            records: vec![
                ProblemRecord::new(1, "Find the derivative of x^2.", "calculus"),
                ProblemRecord::new(2, "Balance H2 + O2 -> H2O.\nShow work.", "chemistry"),
            ],
        };
        let out = format_segmentation(&segmentation);
        assert!(out.starts_with("2 problem(s), split by explicit_marker\n"));
        assert!(out.contains("    1  calculus   Find the derivative of x^2.\n"));
        assert!(out.contains("    2  chemistry  Balance H2 + O2 -> H2O....\n"));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap("one\n\ntwo", 10), vec!["one", "", "two"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
    }
}
