use pensum_core::classify::{Classification, Classifier};
use std::path::{Path, PathBuf};

use crate::commands::load_analyzer;

pub fn run(
    texts: Vec<String>,
    file: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<(), pensum_core::error::PensumError> {
    let analyzer = load_analyzer(config)?;

    let mut inputs = texts;
    if let Some(path) = file {
        if !path.exists() {
            return Err(pensum_core::error::PensumError::InputNotFound(path));
        }
        inputs.push(std::fs::read_to_string(&path)?);
    }
    if inputs.is_empty() {
        return Err(pensum_core::error::PensumError::Config(
            "nothing to classify: pass TEXT or --file".into(),
        ));
    }

    let classifiers = analyzer.classifiers();
    for (i, text) in inputs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", preview(text, 72));
        print_layer("subject", &classifiers.subjects, text);
        print_layer("solution", &classifiers.solutions, text);
    }

    Ok(())
}

fn print_layer(layer: &str, classifier: &Classifier, text: &str) {
    let result = classifier.explain(text);
    println!("  {:<9} {:<24} {}", layer, result.label, reason(&result));
}

fn reason(result: &Classification) -> String {
    if result.is_default() {
        return "(default, no rule matched)".to_string();
    }
    let rule = result.rule_index.map(|i| i + 1).unwrap_or_default();
    match &result.matched {
        Some(matched) => format!("(rule #{rule}, matched \"{matched}\")"),
        None => format!("(rule #{rule})"),
    }
}

fn preview(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= width {
        flat
    } else {
        let cut: String = flat.chars().take(width - 3).collect();
        format!("{cut}...")
    }
}
