use pensum_core::rules::builtin;
use std::path::Path;

pub fn list() -> Result<(), pensum_core::error::PensumError> {
    println!("Available predefined rule sets:\n");
    for name in builtin::PRESETS {
        let rs = builtin::load_preset(name)?;
        println!(
            "  {:<15} {} (v{}), {} labels, default '{}'",
            name,
            rs.name,
            rs.version,
            rs.rules.len(),
            rs.default_label
        );
        if let Some(ref desc) = rs.description {
            println!("                  {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), pensum_core::error::PensumError> {
    let rs = builtin::load_preset(preset)?;

    println!("{} (version {})\n", rs.name, rs.version);

    if let Some(ref desc) = rs.description {
        println!("{}\n", desc);
    }

    println!(
        "Rules are checked top to bottom; the first label with a matching keyword wins."
    );
    println!(
        "Text that matches nothing is labelled '{}'.\n",
        rs.default_label
    );

    let max_label_len = rs.rules.iter().map(|r| r.label.len()).max().unwrap_or(10);

    for (i, rule) in rs.rules.iter().enumerate() {
        let mut alternatives: Vec<String> = rule.keywords.clone();
        alternatives.extend(rule.patterns.iter().map(|p| format!("/{p}/")));
        println!(
            "  {:>2}. {:<width$}  {}",
            i + 1,
            rule.label,
            alternatives.join(", "),
            width = max_label_len
        );
        if let Some(ref note) = rule.note {
            println!("      {:<width$}  ({})", "", note, width = max_label_len);
        }
    }

    println!();

    Ok(())
}

pub fn schema() -> Result<(), pensum_core::error::PensumError> {
    print!(
        r#"JSON Rule Schema
================

A rule file is an ordered list of labels, each with the keywords that
select it. `pensum classify` shows which rule decided for a given text.

Top-level fields:
  name          (string, required)  Human-readable name of the rule set
  description   (string, optional)  What this rule set is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  default_label (string, required)  Label for text that matches no rule
  rules         (array, required)   Rules in priority order (see below)

Each rule in the "rules" array:
  label         (string, required)  Label returned when the rule matches.
                                    Must be unique within the file.
  keywords      (array, optional)   Literal substrings, matched without
                                    regard to case.
  patterns      (array, optional)   Regular expressions (Rust regex syntax),
                                    also case-insensitive.
  note          (string, optional)  Free-form explanation.

A rule needs at least one keyword or pattern. Order matters: keywords
overlap between subjects, and the earliest matching rule wins.

Example:
{{
  "name": "Engineering subjects",
  "version": "1.0",
  "default_label": "other",
  "rules": [
    {{
      "label": "calculus",
      "keywords": ["derivative", "integral", "limit"]
    }},
    {{
      "label": "algebra",
      "keywords": ["equation", "factor"],
      "patterns": ["\\bx\\s*="],
      "note": "checked after calculus so 'integral equation' stays calculus"
    }}
  ]
}}

Point a config file at the rule file to use it:

  [sources]
  subject_rules = "my-subjects.json"
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), pensum_core::error::PensumError> {
    let rs = pensum_core::rules::load_ruleset(file)?;
    pensum_core::classify::Classifier::compile(&rs)?;

    println!("Rule set '{}' (v{}) is valid.", rs.name, rs.version);
    println!(
        "  Labels: {}",
        rs.rules
            .iter()
            .map(|r| r.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Default: {}", rs.default_label);

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for (i, rule) in rs.rules.iter().enumerate() {
        for keyword in &rule.keywords {
            let lowered = keyword.to_lowercase();
            if let Some(earlier) = rs.rules[..i]
                .iter()
                .find(|r| r.keywords.iter().any(|k| lowered.contains(&k.to_lowercase())))
            {
                warnings.push(format!(
                    "keyword '{}' of '{}' can never win: '{}' matches first",
                    keyword, rule.label, earlier.label
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
