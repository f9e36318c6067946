pub mod strategies;

use crate::classify::Classifier;
use crate::model::ProblemRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use strategies::{paragraphs, DELIMITER_CASCADE};

pub const MIN_PARAGRAPH_CHARS: usize = 10;

/// Which step of the cascade produced the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    ExplicitMarker,
    NumberedList,
    SectionMarker,
    PageMarker,
    Paragraph,
    Empty,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyKind::ExplicitMarker => "explicit_marker",
            StrategyKind::NumberedList => "numbered_list",
            StrategyKind::SectionMarker => "section_marker",
            StrategyKind::PageMarker => "page_marker",
            StrategyKind::Paragraph => "paragraph",
            StrategyKind::Empty => "empty",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    pub strategy: StrategyKind,
    pub records: Vec<ProblemRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Paragraphs shorter than this (in characters, after trimming) are noise.
    pub min_paragraph_chars: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            min_paragraph_chars: MIN_PARAGRAPH_CHARS,
        }
    }
}

/// Split a document into problem records with the default options.
pub fn segment(text: &str, classifier: &Classifier) -> Vec<ProblemRecord> {
    segment_with(text, classifier, &SegmentOptions::default()).records
}

/// Run the delimiter cascade, stopping at the first family that yields a
/// non-blank record, then fall back to paragraphs.
///
/// Only the first productive family is used, so a document that mixes
/// "Problem N" headings with a numbered list inside a problem is split on
/// the headings alone.
pub fn segment_with(
    text: &str,
    classifier: &Classifier,
    options: &SegmentOptions,
) -> Segmentation {
    let text = normalize_line_endings(text);
    if text.trim().is_empty() {
        return Segmentation {
            strategy: StrategyKind::Empty,
            records: Vec::new(),
        };
    }

    for strategy in DELIMITER_CASCADE.iter() {
        if let Some(records) = strategy.try_segment(&text, classifier) {
            tracing::debug!(strategy = %strategy.kind, records = records.len(), "segmented");
            return Segmentation {
                strategy: strategy.kind,
                records,
            };
        }
    }

    let records = paragraphs(&text, options.min_paragraph_chars, classifier);
    tracing::debug!(records = records.len(), "no delimiter matched, split on paragraphs");
    let strategy = if records.is_empty() {
        StrategyKind::Empty
    } else {
        StrategyKind::Paragraph
    };
    Segmentation { strategy, records }
}

/// Convert `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifiers;

    fn subjects() -> Classifier {
        Classifiers::builtin().unwrap().subjects
    }

    #[test]
    fn test_two_explicit_problems() {
        let text = "Problem 1: Find the derivative of x^2.\n\nProblem 2: Balance H2 + O2 -> H2O.";
        let result = segment_with(text, &subjects(), &SegmentOptions::default());
        assert_eq!(result.strategy, StrategyKind::ExplicitMarker);
        assert_eq!(
            result.records,
            vec![
                ProblemRecord::new(1, "Find the derivative of x^2.", "calculus"),
                ProblemRecord::new(2, "Balance H2 + O2 -> H2O.", "chemistry"),
            ]
        );
    }

    #[test]
    fn test_explicit_markers_shadow_numbered_lines() {
        let text = "Problem 1: Solve each equation.\n\
                    1. x + 2 = 5\n\
                    2. 3x = 9\n\
                    3. x / 4 = 2\n\
                    Problem 2: Compute the area of a circle.\n";
        let result = segment_with(text, &subjects(), &SegmentOptions::default());
        assert_eq!(result.strategy, StrategyKind::ExplicitMarker);
        assert_eq!(result.records.len(), 2);
        assert!(result.records[0].text.contains("3. x / 4 = 2"));
        assert_eq!(result.records[1].text, "Compute the area of a circle.");
    }

    #[test]
    fn test_paragraph_fallback() {
        let text = "First paragraph describes a beam.\n\n\
                    Second paragraph about a fluid flow.\n\n\
                    short\n\n\
                    Third paragraph on voltage drops.";
        let result = segment_with(text, &subjects(), &SegmentOptions::default());
        assert_eq!(result.strategy, StrategyKind::Paragraph);
        let numbers: Vec<u32> = result.records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        let types: Vec<&str> = result
            .records
            .iter()
            .map(|r| r.problem_type.as_str())
            .collect();
        assert_eq!(
            types,
            vec!["mechanics_of_materials", "fluid_mechanics", "circuit_analysis"]
        );
    }

    #[test]
    fn test_min_paragraph_chars_option() {
        let text = "A beam here.\n\nA fluid flow in a long pipe.";
        let options = SegmentOptions {
            min_paragraph_chars: 20,
        };
        let result = segment_with(text, &subjects(), &options);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].number, 1);
        assert_eq!(result.records[0].problem_type, "fluid_mechanics");
    }

    #[test]
    fn test_empty_document() {
        assert!(segment("", &subjects()).is_empty());
        let result = segment_with("  \n\n \r\n", &subjects(), &SegmentOptions::default());
        assert_eq!(result.strategy, StrategyKind::Empty);
        assert!(result.records.is_empty());
    }

    #[test]
    fn test_only_noise_is_empty() {
        let result = segment_with("ok\n\nfine\n\nyes", &subjects(), &SegmentOptions::default());
        assert_eq!(result.strategy, StrategyKind::Empty);
        assert!(result.records.is_empty());
    }

    #[test]
    fn test_blank_family_falls_through() {
        let text = "Problem 1:\nProblem 2:\n";
        let result = segment_with(text, &subjects(), &SegmentOptions::default());
        assert_eq!(result.strategy, StrategyKind::Paragraph);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].text, "Problem 1:\nProblem 2:");
    }

    #[test]
    fn test_oversized_number_uses_position() {
        let text = "Problem 99999999999: Find the limit.\nProblem 7: Find the integral.";
        let records = segment(text, &subjects());
        assert_eq!(records[0].number, 1);
        assert_eq!(records[1].number, 7);
    }

    #[test]
    fn test_zero_number_uses_position() {
        let text = "Problem 0: Find the derivative.\nProblem 2: Find the integral.";
        let records = segment(text, &subjects());
        let numbers: Vec<u32> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_spanish_page_markers() {
        let text = "Página 1\nCalcule la derivada.\nPágina 2\nResuelva la ecuación.";
        let result = segment_with(text, &subjects(), &SegmentOptions::default());
        assert_eq!(result.strategy, StrategyKind::PageMarker);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].text, "Calcule la derivada.");
        assert_eq!(result.records[1].number, 2);
    }

    #[test]
    fn test_section_markers() {
        let text = "Part 1: Compute the shear force.\nPart 2: Compute the deflection.";
        let result = segment_with(text, &subjects(), &SegmentOptions::default());
        assert_eq!(result.strategy, StrategyKind::SectionMarker);
        assert_eq!(result.records.len(), 2);
        assert!(result
            .records
            .iter()
            .all(|r| r.problem_type == "structural_analysis"));
    }

    #[test]
    fn test_carriage_returns_normalized() {
        let text = "Problem 1: A beam\r\nwith a load\rProblem 2: A fluid\r\n";
        let records = segment(text, &subjects());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "A beam\nwith a load");
        assert_eq!(records[1].text, "A fluid");
    }

    #[test]
    fn test_segmentation_is_idempotent() {
        let text = "1. Find the current.\n2. Find the voltage.\n\n3. Find the power.";
        let classifier = subjects();
        assert_eq!(segment(text, &classifier), segment(text, &classifier));
    }

    #[test]
    fn test_strategy_display_matches_serde() {
        let json = serde_json::to_string(&StrategyKind::NumberedList).unwrap();
        assert_eq!(json, format!("\"{}\"", StrategyKind::NumberedList));
    }
}
