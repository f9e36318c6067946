use crate::classify::Classifier;
use crate::model::ProblemRecord;
use crate::segment::StrategyKind;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// One delimiter family: every match starts a new problem, and the problem's
/// text runs until the next match.
#[derive(Debug)]
pub struct DelimiterStrategy {
    pub kind: StrategyKind,
    pattern: Regex,
}

fn delimiter(kind: StrategyKind, source: &str) -> DelimiterStrategy {
    let pattern = RegexBuilder::new(source)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .expect("delimiter pattern must compile");
    DelimiterStrategy { kind, pattern }
}

pub static DELIMITER_CASCADE: LazyLock<Vec<DelimiterStrategy>> = LazyLock::new(|| {
    vec![
        delimiter(
            StrategyKind::ExplicitMarker,
            r"(?:^|\n)\s*(?:Problem|Prob\.?|Question|Q|Exercise|Ex\.?|E|Pr\.?)[\s#]*([0-9]+)\s*[:.\-]*\s*",
        ),
        delimiter(
            StrategyKind::NumberedList,
            r"(?:^|\n)\s*([0-9]+)\s*[.)\-]\s+",
        ),
        delimiter(
            StrategyKind::SectionMarker,
            r"(?:^|\n)\s*(?:Section|Part)\s*([0-9]+)\s*[:.\-]*\s*",
        ),
        delimiter(
            StrategyKind::PageMarker,
            r"(?:^|\n)\s*(?:Pagina|Página|Page)\s*([0-9]+)\s*[:.\-]*\s*",
        ),
    ]
});

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("paragraph pattern must compile"));

impl DelimiterStrategy {
    /// Split `text` at every match of this family.
    ///
    /// Returns `None` when the family does not match or every span between
    /// matches is blank.
    pub fn try_segment(&self, text: &str, classifier: &Classifier) -> Option<Vec<ProblemRecord>> {
        let matches: Vec<_> = self.pattern.captures_iter(text).collect();
        if matches.is_empty() {
            return None;
        }

        let mut records = Vec::new();
        for (i, caps) in matches.iter().enumerate() {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(text.len());
            let span = text[whole.end()..end].trim();
            if span.is_empty() {
                continue;
            }

            let position = records.len() as u32 + 1;
            let number = caps
                .get(1)
                .and_then(|n| n.as_str().parse::<u32>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(position);

            records.push(ProblemRecord::new(
                number,
                span,
                classifier.classify(span),
            ));
        }

        if records.is_empty() {
            None
        } else {
            Some(records)
        }
    }
}

/// Last resort: blank-line separated paragraphs, ignoring short fragments.
pub fn paragraphs(text: &str, min_chars: usize, classifier: &Classifier) -> Vec<ProblemRecord> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty() && chunk.chars().count() >= min_chars)
        .enumerate()
        .map(|(i, chunk)| ProblemRecord::new(i as u32 + 1, chunk, classifier.classify(chunk)))
        .collect()
}
