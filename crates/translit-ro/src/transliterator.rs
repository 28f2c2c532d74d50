// Per-word rewrite pipeline and the text-level entry points.
//
// Pipeline order:
//   lowercase -> priority table -> suffix rules -> prefix rules
//   -> positional rules -> finishing table
//
// The same driver serves plain transliteration and the stage trace, so the
// two can never disagree.

use std::fmt;

use serde::Serialize;
use tracing::debug_span;
use translit_core::character::lower_word;
use translit_core::words::{join_words, split_words};

use crate::rules::{POSITIONAL_RULES, PREFIX_RULES, SUFFIX_RULES};
use crate::tables::{apply_finishing, apply_priority};

/// A step of the per-word pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Lowercase,
    Priority,
    Suffix,
    Prefix,
    Positional,
    Finishing,
}

/// One rule application that changed the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceStep {
    pub stage: Stage,
    /// Human-readable rule description, e.g. `ia → ья after consonant`.
    pub rule: String,
    pub before: String,
    pub after: String,
}

/// Every effective rule application for a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTrace {
    pub input: String,
    pub steps: Vec<TraceStep>,
    pub output: String,
}

/// Transliterate Romanian text into Russian Cyrillic.
///
/// The text is split on spaces, every fragment goes through
/// [`transliterate_word`], and the results are joined with single spaces.
/// Leading and trailing whitespace is trimmed from the result. Never fails:
/// characters without a mapping are passed through unchanged.
///
/// ```
/// use translit_ro::transliterate_to_russian;
///
/// assert_eq!(transliterate_to_russian("Ceai"), "чаи");
/// assert_eq!(transliterate_to_russian("mama"), "мама");
/// ```
pub fn transliterate_to_russian(text: &str) -> String {
    let _span = debug_span!("transliterate", len = text.len()).entered();
    join_words(split_words(text).map(transliterate_word))
}

/// Transliterate a single word (no splitting, no trimming).
pub fn transliterate_word(word: &str) -> String {
    run_pipeline(word, None)
}

/// Record the stage trace for every word of the text.
///
/// Words are split exactly as in [`transliterate_to_russian`], so empty
/// fragments from repeated spaces appear as empty traces.
pub fn explain(text: &str) -> Vec<WordTrace> {
    split_words(text).map(explain_word).collect()
}

/// Record the stage trace for a single word.
pub fn explain_word(word: &str) -> WordTrace {
    let mut steps = Vec::new();
    let output = run_pipeline(word, Some(&mut steps));
    WordTrace {
        input: word.to_string(),
        steps,
        output,
    }
}

struct TableName(&'static str);

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn run_pipeline(word: &str, mut steps: Option<&mut Vec<TraceStep>>) -> String {
    let mut current = lower_word(word);
    record(&mut steps, Stage::Lowercase, &TableName("lowercase"), word, &current);

    let next = apply_priority(&current);
    record(&mut steps, Stage::Priority, &TableName("priority table"), &current, &next);
    current = next;

    for rule in SUFFIX_RULES {
        if let Some(next) = rule.apply_suffix(&current) {
            record(&mut steps, Stage::Suffix, rule, &current, &next);
            current = next;
        }
    }

    for rule in PREFIX_RULES {
        if let Some(next) = rule.apply_prefix(&current) {
            record(&mut steps, Stage::Prefix, rule, &current, &next);
            current = next;
        }
    }

    for rule in POSITIONAL_RULES {
        let next = rule.apply(&current);
        record(&mut steps, Stage::Positional, rule, &current, &next);
        current = next;
    }

    let next = apply_finishing(&current);
    record(&mut steps, Stage::Finishing, &TableName("finishing table"), &current, &next);
    next
}

fn record(
    steps: &mut Option<&mut Vec<TraceStep>>,
    stage: Stage,
    rule: &dyn fmt::Display,
    before: &str,
    after: &str,
) {
    if before == after {
        return;
    }
    if let Some(steps) = steps.as_deref_mut() {
        steps.push(TraceStep {
            stage,
            rule: rule.to_string(),
            before: before.to_string(),
            after: after.to_string(),
        });
    }
}
