// Anchored and context-sensitive rewrite rules.
//
// Rule order is part of the contract: the suffix, prefix and positional
// lists are applied strictly in slice order, and reordering any of them
// changes the output.

use std::fmt;

use tracing::debug;
use translit_core::character::{is_consonant, is_e_or_i, is_vowel};

// ---------------------------------------------------------------------------
// Suffix and prefix rules
// ---------------------------------------------------------------------------

/// A rule anchored to the start or the end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorRule {
    pub anchor: &'static str,
    pub replacement: &'static str,
}

impl AnchorRule {
    const fn new(anchor: &'static str, replacement: &'static str) -> Self {
        Self { anchor, replacement }
    }

    /// Replace the anchor at the end of the word, if present.
    pub fn apply_suffix(&self, word: &str) -> Option<String> {
        word.strip_suffix(self.anchor)
            .map(|stem| format!("{stem}{}", self.replacement))
    }

    /// Replace the anchor at the start of the word, if present.
    pub fn apply_prefix(&self, word: &str) -> Option<String> {
        word.strip_prefix(self.anchor)
            .map(|stem| format!("{}{stem}", self.replacement))
    }
}

impl fmt::Display for AnchorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.anchor, self.replacement)
    }
}

/// Word-final rules. Each is checked against the output of the previous one,
/// so `iii` only fires on words the `ii` rule has already left alone.
pub const SUFFIX_RULES: &[AnchorRule] = &[
    AnchorRule::new("ci", "ч"),
    AnchorRule::new("ii", "и"),
    AnchorRule::new("iu", "иу"),
    AnchorRule::new("iii", "ий"),
    AnchorRule::new("ia", "ия"),
    AnchorRule::new("ie", "ие"),
];

/// Word-initial rules.
pub const PREFIX_RULES: &[AnchorRule] = &[
    AnchorRule::new("\u{00EE}", "и"), // î
    AnchorRule::new("ia", "я"),
    AnchorRule::new("ie", "е"),
    AnchorRule::new("io", "йо"),
    AnchorRule::new("iu", "ю"),
];

// ---------------------------------------------------------------------------
// Positional rules
// ---------------------------------------------------------------------------

/// Neighbour condition gating a positional rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// The character right before the match is a vowel. A match at the start
    /// of the word never qualifies.
    PrecededByVowel,
    /// The character right before the match is not a vowel. A match at the
    /// start of the word never qualifies.
    PrecededByConsonant,
    /// The character right after the match is `e` or `i`.
    FollowedByEOrI,
}

impl Context {
    /// Check the condition for a match of `len` bytes starting at byte `pos`.
    ///
    /// `pos` and `pos + len` must lie on character boundaries, as they do
    /// for a match found with `str::find`.
    pub(crate) fn admits(self, word: &str, pos: usize, len: usize) -> bool {
        match self {
            Context::PrecededByVowel => word[..pos].chars().next_back().is_some_and(is_vowel),
            Context::PrecededByConsonant => {
                word[..pos].chars().next_back().is_some_and(is_consonant)
            }
            Context::FollowedByEOrI => word[pos + len..].chars().next().is_some_and(is_e_or_i),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Context::PrecededByVowel => "after vowel",
            Context::PrecededByConsonant => "after consonant",
            Context::FollowedByEOrI => "before e/i",
        })
    }
}

/// A substitution gated on a neighbouring character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub context: Context,
}

impl PositionalRule {
    const fn new(pattern: &'static str, replacement: &'static str, context: Context) -> Self {
        Self {
            pattern,
            replacement,
            context,
        }
    }

    /// Run the rule to a fixpoint.
    ///
    /// Only the first occurrence of the pattern is tested against the
    /// context. When it qualifies, every occurrence in the word is replaced
    /// and the scan restarts; otherwise the word is returned as is.
    ///
    /// Replacements are Cyrillic and never recreate the Latin pattern, so the
    /// loop ends after at most two scans. `max_passes` is a hard ceiling.
    pub fn apply(&self, word: &str) -> String {
        let mut current = word.to_string();
        let max_passes = word.len() + 1;

        for _ in 0..max_passes {
            let Some(pos) = current.find(self.pattern) else {
                break;
            };
            if !self.context.admits(&current, pos, self.pattern.len()) {
                break;
            }
            debug!(
                pattern = self.pattern,
                replacement = self.replacement,
                pos,
                "positional rule fired"
            );
            current = current.replace(self.pattern, self.replacement);
        }

        current
    }
}

impl fmt::Display for PositionalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} {}", self.pattern, self.replacement, self.context)
    }
}

/// Context-sensitive rules, each run to a fixpoint before the next begins.
pub const POSITIONAL_RULES: &[PositionalRule] = &[
    PositionalRule::new("ia", "я", Context::PrecededByVowel),
    PositionalRule::new("c", "ч", Context::FollowedByEOrI),
    PositionalRule::new("g", "дж", Context::FollowedByEOrI),
    PositionalRule::new("ie", "е", Context::PrecededByVowel),
    PositionalRule::new("i", "й", Context::PrecededByVowel),
    PositionalRule::new("ia", "ья", Context::PrecededByConsonant),
    PositionalRule::new("ie", "ье", Context::PrecededByConsonant),
    PositionalRule::new("io", "йо", Context::PrecededByVowel),
    PositionalRule::new("io", "ьо", Context::PrecededByConsonant),
    PositionalRule::new("iu", "ю", Context::PrecededByVowel),
    PositionalRule::new("iu", "ью", Context::PrecededByConsonant),
];
