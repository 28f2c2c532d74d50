// Unconditional substitution tables: the priority pass that runs first and
// the finishing pass that runs last.
//
// Both tables are read-only process-wide state. Ordered rule lists are
// `const` slices; the single-character finishing map is built once on first
// use and never modified.

use std::sync::LazyLock;

use hashbrown::HashMap;

// ---------------------------------------------------------------------------
// Priority pass
// ---------------------------------------------------------------------------

/// Affricate spellings rewritten before any other rule, in application order.
///
/// Three-letter `c`/`g` + vowel clusters come before the `ch`/`gh` digraphs.
/// Every replacement is Cyrillic, so an entry never matches text produced by
/// an earlier entry.
pub const PRIORITY_TABLE: &[(&str, &str)] = &[
    ("cea", "ча"),
    ("cia", "ча"),
    ("cio", "чо"),
    ("ciu", "чу"),
    ("gea", "джа"),
    ("gia", "джа"),
    ("geo", "джо"),
    ("gio", "джо"),
    ("giu", "джу"),
    ("ch", "к"),
    ("gh", "г"),
];

/// Apply the priority table to a lowercased word.
///
/// Each pattern replaces all of its non-overlapping occurrences, leftmost
/// first, before the next pattern is tried.
pub fn apply_priority(word: &str) -> String {
    PRIORITY_TABLE
        .iter()
        .fold(word.to_string(), |acc, &(pattern, replacement)| {
            if acc.contains(pattern) {
                acc.replace(pattern, replacement)
            } else {
                acc
            }
        })
}

// ---------------------------------------------------------------------------
// Finishing pass
// ---------------------------------------------------------------------------

/// Two-character patterns that take precedence over the single-character
/// entries they start with.
pub const FINISHING_DIGRAPHS: &[(&str, &str)] = &[("ea", "я"), ("\u{00EE}i", "ый")];

/// One-to-one fallback mapping for the remaining Latin letters.
pub const FINISHING_LETTERS: &[(char, &str)] = &[
    ('\u{0219}', "ш"), // ș
    ('\u{0103}', "э"), // ă
    ('\u{00E2}', "ы"), // â
    ('\u{00EE}', "ы"), // î
    ('m', "м"),
    ('p', "п"),
    ('n', "н"),
    ('j', "ж"),
    ('q', "к"),
    ('k', "к"),
    ('r', "р"),
    ('\u{021B}', "ц"), // ț
    ('d', "д"),
    ('t', "т"),
    ('i', "и"),
    ('f', "ф"),
    ('e', "е"),
    ('b', "б"),
    ('u', "у"),
    ('o', "о"),
    ('l', "л"),
    ('c', "к"),
    ('s', "с"),
    ('v', "в"),
    ('w', "в"),
    ('x', "кс"),
    ('y', "и"),
    ('z', "з"),
    ('a', "а"),
    ('g', "г"),
    ('h', "х"),
];

static FINISHING_MAP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| FINISHING_LETTERS.iter().copied().collect());

/// Look up the finishing replacement for a single character.
pub fn finishing_letter(c: char) -> Option<&'static str> {
    FINISHING_MAP.get(&c).copied()
}

/// Apply the finishing table in a single left-to-right scan.
///
/// At each position the digraphs are tried first, then the letter map.
/// Replacement text is never rescanned, and characters without an entry
/// (Cyrillic, digits, punctuation) are copied through unchanged.
pub fn apply_finishing(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    let mut rest = word;

    'scan: while let Some(c) = rest.chars().next() {
        for &(pattern, replacement) in FINISHING_DIGRAPHS {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }
        match finishing_letter(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}
