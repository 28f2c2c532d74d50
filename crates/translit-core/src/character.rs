// Character classification for the Romanian rule engine.
//
// All predicates work on Unicode scalar values. Cyrillic letters produced by
// earlier rewrite passes are never vowels, so positional rules treat them as
// consonants.

// ---------------------------------------------------------------------------
// Romanian phonological constants
// ---------------------------------------------------------------------------

/// Romanian vowels (lowercase): a e i o u î ă
///
/// `â` is not in the set.
pub const ROMANIAN_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', '\u{00EE}', '\u{0103}'];

/// Check whether a character is a Romanian vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    ROMANIAN_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character counts as a consonant for positional rules.
///
/// This is the exact complement of [`is_vowel`]: digits, punctuation and
/// Cyrillic letters all qualify.
pub fn is_consonant(c: char) -> bool {
    !is_vowel(c)
}

/// Check whether a character is `e` or `i`, the letters that soften a
/// preceding `c` or `g`.
pub fn is_e_or_i(c: char) -> bool {
    matches!(c, 'e' | 'i')
}

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only the
/// first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lowercase a whole word with full Unicode case mapping.
///
/// Romanian capitals with diacritics (`Ș`, `Ț`, `Ă`, `Â`, `Î`) map to their
/// lowercase forms.
pub fn lower_word(word: &str) -> String {
    word.to_lowercase()
}
