// Word splitting and reassembly.
//
// Words are separated by U+0020 only. Tabs, newlines and other whitespace
// stay inside a word and reach the rule tables untouched.

/// Word separator.
pub const WORD_SEPARATOR: char = ' ';

/// Split text into word fragments on the space character.
///
/// Consecutive spaces produce empty fragments, and the empty string yields a
/// single empty fragment.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(WORD_SEPARATOR)
}

/// Join transformed words with single spaces and trim the result.
///
/// Empty fragments are kept, so interior runs of spaces survive the round
/// trip while leading and trailing whitespace is removed.
pub fn join_words<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            joined.push(WORD_SEPARATOR);
        }
        joined.push_str(word.as_ref());
    }
    joined.trim().to_string()
}
