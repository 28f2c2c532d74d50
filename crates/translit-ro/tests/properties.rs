//! Property tests over the Romanian alphabet.

use proptest::prelude::*;
use translit_ro::{explain_word, transliterate_to_russian, transliterate_word};

/// A lowercase word over every letter the tables know about.
fn arb_word() -> impl Strategy<Value = String> {
    "[a-zăâîșț]{1,12}"
}

/// Text made of such words separated by single spaces.
fn arb_text() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_word(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn deterministic(text in ".{0,40}") {
        prop_assert_eq!(transliterate_to_russian(&text), transliterate_to_russian(&text));
    }

    #[test]
    fn case_insensitive(words in arb_text()) {
        let text = words.join(" ");
        prop_assert_eq!(
            transliterate_to_russian(&text),
            transliterate_to_russian(&text.to_uppercase())
        );
    }

    #[test]
    fn word_count_and_order_preserved(words in arb_text()) {
        let text = words.join(" ");
        let out = transliterate_to_russian(&text);
        let out_words: Vec<&str> = out.split(' ').collect();
        prop_assert_eq!(out_words.len(), words.len());
        for (word, translated) in words.iter().zip(&out_words) {
            prop_assert_eq!(transliterate_word(word), *translated);
        }
    }

    #[test]
    fn no_latin_letters_survive(word in arb_word()) {
        let out = transliterate_word(&word);
        prop_assert!(
            out.chars().all(|c| !c.is_ascii_alphabetic()),
            "{} -> {}", word, out
        );
    }

    #[test]
    fn explain_agrees_with_transliterate(word in "[a-zA-Zăâîșț,.!]{0,16}") {
        prop_assert_eq!(explain_word(&word).output, transliterate_word(&word));
    }

    #[test]
    fn repeated_patterns_terminate(unit in "(ia|ie|io|iu|ci|ce|gi|ge|ai|i)", n in 1usize..200) {
        let word = unit.repeat(n);
        let out = transliterate_word(&word);
        prop_assert!(!out.is_empty());
    }
}
