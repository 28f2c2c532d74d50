//! Shared utilities for Romanian-to-Russian transliteration.
//!
//! - [`character`] -- vowel/consonant classification and lowercasing
//! - [`words`] -- splitting text into words and joining them back

pub mod character;
pub mod words;
