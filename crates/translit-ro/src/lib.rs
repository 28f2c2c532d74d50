//! Romanian-to-Russian transliteration rule engine.
//!
//! Each space-separated word is lowercased and rewritten by a fixed, ordered
//! pipeline of substitution passes, then the words are joined back together.
//!
//! # Architecture
//!
//! - [`tables`] -- unconditional priority and finishing substitution tables
//! - [`rules`] -- suffix, prefix and context-sensitive positional rules
//! - [`transliterator`] -- the per-word pipeline, text entry points and the
//!   stage trace
//!
//! All tables are immutable statics, so every entry point is a pure function
//! that can be called from any number of threads.

pub mod rules;
pub mod tables;
pub mod transliterator;

pub use transliterator::{
    Stage, TraceStep, WordTrace, explain, explain_word, transliterate_to_russian,
    transliterate_word,
};
