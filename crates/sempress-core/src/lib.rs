//! # sempress-core
//!
//! Deterministic lexical semantic compression engine.
//!
//! Takes a natural-language sentence and produces a compact structured
//! summary (sentence type, tone, formality, action, subject, object) using
//! keyword scoring over a static lexicon. No trained model, no network, no
//! persistence.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Total**: Every input yields a complete record; there is no error
//!    path, only defaults (statement / neutral / semi-formal, absent roles)
//! 3. **Pure**: No I/O, no hidden state; the lexicon is fixed at
//!    construction and read-only afterwards
//! 4. **Parallel-safe**: A compressor (or the shared default lexicon) can
//!    serve any number of concurrent callers without locking
//!
//! ## Example
//!
//! ```rust
//! use sempress_core::{compress, SentenceType, Tone};
//!
//! let record = compress("Hey man, let's meet for lunch!");
//! assert_eq!(record.sentence_type, SentenceType::Invitation);
//! assert_eq!(record.tone, Tone::Friendly);
//! assert_eq!(record.object.as_deref(), Some("lunch"));
//! ```
//!
//! Reconstructing prose from a record is the job of an external generative
//! service (see the `sempress-runtime` crate); this crate only produces the
//! record and assumes nothing about what happens to it.

pub mod analyzers;
pub mod compressor;
pub mod lexicon;
pub mod sentence;
pub mod types;

// Re-export main types at crate root
pub use compressor::SemanticCompressor;
pub use lexicon::{Lexicon, LexiconError, MarkerCategory, DEFAULT_LEXICON};
pub use sentence::Sentence;
pub use types::{Formality, SemanticAttributes, SentenceType, Tone};

/// Compress a sentence against the shared built-in lexicon.
///
/// This is the main entry point. For a custom lexicon, construct a
/// [`SemanticCompressor`] with [`SemanticCompressor::with_lexicon`].
pub fn compress(sentence: &str) -> SemanticAttributes {
    compressor::compress_with(&DEFAULT_LEXICON, sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_free_function_matches_owned_compressor() {
        let owned = SemanticCompressor::new();
        for input in [
            "Hey man, let's meet for lunch!",
            "What time is it?",
            "Dear sir, yo there",
            "",
        ] {
            assert_eq!(compress(input), owned.compress(input));
        }
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = compress("Could you please send the report?");
        let json = serde_json::to_string(&record).unwrap();
        let back: SemanticAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    proptest! {
        /// `compress(s) == compress(s)`, always.
        #[test]
        fn prop_compress_is_deterministic(input in ".{0,120}") {
            prop_assert_eq!(compress(&input), compress(&input));
        }

        /// Roles are always tokens drawn from the input (modulo
        /// lowercasing and, for the object, punctuation trimming).
        #[test]
        fn prop_roles_come_from_the_input(input in ".{0,120}") {
            let record = compress(&input);
            let sentence = Sentence::new(&input);

            if let Some(action) = &record.action {
                prop_assert!(sentence.tokens().contains(action));
            }
            if let Some(subject) = &record.subject {
                prop_assert!(sentence.tokens().contains(subject));
            }
            if let Some(object) = &record.object {
                prop_assert!(sentence.clean_tokens().contains(object));
            }
        }

        /// Compression never panics and always yields a serializable
        /// record, whatever the input.
        #[test]
        fn prop_compress_is_total(input in "\\PC{0,200}") {
            let record = compress(&input);
            serde_json::to_string(&record).unwrap();
        }
    }
}
