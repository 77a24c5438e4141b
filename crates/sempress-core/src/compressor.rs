//! The compressor: fan-out to the four analyzers, assemble the record.

use crate::analyzers::{extract_roles, score_formality, score_tone, score_type};
use crate::lexicon::Lexicon;
use crate::sentence::Sentence;
use crate::types::SemanticAttributes;

/// Compresses sentences into [`SemanticAttributes`] records against a
/// fixed lexicon.
///
/// Construction fixes the lexicon; after that, [`compress`](Self::compress)
/// is a pure function of the input and can be called concurrently from any
/// number of threads.
pub struct SemanticCompressor {
    lexicon: Lexicon,
}

impl SemanticCompressor {
    /// Compressor over the built-in lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::default(),
        }
    }

    /// Compressor over a caller-supplied lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon this compressor scores against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Compress one sentence into its structured record.
    ///
    /// Never fails: empty, punctuation-only, or nonsense input falls
    /// through to the defaults (statement / neutral / semi-formal, absent
    /// roles).
    pub fn compress(&self, input: &str) -> SemanticAttributes {
        compress_with(&self.lexicon, input)
    }
}

/// Compress a sentence against a borrowed lexicon.
pub(crate) fn compress_with(lexicon: &Lexicon, input: &str) -> SemanticAttributes {
    let sentence = Sentence::new(input);

    // The analyzers share the prepared sentence and are independent of
    // each other's output.
    let sentence_type = score_type(lexicon, &sentence);
    let tone = score_tone(lexicon, &sentence);
    let formality = score_formality(lexicon, &sentence);
    let roles = extract_roles(lexicon, &sentence);

    tracing::debug!(
        %sentence_type,
        %tone,
        %formality,
        action = roles.action.as_deref(),
        subject = roles.subject.as_deref(),
        object = roles.object.as_deref(),
        "sentence compressed"
    );

    SemanticAttributes {
        sentence_type,
        tone,
        formality,
        action: roles.action,
        subject: roles.subject,
        object: roles.object,
    }
}

impl Default for SemanticCompressor {
    fn default() -> Self {
        Self::new()
    }
}
