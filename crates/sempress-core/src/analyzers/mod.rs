//! The four sub-analyzers.
//!
//! Each analyzer is a pure function of the lexicon and a prepared
//! [`Sentence`](crate::sentence::Sentence); none depends on another's
//! output, so the compressor can run them in any order.

pub mod formality;
pub mod roles;
pub mod sentence_type;
pub mod tone;

pub use formality::score_formality;
pub use roles::{extract_roles, Roles};
pub use sentence_type::score_type;
pub use tone::score_tone;
