//! Core types shared across the analysis engine.
//!
//! The three classification enums are closed sets: every analysis produces a
//! member of the set, never a free-form label. Lexicon categories that have
//! no corresponding enum member ("urgent", "command", ...) exist only to
//! shape the scoring and are mapped back to a default at selection time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tone of a sentence.
///
/// Wire values are lowercase (`"friendly"`, `"neutral"`, ...). Only a subset
/// of these is reachable from the built-in lexicon; `Professional` in
/// particular has no scoring category and survives for record compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Friendly,
    Formal,
    Casual,
    Professional,
    Enthusiastic,
    Neutral,
    Polite,
    Direct,
}

impl Tone {
    /// Map a lexicon category name to a tone, if one is exposed for it.
    ///
    /// Scoring-only categories ("urgent", "apologetic", "confident") return
    /// `None`; callers fall back to [`Tone::Neutral`].
    pub fn from_category(name: &str) -> Option<Self> {
        match name {
            "friendly" => Some(Tone::Friendly),
            "formal" => Some(Tone::Formal),
            "casual" => Some(Tone::Casual),
            "professional" => Some(Tone::Professional),
            "enthusiastic" => Some(Tone::Enthusiastic),
            "neutral" => Some(Tone::Neutral),
            "polite" => Some(Tone::Polite),
            "direct" => Some(Tone::Direct),
            _ => None,
        }
    }

    /// Lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Professional => "professional",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Neutral => "neutral",
            Tone::Polite => "polite",
            Tone::Direct => "direct",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formality level of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formality {
    #[serde(rename = "informal")]
    Informal,
    #[serde(rename = "semi-formal")]
    SemiFormal,
    #[serde(rename = "formal")]
    Formal,
}

impl Formality {
    /// Lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Informal => "informal",
            Formality::SemiFormal => "semi-formal",
            Formality::Formal => "formal",
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentence type.
///
/// The lexicon carries an extra "command" scoring category that is never
/// selectable as output; a command win is reported as [`SentenceType::Statement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceType {
    Invitation,
    Request,
    Statement,
    Question,
    Greeting,
    Farewell,
    Apology,
    ThankYou,
    Confirmation,
    Suggestion,
}

impl SentenceType {
    /// Map a lexicon category name to a sentence type, if one is exposed
    /// for it. The scoring-only "command" category returns `None`; callers
    /// fall back to [`SentenceType::Statement`].
    pub fn from_category(name: &str) -> Option<Self> {
        match name {
            "invitation" => Some(SentenceType::Invitation),
            "request" => Some(SentenceType::Request),
            "statement" => Some(SentenceType::Statement),
            "question" => Some(SentenceType::Question),
            "greeting" => Some(SentenceType::Greeting),
            "farewell" => Some(SentenceType::Farewell),
            "apology" => Some(SentenceType::Apology),
            "thank_you" => Some(SentenceType::ThankYou),
            "confirmation" => Some(SentenceType::Confirmation),
            "suggestion" => Some(SentenceType::Suggestion),
            _ => None,
        }
    }

    /// Lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Invitation => "invitation",
            SentenceType::Request => "request",
            SentenceType::Statement => "statement",
            SentenceType::Question => "question",
            SentenceType::Greeting => "greeting",
            SentenceType::Farewell => "farewell",
            SentenceType::Apology => "apology",
            SentenceType::ThankYou => "thank_you",
            SentenceType::Confirmation => "confirmation",
            SentenceType::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The compressed record produced for one input sentence.
///
/// Created fresh per input, never mutated afterwards. Serializes to the
/// key-value structure the reconstruction collaborator consumes:
/// `type`, `tone`, `formality`, `action`, `subject`, `object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticAttributes {
    /// Sentence type (`"type"` on the wire).
    #[serde(rename = "type")]
    pub sentence_type: SentenceType,

    /// Tone label.
    pub tone: Tone,

    /// Formality level.
    pub formality: Formality,

    /// Main action verb, if one was found in the sentence.
    pub action: Option<String>,

    /// Subject token, if one was found.
    pub subject: Option<String>,

    /// Object token (punctuation-stripped), if one was found.
    pub object: Option<String>,
}
