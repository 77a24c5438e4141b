//! The static marker lexicon driving all four analyzers.
//!
//! A [`Lexicon`] is read-only after construction: it is built once (either
//! the built-in set via [`Lexicon::default`], or loaded from YAML) and then
//! shared by reference across any number of concurrent callers. Category
//! declaration order is load-bearing: it is the documented tie-break
//! iteration order for tone and type selection, and the fixed flatten order
//! for the verb classes.
//!
//! All marker strings are lowercase; [`Lexicon::from_yaml`] normalizes
//! loaded markers to enforce this.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading a custom lexicon.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse lexicon YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A named, ordered list of marker phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerCategory {
    /// Category name (e.g. `"friendly"`, `"communication"`).
    pub name: String,

    /// Marker phrases, lowercase, in declaration order.
    pub markers: Vec<String>,
}

impl MarkerCategory {
    fn new(name: &str, markers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            markers: markers.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// The complete static collection of marker categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Formal-register markers, sub-categorized. Each distinct marker
    /// present in a sentence adds +2 to the formality score.
    pub formal_markers: Vec<MarkerCategory>,

    /// Informal-register markers, sub-categorized. Each distinct marker
    /// present subtracts 2 from the formality score.
    pub informal_markers: Vec<MarkerCategory>,

    /// One category per tone label. Declaration order is the tone
    /// tie-break order; the trailing categories ("urgent", "apologetic",
    /// "confident") are scoring-only and not representable as output.
    pub tone_markers: Vec<MarkerCategory>,

    /// One category per sentence-type label, plus the scoring-only
    /// "command" category, declared last.
    pub type_markers: Vec<MarkerCategory>,

    /// Action verbs grouped by semantic class, in the fixed flatten order
    /// communication, movement, cognition, emotion, action, possession.
    pub verb_classes: Vec<MarkerCategory>,

    /// Subject pronouns.
    pub pronouns: Vec<String>,

    /// Common nouns grouped by category. Not consulted by the scorers;
    /// part of the lexicon surface for callers that want to bucket tokens.
    pub noun_categories: Vec<MarkerCategory>,

    /// Curated allow-list of notable object tokens, tried before the
    /// filtered object scan.
    pub notable_objects: Vec<String>,

    /// Function words (stop words) excluded from role extraction.
    pub function_words: Vec<String>,
}

lazy_static! {
    /// Process-wide shared copy of the built-in lexicon.
    pub static ref DEFAULT_LEXICON: Lexicon = Lexicon::default();
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            formal_markers: vec![
                MarkerCategory::new(
                    "polite_requests",
                    &["please", "kindly", "would you", "could you", "might you", "if you could"],
                ),
                MarkerCategory::new(
                    "formal_greetings",
                    &["dear", "sir", "madam", "regards", "respectfully", "to whom it may concern"],
                ),
                MarkerCategory::new(
                    "formal_connectors",
                    &["regarding", "concerning", "with respect to", "in reference to", "pertaining to"],
                ),
                MarkerCategory::new(
                    "formal_closings",
                    &["sincerely", "yours truly", "best regards", "cordially", "faithfully"],
                ),
                MarkerCategory::new(
                    "formal_indicators",
                    &["therefore", "thus", "hence", "consequently", "accordingly"],
                ),
            ],
            informal_markers: vec![
                MarkerCategory::new(
                    "casual_greetings",
                    &["hey", "yo", "sup", "what's up", "howdy", "hiya"],
                ),
                MarkerCategory::new(
                    "slang",
                    &["dude", "bro", "man", "guy", "buddy", "pal", "mate", "chum"],
                ),
                MarkerCategory::new(
                    "contractions",
                    &["gonna", "wanna", "gotta", "lemme", "dunno", "y'know", "c'mon"],
                ),
                MarkerCategory::new(
                    "casual_closings",
                    &["later", "peace", "catch ya", "see ya", "take it easy", "cheers"],
                ),
                MarkerCategory::new(
                    "casual_indicators",
                    &["like", "you know", "sort of", "kind of", "basically"],
                ),
            ],
            tone_markers: vec![
                MarkerCategory::new(
                    "friendly",
                    &["hey", "hi", "hello", "buddy", "friend", "great", "nice", "welcome", "glad"],
                ),
                MarkerCategory::new(
                    "formal",
                    &["regarding", "respectfully", "dear", "sir", "madam", "concerning", "properly"],
                ),
                MarkerCategory::new(
                    "casual",
                    &["yo", "dude", "bro", "sup", "man", "guy", "cool", "awesome"],
                ),
                MarkerCategory::new(
                    "enthusiastic",
                    &[
                        "amazing", "fantastic", "wonderful", "great", "awesome", "excellent",
                        "brilliant", "outstanding",
                    ],
                ),
                MarkerCategory::new(
                    "polite",
                    &["please", "thank you", "kindly", "would you", "could you", "appreciate", "grateful"],
                ),
                MarkerCategory::new(
                    "direct",
                    &["now", "immediately", "just", "simply", "directly", "straightforward", "clearly"],
                ),
                MarkerCategory::new(
                    "urgent",
                    &["urgent", "asap", "immediately", "right away", "now", "quickly", "hurry"],
                ),
                MarkerCategory::new(
                    "apologetic",
                    &["sorry", "apologize", "excuse me", "pardon", "regret", "my bad", "my mistake"],
                ),
                MarkerCategory::new(
                    "confident",
                    &["definitely", "certainly", "absolutely", "surely", "obviously", "clearly"],
                ),
            ],
            type_markers: vec![
                MarkerCategory::new(
                    "invitation",
                    &["let's", "lets", "join", "come", "meet", "invite", "how about", "would you like to", "care to"],
                ),
                MarkerCategory::new(
                    "request",
                    &["please", "could you", "can you", "would you", "send", "confirm", "let me know", "need", "require"],
                ),
                MarkerCategory::new(
                    "question",
                    &["?", "what", "when", "where", "how", "why", "who", "which", "whose", "is", "are", "do", "does"],
                ),
                MarkerCategory::new(
                    "greeting",
                    &["hello", "hi", "hey", "good morning", "good afternoon", "good evening", "greetings"],
                ),
                MarkerCategory::new(
                    "farewell",
                    &["bye", "goodbye", "see you", "take care", "have a good day", "until next time", "farewell"],
                ),
                MarkerCategory::new(
                    "apology",
                    &["sorry", "apologize", "excuse me", "pardon", "regret", "my bad", "my mistake", "forgive me"],
                ),
                MarkerCategory::new(
                    "thank_you",
                    &["thank you", "thanks", "appreciate", "grateful", "obliged", "thankful"],
                ),
                MarkerCategory::new(
                    "confirmation",
                    &["yes", "confirm", "agree", "okay", "sure", "absolutely", "definitely", "certainly"],
                ),
                MarkerCategory::new(
                    "suggestion",
                    &["maybe", "suggest", "how about", "what if", "consider", "perhaps", "might want to"],
                ),
                // Scoring-only: absorbs imperative verbs, never selectable.
                MarkerCategory::new(
                    "command",
                    &["do", "make", "get", "find", "bring", "take", "go", "come", "stop", "start"],
                ),
            ],
            verb_classes: vec![
                MarkerCategory::new(
                    "communication",
                    &["send", "call", "text", "email", "message", "contact", "reach", "notify", "inform", "tell"],
                ),
                MarkerCategory::new(
                    "movement",
                    &["meet", "come", "go", "join", "attend", "visit", "travel", "arrive", "leave", "return"],
                ),
                MarkerCategory::new(
                    "cognition",
                    &["think", "know", "understand", "remember", "forget", "realize", "believe", "consider"],
                ),
                MarkerCategory::new(
                    "emotion",
                    &["love", "like", "hate", "want", "need", "hope", "wish", "enjoy", "appreciate"],
                ),
                MarkerCategory::new(
                    "action",
                    &["make", "do", "create", "build", "fix", "solve", "work", "complete", "finish"],
                ),
                MarkerCategory::new(
                    "possession",
                    &["get", "have", "take", "bring", "grab", "find", "buy", "obtain", "receive"],
                ),
            ],
            pronouns: to_strings(&[
                "i", "you", "we", "they", "he", "she", "it", "this", "that", "these", "those",
                "me", "us", "them",
            ]),
            noun_categories: vec![
                MarkerCategory::new(
                    "time",
                    &["time", "day", "week", "month", "year", "hour", "minute", "moment", "period", "schedule"],
                ),
                MarkerCategory::new(
                    "place",
                    &["place", "location", "office", "home", "restaurant", "meeting", "room", "area", "space"],
                ),
                MarkerCategory::new(
                    "thing",
                    &["thing", "item", "object", "stuff", "material", "equipment", "tool", "device"],
                ),
                MarkerCategory::new(
                    "person",
                    &["person", "people", "friend", "colleague", "manager", "team", "group", "individual"],
                ),
                MarkerCategory::new(
                    "document",
                    &["report", "document", "file", "paper", "email", "message", "letter", "note"],
                ),
            ],
            notable_objects: to_strings(&[
                "lunch", "dinner", "breakfast", "report", "document", "file", "email", "message",
                "meeting", "event", "attendance", "confirmation", "response", "answer", "feedback",
                "review", "comment", "suggestion", "idea", "thought", "opinion", "plan", "project",
                "task", "assignment", "homework", "presentation", "proposal", "contract",
                "agreement", "offer", "request", "question", "solution", "result", "decision",
                "option", "possibility", "opportunity",
            ]),
            function_words: to_strings(&[
                "the", "and", "but", "for", "with", "from", "to", "in", "on", "at", "by", "of",
                "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has",
                "had", "do", "does", "did", "will", "would", "could", "should", "may", "might",
                "can", "must",
            ]),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Lexicon {
    /// Load a custom lexicon from YAML. Marker strings are lowercased.
    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        let mut lexicon: Lexicon = serde_yaml::from_str(yaml)?;
        lexicon.normalize();
        Ok(lexicon)
    }

    /// Load a custom lexicon from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Lowercase every marker string (invariant: markers are lowercase).
    fn normalize(&mut self) {
        let groups = [
            &mut self.formal_markers,
            &mut self.informal_markers,
            &mut self.tone_markers,
            &mut self.type_markers,
            &mut self.verb_classes,
            &mut self.noun_categories,
        ];
        for group in groups {
            for category in group.iter_mut() {
                for marker in &mut category.markers {
                    *marker = marker.to_lowercase();
                }
            }
        }
        for list in [
            &mut self.pronouns,
            &mut self.notable_objects,
            &mut self.function_words,
        ] {
            for word in list.iter_mut() {
                *word = word.to_lowercase();
            }
        }
    }

    /// Flattened action-verb union, in fixed class order.
    pub fn all_verbs(&self) -> impl Iterator<Item = &str> {
        self.verb_classes
            .iter()
            .flat_map(|class| class.markers.iter().map(String::as_str))
    }

    /// Whether a token is in the flattened verb union.
    pub fn is_verb(&self, token: &str) -> bool {
        self.all_verbs().any(|verb| verb == token)
    }

    /// Whether a token is a subject pronoun.
    pub fn is_pronoun(&self, token: &str) -> bool {
        self.pronouns.iter().any(|p| p == token)
    }

    /// Whether a token is a function word.
    pub fn is_function_word(&self, token: &str) -> bool {
        self.function_words.iter().any(|w| w == token)
    }

    /// Whether a token is on the notable-object allow-list.
    pub fn is_notable_object(&self, token: &str) -> bool {
        self.notable_objects.iter().any(|o| o == token)
    }

    /// Which noun category a token belongs to, if any.
    pub fn noun_category(&self, token: &str) -> Option<&str> {
        self.noun_categories
            .iter()
            .find(|cat| cat.markers.iter().any(|m| m == token))
            .map(|cat| cat.name.as_str())
    }
}
