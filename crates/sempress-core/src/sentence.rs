//! Pre-analysis view of an input sentence.
//!
//! All four analyzers read the same lowercase text and token list, built
//! once here. Marker containment is a raw substring check against the
//! lowered text, not a word-boundary match, so a marker like "man" also
//! matches inside "demand". That is deliberate: the scoring rules are
//! specified over substrings and the tests pin that behavior.

/// An input sentence prepared for analysis.
#[derive(Debug, Clone)]
pub struct Sentence {
    lowered: String,
    tokens: Vec<String>,
    clean_tokens: Vec<String>,
}

impl Sentence {
    /// Lowercase, tokenize on whitespace, and keep a punctuation-trimmed
    /// copy of the tokens (used only by object extraction).
    pub fn new(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let tokens: Vec<String> = lowered.split_whitespace().map(str::to_string).collect();
        let clean_tokens = tokens
            .iter()
            .map(|t| {
                t.trim_matches(|c: char| c.is_ascii_punctuation())
                    .to_string()
            })
            .collect();
        Self {
            lowered,
            tokens,
            clean_tokens,
        }
    }

    /// Full lowercase text.
    pub fn text(&self) -> &str {
        &self.lowered
    }

    /// Whether a marker phrase occurs anywhere in the text.
    pub fn contains(&self, marker: &str) -> bool {
        !marker.is_empty() && self.lowered.contains(marker)
    }

    /// Non-overlapping occurrence count of a marker phrase.
    pub fn count(&self, marker: &str) -> usize {
        if marker.is_empty() {
            0
        } else {
            self.lowered.matches(marker).count()
        }
    }

    /// Whitespace-split lowercase tokens, punctuation intact.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens with leading/trailing ASCII punctuation removed.
    pub fn clean_tokens(&self) -> &[String] {
        &self.clean_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_tokenizes() {
        let s = Sentence::new("Hey man, let's meet for lunch!");
        assert_eq!(s.text(), "hey man, let's meet for lunch!");
        assert_eq!(
            s.tokens(),
            ["hey", "man,", "let's", "meet", "for", "lunch!"]
        );
        assert_eq!(
            s.clean_tokens(),
            ["hey", "man", "let's", "meet", "for", "lunch"]
        );
    }

    #[test]
    fn test_substring_containment_crosses_word_boundaries() {
        let s = Sentence::new("I demand an answer");
        assert!(s.contains("man"));
        assert!(s.contains("demand"));
        assert!(!s.contains("woman"));
    }

    #[test]
    fn test_occurrence_count_is_non_overlapping() {
        let s = Sentence::new("great, really great, just great");
        assert_eq!(s.count("great"), 3);
        assert_eq!(s.count("absent"), 0);
        assert_eq!(s.count(""), 0);
    }

    #[test]
    fn test_empty_and_punctuation_only_input() {
        let empty = Sentence::new("");
        assert!(empty.tokens().is_empty());

        let punct = Sentence::new("!?! ...");
        assert_eq!(punct.tokens(), ["!?!", "..."]);
        assert_eq!(punct.clean_tokens(), ["", ""]);
    }

    #[test]
    fn test_interior_punctuation_survives_trim() {
        let s = Sentence::new("(let's)");
        assert_eq!(s.clean_tokens(), ["let's"]);
    }
}
