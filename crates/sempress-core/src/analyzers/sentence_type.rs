//! Sentence-type classification.
//!
//! Keyword scoring with two punctuation boosts: a `?` in the sentence adds
//! 2 to the question score (on top of the keyword hits, including the +1
//! the literal `?` marker earns on its own), and a `!` adds 1 to the
//! invitation score. Boosts only apply to a category that already has at
//! least one keyword hit.
//!
//! Selection takes the maximum with declaration-order tie-break. An
//! all-zero board defaults to statement, and a win by the scoring-only
//! "command" category is reported as statement.

use crate::lexicon::Lexicon;
use crate::sentence::Sentence;
use crate::types::SentenceType;

/// Boost added to the question score when the sentence contains `?`.
const QUESTION_BOOST: u32 = 2;

/// Boost added to the invitation score when the sentence contains `!`.
const INVITATION_BOOST: u32 = 1;

/// Classify the sentence type.
pub fn score_type(lexicon: &Lexicon, sentence: &Sentence) -> SentenceType {
    let has_question_mark = sentence.contains("?");
    let has_exclamation = sentence.contains("!");

    let mut winner: Option<(&str, u32)> = None;
    for category in &lexicon.type_markers {
        let hits = category
            .markers
            .iter()
            .filter(|marker| sentence.contains(marker))
            .count() as u32;

        let mut score = hits;
        if hits > 0 {
            if category.name == "question" && has_question_mark {
                score += QUESTION_BOOST;
            }
            if category.name == "invitation" && has_exclamation {
                score += INVITATION_BOOST;
            }
        }

        // Strict comparison keeps the earlier category on ties.
        if score > 0 && winner.map_or(true, |(_, best)| score > best) {
            winner = Some((category.name.as_str(), score));
        }
    }

    match winner {
        None => SentenceType::Statement,
        Some((name, score)) => {
            tracing::trace!(category = name, score, "type category selected");
            SentenceType::from_category(name).unwrap_or(SentenceType::Statement)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> SentenceType {
        score_type(&Lexicon::default(), &Sentence::new(text))
    }

    #[test]
    fn test_no_markers_defaults_to_statement() {
        assert_eq!(score("xyzzy plugh quux"), SentenceType::Statement);
        assert_eq!(score(""), SentenceType::Statement);
    }

    #[test]
    fn test_question_mark_boost() {
        // keyword hits ("?", "what", "is") plus the +2 boost
        assert_eq!(score("What time is it?"), SentenceType::Question);
    }

    #[test]
    fn test_question_without_mark_still_scores() {
        // "where" and "is" alone outscore everything else
        assert_eq!(score("where is the office"), SentenceType::Question);
    }

    #[test]
    fn test_invitation_exclamation_boost() {
        // invitation: "let's" + "meet" + "!" = 4, greeting: "hey" = 1
        assert_eq!(score("Hey man, let's meet for lunch!"), SentenceType::Invitation);
    }

    #[test]
    fn test_exclamation_alone_does_not_boost() {
        // no invitation keyword hit, so the "!" contributes nothing
        assert_ne!(score("wow!"), SentenceType::Invitation);
    }

    #[test]
    fn test_command_win_reported_as_statement() {
        // "stop" and "start" hit only the scoring-only command category
        assert_eq!(score("stop, then start"), SentenceType::Statement);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(score("good morning greetings"), SentenceType::Greeting);
    }

    #[test]
    fn test_thank_you() {
        assert_eq!(score("thanks, thankful and obliged"), SentenceType::ThankYou);
    }

    #[test]
    fn test_farewell() {
        assert_eq!(score("goodbye, take care until next time"), SentenceType::Farewell);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // invitation: "join" = 1 ties request: "send" = 1; invitation is
        // declared first
        assert_eq!(score("join send"), SentenceType::Invitation);
    }
}
