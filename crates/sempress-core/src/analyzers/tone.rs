//! Tone scoring.
//!
//! Weighted keyword scoring over the tone categories, followed by two
//! suppression rules applied in order:
//!
//! 1. Formal/casual mutual exclusivity: if both are positive, the smaller
//!    is zeroed; an exact tie zeroes casual.
//! 2. Enthusiasm dominance: if enthusiastic is positive, friendly and
//!    casual are each zeroed when strictly below the enthusiastic score.
//!
//! Selection takes the maximum; ties resolve to the category declared
//! first in the lexicon. An all-zero board or a win by a scoring-only
//! category ("urgent", "apologetic", "confident") yields neutral.

use crate::lexicon::Lexicon;
use crate::sentence::Sentence;
use crate::types::Tone;

/// Bonus added when a marker occurs more than once in the sentence.
const REPEAT_BONUS: f64 = 0.5;

/// Score the tone of a sentence.
pub fn score_tone(lexicon: &Lexicon, sentence: &Sentence) -> Tone {
    let mut scores: Vec<(&str, f64)> = lexicon
        .tone_markers
        .iter()
        .map(|category| {
            let mut score = 0.0;
            for marker in &category.markers {
                if sentence.contains(marker) {
                    score += 1.0;
                    if sentence.count(marker) > 1 {
                        score += REPEAT_BONUS;
                    }
                }
            }
            (category.name.as_str(), score)
        })
        .collect();

    suppress_formal_casual(&mut scores);
    suppress_under_enthusiasm(&mut scores);

    let winner = scores
        .iter()
        .fold(None::<(&str, f64)>, |best, &(name, score)| {
            match best {
                // Strict comparison keeps the earlier category on ties.
                Some((_, best_score)) if score <= best_score => best,
                _ if score > 0.0 => Some((name, score)),
                _ => best,
            }
        });

    match winner {
        None => Tone::Neutral,
        Some((name, score)) => {
            tracing::trace!(category = name, score, "tone category selected");
            Tone::from_category(name).unwrap_or(Tone::Neutral)
        }
    }
}

fn get(scores: &[(&str, f64)], name: &str) -> f64 {
    scores
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, s)| *s)
        .unwrap_or(0.0)
}

fn zero(scores: &mut [(&str, f64)], name: &str) {
    if let Some(slot) = scores.iter_mut().find(|(n, _)| *n == name) {
        slot.1 = 0.0;
    }
}

/// Rule 1: formal and casual are mutually exclusive. The smaller positive
/// score is zeroed; on an exact tie, casual loses.
fn suppress_formal_casual(scores: &mut [(&str, f64)]) {
    let formal = get(scores, "formal");
    let casual = get(scores, "casual");
    if formal > 0.0 && casual > 0.0 {
        if formal >= casual {
            zero(scores, "casual");
        } else {
            zero(scores, "formal");
        }
    }
}

/// Rule 2: a positive enthusiastic score suppresses friendly and casual
/// scores that fall strictly below it.
fn suppress_under_enthusiasm(scores: &mut [(&str, f64)]) {
    let enthusiastic = get(scores, "enthusiastic");
    if enthusiastic > 0.0 {
        for name in ["friendly", "casual"] {
            if get(scores, name) < enthusiastic {
                zero(scores, name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> Tone {
        score_tone(&Lexicon::default(), &Sentence::new(text))
    }

    #[test]
    fn test_no_markers_is_neutral() {
        assert_eq!(score("xyzzy plugh quux"), Tone::Neutral);
        assert_eq!(score(""), Tone::Neutral);
    }

    #[test]
    fn test_formal_suppresses_weaker_casual() {
        // formal: "dear" + "sir" = 2, casual: "yo" = 1; casual zeroed
        assert_eq!(score("Dear sir, yo there"), Tone::Formal);
    }

    #[test]
    fn test_casual_suppresses_weaker_formal() {
        // casual: "yo" + "dude" = 2, formal: "sir" = 1; formal zeroed
        assert_eq!(score("Yo dude, sir"), Tone::Casual);
    }

    #[test]
    fn test_formal_casual_tie_zeroes_casual() {
        // formal: "sir" = 1, casual: "yo" = 1
        assert_eq!(score("sir, yo"), Tone::Formal);
    }

    #[test]
    fn test_enthusiasm_suppresses_weaker_friendly() {
        // enthusiastic: "amazing" + "fantastic" = 2, friendly: "nice" = 1
        assert_eq!(score("amazing fantastic nice"), Tone::Enthusiastic);
    }

    #[test]
    fn test_friendly_equal_to_enthusiasm_survives() {
        // friendly: "hey" = 1, enthusiastic: "amazing" = 1; only strictly
        // smaller scores are zeroed, and friendly is declared first
        assert_eq!(score("hey, amazing"), Tone::Friendly);
    }

    #[test]
    fn test_repeat_bonus_breaks_tie() {
        // "great" scores friendly and enthusiastic alike, but doubling
        // "amazing" lifts enthusiastic past the suppression threshold
        assert_eq!(score("amazing, truly amazing and great"), Tone::Enthusiastic);
    }

    #[test]
    fn test_friendly_wins_declaration_order_tie() {
        // friendly: "hey" = 1, casual: "man" = 1, no suppression applies
        assert_eq!(score("hey man"), Tone::Friendly);
    }

    #[test]
    fn test_scoring_only_winner_falls_back_to_neutral() {
        // "asap" + "hurry" = 2 on urgent, which has no exposed tone
        assert_eq!(score("asap, hurry"), Tone::Neutral);
    }

    #[test]
    fn test_polite_markers() {
        assert_eq!(score("thank you, appreciate the help"), Tone::Polite);
    }
}
