//! Formality scoring.
//!
//! Integer score over the formal/informal marker lists: +2 per distinct
//! formal marker present, -2 per distinct informal marker present (a marker
//! counts once no matter how often it occurs), then two fixed adjustments
//! for polite modals and casual contractions. Thresholds: > 1 is formal,
//! < -1 is informal, anything in between is semi-formal.

use crate::lexicon::Lexicon;
use crate::sentence::Sentence;
use crate::types::Formality;

/// Polite modal phrases worth a +1 adjustment (applied once if any match).
const POLITE_MODALS: [&str; 3] = ["would you", "could you", "might you"];

/// Casual contractions worth a -1 adjustment (applied once if any match).
const CASUAL_CONTRACTIONS: [&str; 3] = ["gonna", "wanna", "gotta"];

/// Score the formality of a sentence.
pub fn score_formality(lexicon: &Lexicon, sentence: &Sentence) -> Formality {
    let mut score: i32 = 0;

    for category in &lexicon.formal_markers {
        for marker in &category.markers {
            if sentence.contains(marker) {
                score += 2;
            }
        }
    }

    for category in &lexicon.informal_markers {
        for marker in &category.markers {
            if sentence.contains(marker) {
                score -= 2;
            }
        }
    }

    if POLITE_MODALS.iter().any(|m| sentence.contains(m)) {
        score += 1;
    }
    if CASUAL_CONTRACTIONS.iter().any(|m| sentence.contains(m)) {
        score -= 1;
    }

    let formality = if score > 1 {
        Formality::Formal
    } else if score < -1 {
        Formality::Informal
    } else {
        Formality::SemiFormal
    };

    tracing::trace!(score, %formality, "formality scored");
    formality
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> Formality {
        score_formality(&Lexicon::default(), &Sentence::new(text))
    }

    #[test]
    fn test_two_formal_markers_cross_threshold() {
        // "sincerely" and "cordially": score 4 > 1
        assert_eq!(score("Sincerely and cordially."), Formality::Formal);
    }

    #[test]
    fn test_marker_containment_is_substring_based() {
        // "yours" contains the informal marker "yo": 4 - 2 = 2, still formal
        assert_eq!(score("Sincerely and cordially yours."), Formality::Formal);
    }

    #[test]
    fn test_one_formal_one_informal_balances_out() {
        // "sincerely" +2, "dude" -2: score 0
        assert_eq!(score("Sincerely, dude."), Formality::SemiFormal);
    }

    #[test]
    fn test_informal_markers_push_below_threshold() {
        // "hey" -2, "man" -2
        assert_eq!(score("Hey man."), Formality::Informal);
    }

    #[test]
    fn test_polite_modal_adjustment() {
        // "could you" is itself a formal marker (+2) and a polite modal (+1)
        assert_eq!(score("Could you review this?"), Formality::Formal);
    }

    #[test]
    fn test_casual_contraction_adjustment() {
        // "gonna" is an informal marker (-2) and a contraction (-1)
        assert_eq!(score("We're gonna win."), Formality::Informal);
    }

    #[test]
    fn test_repeated_marker_counts_once() {
        // "sincerely" twice is still +2, so one "dude" (-2) balances it
        assert_eq!(score("sincerely sincerely dude"), Formality::SemiFormal);
    }

    #[test]
    fn test_no_markers_is_semi_formal() {
        assert_eq!(score("xyzzy plugh quux"), Formality::SemiFormal);
        assert_eq!(score(""), Formality::SemiFormal);
    }
}
