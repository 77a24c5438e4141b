//! Role extraction: action, subject, object.
//!
//! No parsing, just ordered first-match heuristics over the token list.
//! Subject and object each run an explicit strategy chain; the first
//! strategy to produce a token wins, and exhausting the chain yields `None`
//! (never an empty string, never an error).
//!
//! Action and subject scan the raw tokens; object extraction alone uses
//! the punctuation-trimmed copies.

use crate::lexicon::Lexicon;
use crate::sentence::Sentence;

/// Tokens never accepted as a fallback subject.
const SUBJECT_EXCLUSIONS: [&str; 2] = ["please", "kindly"];

/// Tokens never accepted by the filtered object scan.
const OBJECT_EXCLUSIONS: [&str; 6] = ["please", "kindly", "man", "guy", "buddy", "pal"];

/// Generic nouns too vague to serve as an object.
const GENERIC_NOUNS: [&str; 6] = ["time", "thing", "place", "stuff", "item", "object"];

/// The extracted grammatical roles of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roles {
    /// First action verb found in sentence order.
    pub action: Option<String>,

    /// First pronoun, or first qualifying content word.
    pub subject: Option<String>,

    /// First allow-listed object, or first token passing the filtered scan.
    pub object: Option<String>,
}

/// Roles already fixed when a later strategy runs.
struct RoleContext<'a> {
    lexicon: &'a Lexicon,
    action: Option<&'a str>,
    subject: Option<&'a str>,
}

type Strategy = for<'a> fn(&RoleContext<'a>, &[String]) -> Option<String>;

/// Subject strategies, tried in order.
const SUBJECT_STRATEGIES: [(&str, Strategy); 2] = [
    ("pronoun", subject_pronoun),
    ("content-word", subject_content_word),
];

/// Object strategies, tried in order.
const OBJECT_STRATEGIES: [(&str, Strategy); 2] = [
    ("notable-object", object_notable),
    ("filtered-scan", object_filtered_scan),
];

/// Extract (action, subject, object) from a sentence.
pub fn extract_roles(lexicon: &Lexicon, sentence: &Sentence) -> Roles {
    let action = find_action(lexicon, sentence.tokens());

    let subject = {
        let ctx = RoleContext {
            lexicon,
            action: action.as_deref(),
            subject: None,
        };
        run_strategies("subject", &ctx, sentence.tokens(), &SUBJECT_STRATEGIES)
    };

    let object = {
        let ctx = RoleContext {
            lexicon,
            action: action.as_deref(),
            subject: subject.as_deref(),
        };
        run_strategies("object", &ctx, sentence.clean_tokens(), &OBJECT_STRATEGIES)
    };

    Roles {
        action,
        subject,
        object,
    }
}

fn run_strategies(
    role: &str,
    ctx: &RoleContext<'_>,
    tokens: &[String],
    strategies: &[(&str, Strategy)],
) -> Option<String> {
    for &(name, strategy) in strategies {
        if let Some(token) = strategy(ctx, tokens) {
            tracing::trace!(role, strategy = name, token = %token, "role extracted");
            return Some(token);
        }
    }
    None
}

/// First token in sentence order that is in the flattened verb union.
fn find_action(lexicon: &Lexicon, tokens: &[String]) -> Option<String> {
    tokens.iter().find(|t| lexicon.is_verb(t)).cloned()
}

/// First pronoun token.
fn subject_pronoun(ctx: &RoleContext<'_>, tokens: &[String]) -> Option<String> {
    tokens.iter().find(|t| ctx.lexicon.is_pronoun(t)).cloned()
}

/// First content word: not a verb, not a function word, longer than two
/// characters, and not a courtesy filler.
fn subject_content_word(ctx: &RoleContext<'_>, tokens: &[String]) -> Option<String> {
    tokens
        .iter()
        .find(|t| {
            !ctx.lexicon.is_verb(t)
                && !ctx.lexicon.is_function_word(t)
                && t.chars().count() > 2
                && !SUBJECT_EXCLUSIONS.contains(&t.as_str())
        })
        .cloned()
}

/// First token on the notable-object allow-list.
fn object_notable(ctx: &RoleContext<'_>, tokens: &[String]) -> Option<String> {
    tokens
        .iter()
        .find(|t| ctx.lexicon.is_notable_object(t))
        .cloned()
}

/// First token surviving the full exclusion chain: not a pronoun, not the
/// chosen action or subject, not a function word, not a courtesy filler or
/// address term, longer than two characters, not a verb, and not a generic
/// noun.
fn object_filtered_scan(ctx: &RoleContext<'_>, tokens: &[String]) -> Option<String> {
    tokens
        .iter()
        .find(|t| {
            !ctx.lexicon.is_pronoun(t)
                && Some(t.as_str()) != ctx.action
                && !ctx.lexicon.is_function_word(t)
                && !OBJECT_EXCLUSIONS.contains(&t.as_str())
                && t.chars().count() > 2
                && !ctx.lexicon.is_verb(t)
                && Some(t.as_str()) != ctx.subject
                && !GENERIC_NOUNS.contains(&t.as_str())
        })
        .cloned()
}
