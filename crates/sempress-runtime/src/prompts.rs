//! Reconstruction prompt template.
//!
//! The prompt frames the model as a renderer of the record, not an author:
//! it must honor every field of the record and return exactly one sentence
//! with no commentary. Everything dynamic (the record itself) goes at the
//! end so the static part of the prompt stays cache-friendly.

use sempress_core::SemanticAttributes;

/// System/task prompt for sentence reconstruction. The `{data}` slot
/// receives the JSON-serialized record.
pub const RECONSTRUCT_PROMPT: &str = r#"You are reconstructing a natural-language sentence from a compressed semantic record.

The record has six fields:
- "type": the kind of sentence (invitation, request, statement, question, greeting, farewell, apology, thank_you, confirmation, suggestion)
- "tone": the emotional register (friendly, formal, casual, professional, enthusiastic, neutral, polite, direct)
- "formality": the register level (informal, semi-formal, formal)
- "action": the main verb, or null
- "subject": the grammatical subject, or null
- "object": the main object, or null

Rules:
1. Produce exactly ONE sentence that matches every non-null field.
2. Match the tone and formality in word choice and phrasing.
3. Use the action, subject, and object words where they fit naturally; inflect them as needed.
4. Invent nothing beyond what the record implies.
5. Return only the sentence - no quotes, no explanation, no markdown.

Record:
{data}"#;

/// Render the reconstruction prompt for a record.
pub fn render_prompt(record: &SemanticAttributes) -> String {
    // Serializing a record cannot fail: every field is an enum wire value
    // or an optional plain string.
    let data = serde_json::to_string_pretty(record)
        .unwrap_or_else(|_| "{}".to_string());
    RECONSTRUCT_PROMPT.replace("{data}", &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sempress_core::compress;

    #[test]
    fn test_prompt_carries_the_record_fields() {
        let record = compress("Hey man, let's meet for lunch!");
        let prompt = render_prompt(&record);

        assert!(prompt.contains("\"type\": \"invitation\""));
        assert!(prompt.contains("\"tone\": \"friendly\""));
        assert!(prompt.contains("\"formality\": \"informal\""));
        assert!(prompt.contains("\"object\": \"lunch\""));
        assert!(!prompt.contains("{data}"));
    }

    #[test]
    fn test_prompt_renders_null_for_absent_roles() {
        let record = compress("xyzzy");
        let prompt = render_prompt(&record);
        assert!(prompt.contains("\"action\": null"));
        assert!(prompt.contains("\"object\": null"));
    }
}
