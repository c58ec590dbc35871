//! Action directive extraction from raw model output.
//!
//! Models following the Thought / Action / PAUSE protocol embed a JSON
//! array (or single object) somewhere in their prose reply. This module
//! scans the reply left to right for the first decodable JSON structure
//! and decodes it into [`ActionDirective`]s. Text with no such structure,
//! or a structure of the wrong shape, is a normal final-answer condition
//! and yields `None`.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A parsed instruction naming a tool and its keyword arguments.
///
/// Transient: exists only to bridge one loop iteration to the next tool
/// call.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionDirective {
    pub function_name: String,
    pub function_params: HashMap<String, String>,
}

/// Extracts action directives embedded in raw assistant text.
///
/// Scans for the first position where a `[` or `{` starts valid JSON
/// (trailing prose after the structure is fine), then decodes that value
/// into a non-empty directive list. Returns `None` when no candidate
/// decodes — the caller treats that as the final answer.
pub fn extract_directives(text: &str) -> Option<Vec<ActionDirective>> {
    for (idx, ch) in text.char_indices() {
        if ch != '[' && ch != '{' {
            continue;
        }
        let mut stream = serde_json::Deserializer::from_str(&text[idx..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => return decode(value),
            _ => continue,
        }
    }
    None
}

/// Decodes a JSON value into a non-empty directive list.
///
/// A top-level array is taken as a list of directives; a top-level object
/// as a single directive. Anything else, or a structure that does not
/// match the directive shape (including non-string parameter values), is
/// treated as malformed and yields `None`.
fn decode(value: Value) -> Option<Vec<ActionDirective>> {
    let directives: Vec<ActionDirective> = match value {
        Value::Array(_) => serde_json::from_value(value).ok()?,
        Value::Object(_) => vec![serde_json::from_value(value).ok()?],
        _ => return None,
    };
    if directives.is_empty() {
        None
    } else {
        Some(directives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_directive_embedded_in_prose() {
        let text = r#"Thought: I should summarize.
Action: [{"function_name": "summarize_content", "function_params": {"content": "X"}}]
PAUSE"#;
        let directives = extract_directives(text).unwrap();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].function_name, "summarize_content");
        assert_eq!(directives[0].function_params["content"], "X");
    }

    #[test]
    fn bare_object_directive() {
        let text = r#"{"function_name": "generate_blog_ideas", "function_params": {"topic": "rust", "style": "casual"}}"#;
        let directives = extract_directives(text).unwrap();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].function_params.len(), 2);
    }

    #[test]
    fn plain_text_yields_none() {
        assert!(extract_directives("Answer: the weather is nice today.").is_none());
    }

    #[test]
    fn unbalanced_braces_yield_none() {
        assert!(extract_directives("Action: {\"function_name\": ").is_none());
    }

    #[test]
    fn wrong_shape_is_malformed() {
        // Valid JSON, but not the directive shape
        assert!(extract_directives("scores: [1, 2, 3]").is_none());
        assert!(extract_directives(r#"{"name": "not a directive"}"#).is_none());
    }

    #[test]
    fn non_string_params_are_malformed() {
        let text = r#"[{"function_name": "summarize_content", "function_params": {"content": 42}}]"#;
        assert!(extract_directives(text).is_none());
    }

    #[test]
    fn empty_array_yields_none() {
        assert!(extract_directives("Action: []").is_none());
    }

    #[test]
    fn first_decodable_structure_wins() {
        let text = r#"{ not json } then [{"function_name": "a", "function_params": {}}]"#;
        let directives = extract_directives(text).unwrap();
        assert_eq!(directives[0].function_name, "a");
    }

    #[test]
    fn trailing_prose_after_structure_is_ignored() {
        let text = r#"[{"function_name": "a", "function_params": {"k": "v"}}] and then some prose"#;
        assert!(extract_directives(text).is_some());
    }
}
