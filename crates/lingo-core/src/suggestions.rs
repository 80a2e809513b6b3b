// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured response parser for naming suggestions.
//!
//! All vendors are asked for the same JSON document:
//!
//! ```json
//! { "suggestions": [ { "name": "...", "style": "...", "description": "..." } ] }
//! ```
//!
//! Adapters hand the raw response text to [`parse_suggestions`] and never
//! decode it themselves.

use serde_json::Value;
use tracing::debug;

use crate::error::LingoError;
use crate::types::NamingSuggestion;

/// Parses raw vendor output into at most `requested` suggestions.
///
/// * not JSON (or empty) -> [`LingoError::Parse`]
/// * no `suggestions` array, a non-object element, or an empty array -> [`LingoError::Schema`]
/// * `requested == 0` -> [`LingoError::Config`]
///
/// Field values are taken as given: missing or null fields become empty
/// strings and other scalars are stringified. Fewer suggestions than
/// requested is not an error. Vendor order is kept.
pub fn parse_suggestions(raw: &str, requested: usize) -> Result<Vec<NamingSuggestion>, LingoError> {
    if requested == 0 {
        return Err(LingoError::Config(
            "naming count must be at least 1".into(),
        ));
    }

    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(LingoError::Parse {
            message: "model returned empty content".into(),
            source: None,
        });
    }

    let document: Value = serde_json::from_str(body).map_err(|e| LingoError::Parse {
        message: format!("response is not valid JSON: {e}"),
        source: Some(Box::new(e)),
    })?;

    let items = document
        .get("suggestions")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            LingoError::Schema("expected a top-level `suggestions` array".into())
        })?;

    if items.is_empty() {
        return Err(LingoError::Schema("`suggestions` array is empty".into()));
    }

    let suggestions = items
        .iter()
        .take(requested)
        .enumerate()
        .map(|(i, item)| match item.as_object() {
            Some(fields) => Ok(NamingSuggestion {
                name: field_text(fields.get("name")),
                style: field_text(fields.get("style")),
                description: field_text(fields.get("description")),
            }),
            None => Err(LingoError::Schema(format!(
                "suggestions[{i}] is not an object"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        returned = items.len(),
        kept = suggestions.len(),
        requested,
        "parsed naming suggestions"
    );

    Ok(suggestions)
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Removes a surrounding Markdown code fence (```` ```json ... ``` ````).
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use proptest::prelude::*;

    fn doc(n: usize) -> String {
        let items: Vec<String> = (0..n)
            .map(|i| {
                format!(r#"{{"name":"name{i}","style":"camelCase","description":"d{i}"}}"#)
            })
            .collect();
        format!(r#"{{"suggestions":[{}]}}"#, items.join(","))
    }

    #[test]
    fn not_json_is_parse_error() {
        let err = parse_suggestions("not json", 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn empty_content_is_parse_error() {
        let err = parse_suggestions("   ", 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn missing_suggestions_field_is_schema_error() {
        let err = parse_suggestions(r#"{"names":[]}"#, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaError);
    }

    #[test]
    fn suggestions_of_wrong_type_is_schema_error() {
        let err = parse_suggestions(r#"{"suggestions":"userList"}"#, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaError);
    }

    #[test]
    fn non_object_element_is_schema_error() {
        let err = parse_suggestions(r#"{"suggestions":["userList"]}"#, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaError);
    }

    #[test]
    fn empty_array_is_schema_error() {
        let err = parse_suggestions(r#"{"suggestions":[]}"#, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaError);
    }

    #[test]
    fn loose_fields_do_not_fail_the_call() {
        let raw = r#"{"suggestions":[
            {"name":"userList","style":"camelCase","description":null},
            {"name":42,"style":"camelCase"},
            {"name":"users","style":"camelCase","description":"plural"}
        ]}"#;
        let out = parse_suggestions(raw, 3).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].description, "");
        assert_eq!(out[1].name, "42");
        assert_eq!(out[1].description, "");
        assert_eq!(out[2].description, "plural");
    }

    #[test]
    fn zero_requested_is_config_error() {
        let err = parse_suggestions(&doc(1), 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationError);
    }

    #[test]
    fn under_delivery_is_not_an_error() {
        let out = parse_suggestions(&doc(3), 5).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn truncates_and_preserves_order() {
        let out = parse_suggestions(&doc(6), 3).unwrap();
        let names: Vec<_> = out.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["name0", "name1", "name2"]);
    }

    #[test]
    fn fenced_json_is_accepted() {
        let raw = format!("```json\n{}\n```", doc(2));
        let out = parse_suggestions(&raw, 3).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].description, "d1");
    }

    #[test]
    fn unterminated_fence_is_parse_error() {
        let err = parse_suggestions("```json\n{\"suggestions\":[]}", 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    proptest! {
        #[test]
        fn never_returns_more_than_requested(returned in 1usize..12, requested in 1usize..12) {
            let out = parse_suggestions(&doc(returned), requested).unwrap();
            prop_assert_eq!(out.len(), returned.min(requested));
        }
    }
}
