//! Thin JSON codec over `serde_json`.
//!
//! Call sites stay decoupled from the concrete codec: one
//! [`parse_to_map`] / [`serialize`] pair, no custom type adapters beyond
//! what `serde` provides by default.

use crate::protocol::ParseError;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

/// Decodes JSON text into a generic string-keyed mapping.
///
/// Absent, empty, or blank input yields an empty mapping, not an error.
///
/// # Errors
///
/// [`ParseError::InvalidJson`] if the text does not parse, and
/// [`ParseError::UnexpectedRoot`] if it parses but the top level is not an
/// object.
pub fn parse_to_map(json: Option<&str>) -> Result<Map<String, Value>, ParseError> {
    let Some(text) = json else {
        return Ok(Map::new());
    };
    if text.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => {
            error!(kind = kind_of(&other), "json document does not decode to an object at the top level");
            Err(ParseError::unexpected_root(kind_of(&other)))
        }
    }
}

/// Encodes an arbitrary value to its JSON text form.
///
/// # Errors
///
/// Fails if `serde_json` cannot represent the value (for example a map with
/// non-string keys).
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_yields_an_empty_map() {
        assert!(parse_to_map(None).expect("none").is_empty());
        assert!(parse_to_map(Some("")).expect("empty").is_empty());
        assert!(parse_to_map(Some("   ")).expect("blank").is_empty());
        assert!(parse_to_map(Some("\t\r\n")).expect("whitespace").is_empty());
    }

    #[test]
    fn object_decodes_to_a_map() {
        let map = parse_to_map(Some("{\"a\":1}")).expect("parse");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn invalid_text_is_a_parse_error() {
        let result = parse_to_map(Some("{\"a\":"));
        assert!(matches!(result, Err(ParseError::InvalidJson { .. })));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let result = parse_to_map(Some("[1,2]"));
        assert!(matches!(result, Err(ParseError::UnexpectedRoot { kind: "an array" })));

        let result = parse_to_map(Some("42"));
        assert!(matches!(result, Err(ParseError::UnexpectedRoot { kind: "a number" })));
    }

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn serialize_uses_standard_json_rules() {
        let text = serialize(&Point { x: 1, y: 2 }).expect("serialize");
        assert_eq!(text, r#"{"x":1,"y":2}"#);

        let map = parse_to_map(Some(&text)).expect("round trip");
        assert_eq!(map.get("y"), Some(&serde_json::json!(2)));
    }
}
