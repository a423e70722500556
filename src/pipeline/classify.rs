//! Structure classifier: decides whether raw input is a structured news
//! record or free text.
//!
//! Classification is total. JSON parse failures and shape-test failures are
//! negative signals that route to `PlainText`, never errors.

use serde_json::{Map, Value};

use super::types::InputKind;

/// Raw input after shape classification, before extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// A JSON object carrying a news record (possibly under a `noticia` key).
    Structured(Value),
    /// Anything else, kept as the text to score.
    PlainText(String),
}

impl Classified {
    pub fn kind(&self) -> InputKind {
        match self {
            Classified::Structured(_) => InputKind::Structured,
            Classified::PlainText(_) => InputKind::PlainText,
        }
    }
}

/// Classify a raw request payload.
///
/// Strings are tentatively parsed as JSON and promoted to `Structured` when
/// the parse succeeds and the object has the news shape; otherwise the
/// ORIGINAL string is the plain-text content. Non-string, non-object values
/// are scored as their compact JSON rendering.
pub fn classify(input: &Value) -> Classified {
    match input {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) if is_news_object(&parsed) => Classified::Structured(parsed),
            _ => Classified::PlainText(text.clone()),
        },
        Value::Object(_) if is_news_object(input) => Classified::Structured(input.clone()),
        other => Classified::PlainText(other.to_string()),
    }
}

fn is_news_object(value: &Value) -> bool {
    match value.as_object() {
        Some(map) => has_news_shape(map),
        None => false,
    }
}

/// An object has the news shape if it wraps a record under `noticia`, or
/// itself carries the record's identifying fields.
fn has_news_shape(map: &Map<String, Value>) -> bool {
    map.contains_key("noticia") || map.contains_key("titular") || map.contains_key("cuerpo")
}
