//! Record extractor: normalizes a classified structured payload into a fully
//! populated `NewsRecord`.

use serde_json::Value;

use super::types::{
    NewsRecord, NO_AUTHOR, NO_CATEGORY, NO_DATE, NO_HEADLINE, NO_LOCATION, NO_SOURCE,
};

/// Build a `NewsRecord` from a structured payload, unwrapping an optional
/// `noticia` wrapper key. Every field gets its sentinel default so downstream
/// scoring never sees a missing value. Pure, no side effects.
pub fn extract(payload: &Value) -> NewsRecord {
    let news = payload.get("noticia").unwrap_or(payload);

    NewsRecord {
        headline: str_field(news, "titular", NO_HEADLINE),
        date: str_field(news, "fecha", NO_DATE),
        author: str_field(news, "autor", NO_AUTHOR),
        location: str_field(news, "lugar", NO_LOCATION),
        category: str_field(news, "categoria", NO_CATEGORY),
        source: str_field(news, "fuente", NO_SOURCE),
        body: str_field(news, "cuerpo", ""),
        semantic_analysis: news
            .get("analisis_semantico")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default(),
    }
}

/// Read a string field, treating missing, non-string, and empty values as
/// absent (the upstream contract used falsy checks).
fn str_field(news: &Value, key: &str, default: &str) -> String {
    news.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}
