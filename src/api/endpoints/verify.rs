//! `POST /verificar` — the primary verification endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::anchoring::gate;
use crate::api::error::ApiError;
use crate::api::types::{VerifyRequest, VerifyResponse};
use crate::state::AppState;

/// Verify a news item and, when the score clears the threshold, anchor the
/// verdict. The verdict is returned even when anchoring fails — the ledger
/// outcome is a sub-field, never the request's fate.
pub async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let raw = resolve_input(&state, &request.news_text).await?;

    let result = state.verifier.verify(&raw).await;

    let decision = gate::decide(result.score, state.threshold.get());
    if !decision.should_anchor {
        tracing::info!(score = result.score, threshold = decision.threshold_used, "below anchoring threshold");
        return Ok(Json(VerifyResponse {
            result,
            blockchain: None,
            anchored: false,
            anchor_reason: decision.reason,
        }));
    }

    tracing::info!(score = result.score, threshold = decision.threshold_used, "anchoring verdict");
    let content = anchoring_content(&raw);
    let outcome = state.anchoring.anchor(&content, &result).await;
    let anchored = outcome.success;
    let anchor_reason = if anchored {
        decision.reason
    } else {
        format!("{} pero falló la subida", decision.reason)
    };

    Ok(Json(VerifyResponse {
        result,
        blockchain: Some(outcome),
        anchored,
        anchor_reason,
    }))
}

/// URL inputs are replaced by the fetched article text before classification.
async fn resolve_input(state: &AppState, news_text: &Value) -> Result<Value, ApiError> {
    match news_text.as_str() {
        Some(text) if text.starts_with("http") => {
            let article = state.articles.fetch(text).await?;
            Ok(Value::String(article))
        }
        _ => Ok(news_text.clone()),
    }
}

/// The content string that gets fingerprinted: the text itself for string
/// inputs, the compact JSON rendering for structured objects.
fn anchoring_content(raw: &Value) -> String {
    match raw {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn anchoring_content_keeps_strings_verbatim() {
        assert_eq!(anchoring_content(&json!("texto")), "texto");
    }

    #[test]
    fn anchoring_content_serializes_objects() {
        let content = anchoring_content(&json!({"noticia": {"titular": "t"}}));
        assert_eq!(content, r#"{"noticia":{"titular":"t"}}"#);
    }
}
