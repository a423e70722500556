//! Parse the oracle's free-form reply into a verdict.
//!
//! The oracle is asked for bare JSON but routinely wraps it in prose. The
//! extraction step is deliberately best-effort: take the substring from the
//! first `{` to the last `}` and try to parse that. It is a known fragility
//! (nested prose braces can break it) kept as a named, isolated step so its
//! failure mode is a typed error that feeds the heuristic fallback.

use serde::Deserialize;

use super::types::{Confidence, InputKind, Method, Verdict, VerificationResult};
use super::OracleError;

/// Verdict object as the oracle reports it, before tagging with method and
/// input kind. Extended-schema fields are optional so the same shape covers
/// both prompt variants.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleVerdict {
    #[serde(rename = "veredicto")]
    pub verdict: Verdict,
    pub score: u8,
    #[serde(rename = "razonamiento", default)]
    pub reasoning: String,
    #[serde(rename = "fuenteCoincidente", default)]
    pub matched_source: Option<String>,
    #[serde(rename = "entidades_identificadas", default)]
    pub entities: Option<Vec<String>>,
    #[serde(rename = "categoria_verificada", default)]
    pub verified_category: Option<String>,
    #[serde(rename = "confianza_analisis", default)]
    pub confidence: Option<Confidence>,
}

impl OracleVerdict {
    /// Tag the oracle's verdict with provenance to form the final result.
    pub fn into_result(self, input_kind: InputKind) -> VerificationResult {
        VerificationResult {
            verdict: self.verdict,
            score: self.score,
            reasoning: self.reasoning,
            matched_source: self.matched_source,
            method: Method::Oracle,
            input_kind,
            entities: self.entities,
            verified_category: self.verified_category,
            confidence: self.confidence,
            metadata: None,
        }
    }
}

/// Locate the JSON object embedded in a free-form reply: first `{` through
/// last `}`. Returns an error (never panics) when no balanced pair exists.
pub fn extract_json_object(reply: &str) -> Result<&str, OracleError> {
    let start = reply
        .find('{')
        .ok_or_else(|| OracleError::MalformedReply("no JSON object in reply".into()))?;
    let end = reply
        .rfind('}')
        .ok_or_else(|| OracleError::MalformedReply("unterminated JSON object".into()))?;
    if end < start {
        return Err(OracleError::MalformedReply(
            "braces out of order in reply".into(),
        ));
    }
    Ok(&reply[start..=end])
}

/// Parse the extracted object into an `OracleVerdict`, rejecting scores
/// outside [0, 100].
pub fn parse_verdict(json_str: &str) -> Result<OracleVerdict, OracleError> {
    let verdict: OracleVerdict = serde_json::from_str(json_str)
        .map_err(|e| OracleError::JsonParsing(e.to_string()))?;
    if verdict.score > 100 {
        return Err(OracleError::MalformedReply(format!(
            "score {} out of range",
            verdict.score
        )));
    }
    Ok(verdict)
}
