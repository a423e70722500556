//! Request/response bodies for the HTTP surface.
//!
//! Field names follow the platform's existing Spanish wire contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::anchoring::AnchorOutcome;
use crate::ledger::{SourceRegistration, TxReceipt};
use crate::pipeline::VerificationResult;

/// Body of `POST /verificar`. `noticiaTexto` may be a URL, a JSON string, a
/// plain-text string, or a structured object — the classifier sorts it out.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(rename = "noticiaTexto")]
    pub news_text: Value,
}

/// Verdict plus anchoring outcome returned by `POST /verificar`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    #[serde(flatten)]
    pub result: VerificationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<AnchorOutcome>,
    #[serde(rename = "subidoABlockchain")]
    pub anchored: bool,
    #[serde(rename = "razonSubida")]
    pub anchor_reason: String,
}

/// Body of the manual anchoring and hash-registration endpoints.
#[derive(Debug, Deserialize)]
pub struct ManualAnchorRequest {
    #[serde(rename = "noticiaTexto")]
    pub news_text: String,
    #[serde(rename = "resultadoVerificacion")]
    pub result: VerificationResult,
}

#[derive(Debug, Deserialize)]
pub struct ThresholdRequest {
    /// Deserialized as i64 so out-of-range and negative values reach our
    /// validation instead of failing opaquely in serde.
    pub umbral: i64,
}

#[derive(Debug, Serialize)]
pub struct ThresholdResponse {
    pub mensaje: String,
    pub umbral: u8,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "umbralActual")]
    pub current_threshold: u8,
    #[serde(rename = "endpointsDisponibles")]
    pub available_endpoints: Vec<&'static str>,
}

/// Generic `{ "success": true, ...data }` envelope used by the registry
/// endpoints, mirroring the wrapper every ledger response carries.
#[derive(Debug, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    #[serde(rename = "noticiaTexto")]
    pub news_text: String,
}

/// Integrity check keyed by content rather than hash.
#[derive(Debug, Serialize)]
pub struct IntegrityResponse {
    #[serde(rename = "integridad")]
    pub intact: bool,
    pub hash: String,
    pub timestamp: u64,
    #[serde(rename = "registrador")]
    pub registrant: String,
    pub metadata: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchHashRequest {
    #[serde(rename = "noticias")]
    pub items: Vec<BatchHashItem>,
}

#[derive(Debug, Deserialize)]
pub struct BatchHashItem {
    pub texto: String,
    pub resultado: VerificationResult,
}

#[derive(Debug, Serialize)]
pub struct BatchHashResponse {
    #[serde(flatten)]
    pub receipt: TxReceipt,
    #[serde(rename = "hashesRegistrados")]
    pub registered: usize,
    pub hashes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterSourceRequest {
    #[serde(rename = "sourceAddress")]
    pub address: String,
    #[serde(rename = "sourceInfo")]
    pub info: SourceRegistration,
}

#[derive(Debug, Deserialize)]
pub struct SourceAddressRequest {
    #[serde(rename = "sourceAddress")]
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifySourceScoreRequest {
    #[serde(rename = "sourceAddress")]
    pub address: String,
    #[serde(rename = "minTrustScore")]
    pub min_trust_score: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTrustScoreRequest {
    #[serde(rename = "sourceAddress")]
    pub address: String,
    #[serde(rename = "nuevoTrustScore")]
    pub new_trust_score: u32,
}

#[derive(Debug, Deserialize)]
pub struct BatchSourcesRequest {
    #[serde(rename = "fuentes")]
    pub sources: Vec<RegisterSourceRequest>,
}

#[derive(Debug, Deserialize)]
pub struct BatchVerifySourcesRequest {
    #[serde(rename = "sourceAddresses")]
    pub addresses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifiedResponse {
    #[serde(rename = "verificada")]
    pub verified: bool,
}

#[derive(Debug, Serialize)]
pub struct BatchVerifyResponse {
    #[serde(rename = "resultados")]
    pub results: Vec<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_accepts_string_and_object() {
        let from_string: VerifyRequest =
            serde_json::from_str(r#"{"noticiaTexto": "texto plano"}"#).unwrap();
        assert!(from_string.news_text.is_string());

        let from_object: VerifyRequest =
            serde_json::from_str(r#"{"noticiaTexto": {"noticia": {"titular": "t"}}}"#)
                .unwrap();
        assert!(from_object.news_text.is_object());
    }

    #[test]
    fn success_body_flattens_payload() {
        let body = SuccessBody::new(VerifiedResponse { verified: true });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["verificada"], true);
    }

    #[test]
    fn threshold_request_accepts_negative_numbers() {
        // Validation happens in the handler; deserialization must not lose
        // the out-of-range value.
        let req: ThresholdRequest = serde_json::from_str(r#"{"umbral": -5}"#).unwrap();
        assert_eq!(req.umbral, -5);
    }
}
