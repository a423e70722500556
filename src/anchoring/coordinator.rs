//! Ledger anchoring coordinator.
//!
//! Computes the content fingerprint, checks the registry before registering
//! (anchoring is idempotent by content), and reports the outcome without ever
//! failing the request: the verdict was already computed and is returned
//! regardless of what the ledger does.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::ledger::{HashRegistry, TxReceipt};
use crate::pipeline::VerificationResult;

/// Max characters of content echoed into the on-chain metadata blob.
const METADATA_EXCERPT_CHARS: usize = 200;

/// SHA-256 fingerprint of the content, `0x`-prefixed lowercase hex.
pub fn content_fingerprint(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut out = String::with_capacity(2 + digest.len() * 2);
    out.push_str("0x");
    for byte in digest {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Metadata blob stored next to the hash: a content excerpt plus the verdict
/// provenance, serialized as JSON.
pub fn anchor_metadata(content: &str, result: &VerificationResult) -> String {
    let excerpt: String = content.chars().take(METADATA_EXCERPT_CHARS).collect();
    serde_json::json!({
        "noticiaTexto": excerpt,
        "veredicto": result.verdict,
        "score": result.score,
        "metodo": result.method,
        "tipo_input": result.input_kind,
        "timestamp": Utc::now().timestamp_millis(),
    })
    .to_string()
}

/// Outcome of one anchoring attempt. `success: false` carries the error text;
/// it is reported as a sub-field of the response, never as a request failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorOutcome {
    pub success: bool,
    #[serde(rename = "contentHash")]
    pub content_hash: String,
    #[serde(rename = "alreadyAnchored", default)]
    pub already_anchored: bool,
    #[serde(
        rename = "transactionHash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_hash: Option<String>,
    #[serde(rename = "blockNumber", default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnchorOutcome {
    fn registered(content_hash: String, receipt: TxReceipt) -> Self {
        Self {
            success: true,
            content_hash,
            already_anchored: false,
            transaction_hash: Some(receipt.transaction_hash),
            block_number: Some(receipt.block_number),
            error: None,
        }
    }

    fn already_anchored(content_hash: String) -> Self {
        Self {
            success: true,
            content_hash,
            already_anchored: true,
            transaction_hash: None,
            block_number: None,
            error: None,
        }
    }

    fn failed(content_hash: String, error: String) -> Self {
        Self {
            success: false,
            content_hash,
            already_anchored: false,
            transaction_hash: None,
            block_number: None,
            error: Some(error),
        }
    }
}

/// Anchors verification verdicts in the hash registry. One instance is built
/// at startup and shared by the automatic and manual anchoring paths.
pub struct AnchoringCoordinator {
    registry: Arc<dyn HashRegistry>,
}

impl AnchoringCoordinator {
    pub fn new(registry: Arc<dyn HashRegistry>) -> Self {
        Self { registry }
    }

    /// Anchor one verdict. Check-then-register: a fingerprint already in the
    /// registry is reported as success without a second transaction.
    pub async fn anchor(&self, content: &str, result: &VerificationResult) -> AnchorOutcome {
        let hash = content_fingerprint(content);

        match self.registry.hash_exists(&hash).await {
            Ok(true) => {
                tracing::info!(hash = %hash, "content already anchored, skipping registration");
                return AnchorOutcome::already_anchored(hash);
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!(hash = %hash, error = %e, "anchoring lookup failed");
                return AnchorOutcome::failed(hash, e.to_string());
            }
        }

        let metadata = anchor_metadata(content, result);
        match self.registry.register_hash(&hash, &metadata).await {
            Ok(receipt) => {
                tracing::info!(
                    hash = %hash,
                    tx = %receipt.transaction_hash,
                    block = receipt.block_number,
                    "verdict anchored"
                );
                AnchorOutcome::registered(hash, receipt)
            }
            Err(e) => {
                tracing::error!(hash = %hash, error = %e, "anchoring registration failed");
                AnchorOutcome::failed(hash, e.to_string())
            }
        }
    }
}
