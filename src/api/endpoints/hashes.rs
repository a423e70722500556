//! Hash-registry endpoints: manual anchoring, integrity lookups, batches.

use axum::extract::{Path, State};
use axum::Json;

use crate::anchoring::{anchor_metadata, content_fingerprint, AnchorOutcome};
use crate::api::error::ApiError;
use crate::api::types::{
    BatchHashRequest, BatchHashResponse, ContentRequest, IntegrityResponse, ManualAnchorRequest,
    SuccessBody,
};
use crate::ledger::{HashBatchEntry, HashInfo, HashRegistryStats};
use crate::state::AppState;

/// `POST /subir-a-blockchain` and `POST /registrar-hash` — anchor an already
/// computed verdict. Goes through the coordinator, so re-anchoring known
/// content reports `alreadyAnchored` instead of paying for a second
/// transaction.
pub async fn anchor_manual(
    State(state): State<AppState>,
    Json(request): Json<ManualAnchorRequest>,
) -> Json<AnchorOutcome> {
    Json(state.anchoring.anchor(&request.news_text, &request.result).await)
}

/// `GET /verificar-integridad/:hash` — stored record for a hash.
pub async fn hash_lookup(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<SuccessBody<HashInfo>>, ApiError> {
    let info = state.hash_registry.hash_info(&hash).await?;
    Ok(Json(SuccessBody::new(info)))
}

/// `POST /verificar-integridad-contenido` — integrity check by content:
/// fingerprint the text and look that up.
pub async fn integrity_by_content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<SuccessBody<IntegrityResponse>>, ApiError> {
    let hash = content_fingerprint(&request.news_text);
    let info = state.hash_registry.hash_info(&hash).await?;
    Ok(Json(SuccessBody::new(IntegrityResponse {
        intact: info.exists,
        hash,
        timestamp: info.timestamp,
        registrant: info.registrant,
        metadata: info.metadata,
    })))
}

/// `POST /registrar-multiples-hashes` — register a batch in one transaction.
pub async fn register_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchHashRequest>,
) -> Result<Json<SuccessBody<BatchHashResponse>>, ApiError> {
    let entries: Vec<HashBatchEntry> = request
        .items
        .iter()
        .map(|item| HashBatchEntry {
            hash: content_fingerprint(&item.texto),
            metadata: anchor_metadata(&item.texto, &item.resultado),
        })
        .collect();

    let receipt = state.hash_registry.register_batch(&entries).await?;
    let hashes: Vec<String> = entries.into_iter().map(|e| e.hash).collect();

    Ok(Json(SuccessBody::new(BatchHashResponse {
        receipt,
        registered: hashes.len(),
        hashes,
    })))
}

/// `GET /estadisticas-hash-registry`
pub async fn registry_stats(
    State(state): State<AppState>,
) -> Result<Json<SuccessBody<HashRegistryStats>>, ApiError> {
    let stats = state.hash_registry.stats().await?;
    Ok(Json(SuccessBody::new(stats)))
}
