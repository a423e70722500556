//! Source-registry endpoints: trusted outlets/authors keyed by address.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{
    BatchSourcesRequest, BatchVerifyResponse, BatchVerifySourcesRequest, RegisterSourceRequest,
    SourceAddressRequest, SuccessBody, UpdateTrustScoreRequest, VerifiedResponse,
    VerifySourceScoreRequest,
};
use crate::ledger::{SourceInfo, SourceRegistration, SourceRegistryStats, TxReceipt};
use crate::state::AppState;

/// `POST /registrar-fuente`
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterSourceRequest>,
) -> Result<Json<SuccessBody<TxReceipt>>, ApiError> {
    let receipt = state
        .source_registry
        .register_source(&request.address, &request.info)
        .await?;
    Ok(Json(SuccessBody::new(receipt)))
}

/// `GET /verificar-fuente/:address`
pub async fn lookup(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<SuccessBody<SourceInfo>>, ApiError> {
    let info = state.source_registry.source_info(&address).await?;
    Ok(Json(SuccessBody::new(info)))
}

/// `POST /verificar-fuente-score` — active AND at or above the given score.
pub async fn verify_with_score(
    State(state): State<AppState>,
    Json(request): Json<VerifySourceScoreRequest>,
) -> Result<Json<SuccessBody<VerifiedResponse>>, ApiError> {
    let verified = state
        .source_registry
        .verify_with_min_score(&request.address, request.min_trust_score)
        .await?;
    Ok(Json(SuccessBody::new(VerifiedResponse { verified })))
}

/// `POST /actualizar-trust-score`
pub async fn update_trust_score(
    State(state): State<AppState>,
    Json(request): Json<UpdateTrustScoreRequest>,
) -> Result<Json<SuccessBody<TxReceipt>>, ApiError> {
    let receipt = state
        .source_registry
        .update_trust_score(&request.address, request.new_trust_score)
        .await?;
    Ok(Json(SuccessBody::new(receipt)))
}

/// `POST /desactivar-fuente`
pub async fn deactivate(
    State(state): State<AppState>,
    Json(request): Json<SourceAddressRequest>,
) -> Result<Json<SuccessBody<TxReceipt>>, ApiError> {
    let receipt = state.source_registry.deactivate(&request.address).await?;
    Ok(Json(SuccessBody::new(receipt)))
}

/// `POST /reactivar-fuente`
pub async fn reactivate(
    State(state): State<AppState>,
    Json(request): Json<SourceAddressRequest>,
) -> Result<Json<SuccessBody<TxReceipt>>, ApiError> {
    let receipt = state.source_registry.reactivate(&request.address).await?;
    Ok(Json(SuccessBody::new(receipt)))
}

/// `POST /registrar-multiples-fuentes`
pub async fn register_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchSourcesRequest>,
) -> Result<Json<SuccessBody<TxReceipt>>, ApiError> {
    let sources: Vec<(String, SourceRegistration)> = request
        .sources
        .into_iter()
        .map(|s| (s.address, s.info))
        .collect();
    let receipt = state.source_registry.register_batch(&sources).await?;
    Ok(Json(SuccessBody::new(receipt)))
}

/// `POST /verificar-multiples-fuentes`
pub async fn verify_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchVerifySourcesRequest>,
) -> Result<Json<SuccessBody<BatchVerifyResponse>>, ApiError> {
    let results = state.source_registry.verify_batch(&request.addresses).await?;
    Ok(Json(SuccessBody::new(BatchVerifyResponse { results })))
}

/// `GET /estadisticas-source-registry`
pub async fn registry_stats(
    State(state): State<AppState>,
) -> Result<Json<SuccessBody<SourceRegistryStats>>, ApiError> {
    let stats = state.source_registry.stats().await?;
    Ok(Json(SuccessBody::new(stats)))
}
