//! Threshold configuration and service statistics.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{StatsResponse, ThresholdRequest, ThresholdResponse};
use crate::state::AppState;

/// `POST /configurar-umbral` — set the anchoring threshold at runtime.
/// Takes effect for subsequent decisions, never retroactively; resets to the
/// default on restart.
pub async fn set_threshold(
    State(state): State<AppState>,
    Json(request): Json<ThresholdRequest>,
) -> Result<Json<ThresholdResponse>, ApiError> {
    if !(0..=100).contains(&request.umbral) {
        return Err(ApiError::BadRequest(
            "El umbral debe ser un número entre 0 y 100".into(),
        ));
    }

    let threshold = request.umbral as u8;
    state.threshold.set(threshold);
    tracing::info!(threshold, "anchoring threshold updated");

    Ok(Json(ThresholdResponse {
        mensaje: format!("Umbral configurado a {threshold}%"),
        umbral: threshold,
    }))
}

/// `GET /estadisticas` — current threshold and endpoint catalog.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        current_threshold: state.threshold.get(),
        available_endpoints: vec![
            "POST /verificar - Verificar noticia (ancla automáticamente si score >= umbral)",
            "POST /subir-a-blockchain - Subir verificación manual a blockchain",
            "POST /configurar-umbral - Configurar umbral de score",
            "GET /estadisticas - Obtener estadísticas",
            "POST /registrar-hash - Registrar hash de noticia para integridad",
            "GET /verificar-integridad/:hash - Verificar integridad por hash",
            "POST /verificar-integridad-contenido - Verificar integridad por contenido",
            "POST /registrar-multiples-hashes - Registrar múltiples hashes",
            "GET /estadisticas-hash-registry - Estadísticas del hash registry",
            "POST /registrar-fuente - Registrar fuente/autor confiable",
            "GET /verificar-fuente/:address - Verificar fuente por dirección",
            "POST /verificar-fuente-score - Verificar fuente con score mínimo",
            "POST /actualizar-trust-score - Actualizar trust score de fuente",
            "POST /desactivar-fuente - Desactivar fuente",
            "POST /reactivar-fuente - Reactivar fuente",
            "POST /registrar-multiples-fuentes - Registrar múltiples fuentes",
            "POST /verificar-multiples-fuentes - Verificar múltiples fuentes",
            "GET /estadisticas-source-registry - Estadísticas del source registry",
        ],
    })
}
