//! Service router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! CORS is wide open: the public frontend is served from another origin.
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/verificar", post(endpoints::verify::verify))
        .route("/subir-a-blockchain", post(endpoints::hashes::anchor_manual))
        .route("/configurar-umbral", post(endpoints::admin::set_threshold))
        .route("/estadisticas", get(endpoints::admin::stats))
        .route("/registrar-hash", post(endpoints::hashes::anchor_manual))
        .route(
            "/verificar-integridad/:hash",
            get(endpoints::hashes::hash_lookup),
        )
        .route(
            "/verificar-integridad-contenido",
            post(endpoints::hashes::integrity_by_content),
        )
        .route(
            "/registrar-multiples-hashes",
            post(endpoints::hashes::register_batch),
        )
        .route(
            "/estadisticas-hash-registry",
            get(endpoints::hashes::registry_stats),
        )
        .route("/registrar-fuente", post(endpoints::sources::register))
        .route(
            "/verificar-fuente/:address",
            get(endpoints::sources::lookup),
        )
        .route(
            "/verificar-fuente-score",
            post(endpoints::sources::verify_with_score),
        )
        .route(
            "/actualizar-trust-score",
            post(endpoints::sources::update_trust_score),
        )
        .route("/desactivar-fuente", post(endpoints::sources::deactivate))
        .route("/reactivar-fuente", post(endpoints::sources::reactivate))
        .route(
            "/registrar-multiples-fuentes",
            post(endpoints::sources::register_batch),
        )
        .route(
            "/verificar-multiples-fuentes",
            post(endpoints::sources::verify_batch),
        )
        .route(
            "/estadisticas-source-registry",
            get(endpoints::sources::registry_stats),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::article::ArticleFetcher;
    use crate::ledger::{FailingHashRegistry, InMemoryHashRegistry, InMemorySourceRegistry};
    use crate::pipeline::{MockOracle, Verifier};

    fn state_with_oracle(oracle: MockOracle) -> AppState {
        AppState::new(
            Verifier::new(Box::new(oracle)),
            Arc::new(InMemoryHashRegistry::new()),
            Arc::new(InMemorySourceRegistry::new()),
            ArticleFetcher::new(5),
        )
    }

    /// State with the oracle down — everything goes through the heuristics.
    fn test_state() -> AppState {
        state_with_oracle(MockOracle::unreachable())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 65536).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn verify_plain_text_above_threshold_anchors() {
        let state = test_state();
        let app = build_router(state);

        let req = post_json(
            "/verificar",
            r#"{"noticiaTexto": "El gobierno confirmó la nueva ley"}"#,
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["veredicto"], "Posiblemente Verdadera");
        assert_eq!(json["score"], 70);
        assert_eq!(json["metodo"], "FALLBACK_SIMPLE");
        assert_eq!(json["tipo_input"], "TEXTO_SIMPLE");
        assert_eq!(json["subidoABlockchain"], true);
        assert_eq!(json["razonSubida"], "Score alto (70% >= 70%)");
        assert_eq!(json["blockchain"]["success"], true);
        assert!(json["blockchain"]["contentHash"].as_str().unwrap().starts_with("0x"));
    }

    #[tokio::test]
    async fn verify_low_score_does_not_anchor() {
        let app = build_router(test_state());

        let req = post_json("/verificar", r#"{"noticiaTexto": "Un milagro increíble"}"#);
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["veredicto"], "Posiblemente Falsa");
        assert_eq!(json["score"], 35);
        assert_eq!(json["subidoABlockchain"], false);
        assert_eq!(json["razonSubida"], "Score bajo (35% < 70%)");
        assert!(json.get("blockchain").is_none());
    }

    #[tokio::test]
    async fn verify_structured_payload_uses_structured_fallback() {
        let app = build_router(test_state());

        let req = post_json(
            "/verificar",
            r#"{"noticiaTexto": {"noticia": {
                "titular": "Gobierno presenta reforma",
                "fecha": "2025-01-15",
                "categoria": "Educación",
                "fuente": "ABI",
                "cuerpo": "El texto fue aprobado"
            }}}"#,
        );
        let response = app.oneshot(req).await.unwrap();
        let json = response_json(response).await;
        assert_eq!(json["metodo"], "FALLBACK_ESTRUCTURADO");
        assert_eq!(json["tipo_input"], "ESTRUCTURADA");
        assert_eq!(json["score"], 84);
        assert_eq!(json["fuenteCoincidente"], "ABI");
        assert_eq!(json["subidoABlockchain"], true);
        assert_eq!(json["metadata"]["categoria"], "Educación");
    }

    #[tokio::test]
    async fn verify_uses_oracle_verdict_when_available() {
        let app = build_router(state_with_oracle(MockOracle::replying(
            r#"{"veredicto": "Posiblemente Verdadera", "score": 92, "razonamiento": "Confirmado.", "fuenteCoincidente": null}"#,
        )));

        let req = post_json("/verificar", r#"{"noticiaTexto": "cualquier texto"}"#);
        let json = response_json(app.oneshot(req).await.unwrap()).await;
        assert_eq!(json["metodo"], "GROQ");
        assert_eq!(json["score"], 92);
        assert_eq!(json["subidoABlockchain"], true);
    }

    #[tokio::test]
    async fn verify_missing_field_is_a_client_error() {
        let app = build_router(test_state());
        let response = app.oneshot(post_json("/verificar", r#"{}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn anchoring_failure_is_a_subfield_not_a_request_failure() {
        let state = AppState::new(
            Verifier::new(Box::new(MockOracle::unreachable())),
            Arc::new(FailingHashRegistry),
            Arc::new(InMemorySourceRegistry::new()),
            ArticleFetcher::new(5),
        );
        let app = build_router(state);

        let req = post_json(
            "/verificar",
            r#"{"noticiaTexto": "El gobierno confirmó la nueva ley"}"#,
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["score"], 70);
        assert_eq!(json["subidoABlockchain"], false);
        assert_eq!(json["blockchain"]["success"], false);
        assert!(json["blockchain"]["error"].is_string());
        assert_eq!(
            json["razonSubida"],
            "Score alto (70% >= 70%) pero falló la subida"
        );
    }

    #[tokio::test]
    async fn verifying_same_content_twice_anchors_once() {
        let state = test_state();
        let body = r#"{"noticiaTexto": "El gobierno confirmó la nueva ley"}"#;

        let first = build_router(state.clone())
            .oneshot(post_json("/verificar", body))
            .await
            .unwrap();
        let first_json = response_json(first).await;
        assert_eq!(first_json["blockchain"]["alreadyAnchored"], false);

        let second = build_router(state)
            .oneshot(post_json("/verificar", body))
            .await
            .unwrap();
        let second_json = response_json(second).await;
        assert_eq!(second_json["subidoABlockchain"], true);
        assert_eq!(second_json["blockchain"]["alreadyAnchored"], true);
        // no second transaction was paid for
        assert!(second_json["blockchain"]["transactionHash"].is_null());
    }

    #[tokio::test]
    async fn threshold_endpoint_rejects_out_of_range_values() {
        for body in [r#"{"umbral": 150}"#, r#"{"umbral": -5}"#] {
            let app = build_router(test_state());
            let response = app
                .oneshot(post_json("/configurar-umbral", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let json = response_json(response).await;
            assert_eq!(json["error"]["code"], "BAD_REQUEST");
        }
    }

    #[tokio::test]
    async fn threshold_update_affects_subsequent_decisions() {
        let state = test_state();

        let set = build_router(state.clone())
            .oneshot(post_json("/configurar-umbral", r#"{"umbral": 90}"#))
            .await
            .unwrap();
        assert_eq!(set.status(), StatusCode::OK);
        let set_json = response_json(set).await;
        assert_eq!(set_json["umbral"], 90);
        assert_eq!(set_json["mensaje"], "Umbral configurado a 90%");

        // Score 84 < 90 → no longer anchored
        let req = post_json(
            "/verificar",
            r#"{"noticiaTexto": {"noticia": {
                "titular": "Gobierno presenta reforma",
                "fecha": "2025-01-15",
                "categoria": "Educación",
                "fuente": "ABI",
                "cuerpo": "El texto fue aprobado"
            }}}"#,
        );
        let json = response_json(
            build_router(state).oneshot(req).await.unwrap(),
        )
        .await;
        assert_eq!(json["score"], 84);
        assert_eq!(json["subidoABlockchain"], false);
        assert_eq!(json["razonSubida"], "Score bajo (84% < 90%)");
    }

    #[tokio::test]
    async fn stats_reports_current_threshold() {
        let state = test_state();
        state.threshold.set(55);
        let response = build_router(state).oneshot(get_req("/estadisticas")).await.unwrap();
        let json = response_json(response).await;
        assert_eq!(json["umbralActual"], 55);
        assert!(json["endpointsDisponibles"].as_array().unwrap().len() >= 10);
    }

    fn sample_result_json() -> &'static str {
        r#"{
            "veredicto": "Posiblemente Verdadera",
            "score": 88,
            "razonamiento": "Confirmado por fuentes oficiales.",
            "fuenteCoincidente": null,
            "metodo": "GROQ",
            "tipo_input": "TEXTO_SIMPLE"
        }"#
    }

    #[tokio::test]
    async fn manual_anchor_returns_outcome() {
        let app = build_router(test_state());
        let body = format!(
            r#"{{"noticiaTexto": "texto verificado", "resultadoVerificacion": {}}}"#,
            sample_result_json()
        );
        let response = app
            .oneshot(post_json("/subir-a-blockchain", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert!(json["transactionHash"].is_string());
    }

    #[tokio::test]
    async fn integrity_lookup_for_unknown_hash_reports_absent() {
        let app = build_router(test_state());
        let response = app
            .oneshot(get_req("/verificar-integridad/0xdeadbeef"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["existe"], false);
    }

    #[tokio::test]
    async fn integrity_by_content_finds_anchored_news() {
        let state = test_state();

        let verify_body = r#"{"noticiaTexto": "El gobierno confirmó la nueva ley"}"#;
        build_router(state.clone())
            .oneshot(post_json("/verificar", verify_body))
            .await
            .unwrap();

        let response = build_router(state)
            .oneshot(post_json(
                "/verificar-integridad-contenido",
                r#"{"noticiaTexto": "El gobierno confirmó la nueva ley"}"#,
            ))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["integridad"], true);
        assert!(json["metadata"].as_str().unwrap().contains("\"score\":70"));
    }

    #[tokio::test]
    async fn batch_hash_registration() {
        let app = build_router(test_state());
        let body = format!(
            r#"{{"noticias": [
                {{"texto": "noticia uno", "resultado": {r}}},
                {{"texto": "noticia dos", "resultado": {r}}}
            ]}}"#,
            r = sample_result_json()
        );
        let response = app
            .oneshot(post_json("/registrar-multiples-hashes", &body))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["hashesRegistrados"], 2);
        assert_eq!(json["hashes"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn hash_registry_stats_endpoint() {
        let app = build_router(test_state());
        let json = response_json(
            app.oneshot(get_req("/estadisticas-hash-registry")).await.unwrap(),
        )
        .await;
        assert_eq!(json["success"], true);
        assert_eq!(json["totalHashes"], 0);
    }

    #[tokio::test]
    async fn source_lifecycle_via_endpoints() {
        let state = test_state();

        let register = build_router(state.clone())
            .oneshot(post_json(
                "/registrar-fuente",
                r#"{"sourceAddress": "0xa1", "sourceInfo": {"metadata": "{\"nombre\":\"ABI\"}", "trustScore": 80, "sourceType": "agencia"}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(register.status(), StatusCode::OK);

        let lookup = response_json(
            build_router(state.clone())
                .oneshot(get_req("/verificar-fuente/0xa1"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(lookup["trustScore"], 80);
        assert_eq!(lookup["active"], true);

        let scored = response_json(
            build_router(state.clone())
                .oneshot(post_json(
                    "/verificar-fuente-score",
                    r#"{"sourceAddress": "0xa1", "minTrustScore": 90}"#,
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(scored["verificada"], false);

        build_router(state.clone())
            .oneshot(post_json(
                "/actualizar-trust-score",
                r#"{"sourceAddress": "0xa1", "nuevoTrustScore": 95}"#,
            ))
            .await
            .unwrap();

        let rescored = response_json(
            build_router(state.clone())
                .oneshot(post_json(
                    "/verificar-fuente-score",
                    r#"{"sourceAddress": "0xa1", "minTrustScore": 90}"#,
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(rescored["verificada"], true);

        build_router(state.clone())
            .oneshot(post_json(
                "/desactivar-fuente",
                r#"{"sourceAddress": "0xa1"}"#,
            ))
            .await
            .unwrap();
        let after_deactivate = response_json(
            build_router(state)
                .oneshot(post_json(
                    "/verificar-multiples-fuentes",
                    r#"{"sourceAddresses": ["0xa1", "0xa2"]}"#,
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(after_deactivate["resultados"][0], false);
        assert_eq!(after_deactivate["resultados"][1], false);
    }

    #[tokio::test]
    async fn unknown_source_lookup_maps_to_502() {
        let app = build_router(test_state());
        let response = app
            .oneshot(get_req("/verificar-fuente/0xnadie"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "LEDGER_UNAVAILABLE");
    }

    #[tokio::test]
    async fn source_registry_stats_endpoint() {
        let json = response_json(
            build_router(test_state())
                .oneshot(get_req("/estadisticas-source-registry"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(json["success"], true);
        assert_eq!(json["totalSources"], 0);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = build_router(test_state());
        let response = app.oneshot(get_req("/no-existe")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
