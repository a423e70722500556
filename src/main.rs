use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use certeza::article::ArticleFetcher;
use certeza::config::{self, Settings};
use certeza::ledger::{HashRegistry, RpcClient, RpcHashRegistry, RpcSourceRegistry, SourceRegistry};
use certeza::pipeline::{GroqClient, Verifier};
use certeza::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let oracle = GroqClient::new(
        &settings.groq_api_url,
        &settings.groq_api_key,
        &settings.groq_model,
        settings.oracle_timeout_secs,
    );
    tracing::info!(model = %settings.groq_model, "oracle client ready");

    // Collaborators are built once and injected; handlers share them.
    let rpc = RpcClient::new(&settings.rpc_url, settings.ledger_timeout_secs);
    let hash_registry: Arc<dyn HashRegistry> = Arc::new(RpcHashRegistry::new(
        rpc.clone(),
        &settings.hash_registry_address,
        &settings.signer_key,
    ));
    let source_registry: Arc<dyn SourceRegistry> = Arc::new(RpcSourceRegistry::new(
        rpc,
        &settings.source_registry_address,
        &settings.signer_key,
    ));

    let state = AppState::new(
        Verifier::new(Box::new(oracle)),
        hash_registry,
        source_registry,
        ArticleFetcher::new(settings.oracle_timeout_secs),
    );

    let app = certeza::api::build_router(state);

    let listener = match tokio::net::TcpListener::bind(settings.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %settings.bind_addr, error = %e, "could not bind");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %settings.bind_addr, "listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
