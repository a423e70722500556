//! Process configuration, loaded once at startup from the environment.
//!
//! Every collaborator credential is required: a missing variable is a fatal
//! startup condition, not something the pipeline discovers mid-request.

use std::net::SocketAddr;

use thiserror::Error;

pub const APP_NAME: &str = "Certeza";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GROQ_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LEDGER_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,certeza=debug"
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{0} is not configured")]
    Missing(&'static str),

    #[error("{0} is not a valid number: {1}")]
    InvalidNumber(&'static str, String),

    #[error("{0} is not a valid socket address: {1}")]
    InvalidAddr(&'static str, String),
}

/// Immutable process settings. The anchoring threshold is deliberately NOT
/// here: it is runtime-mutable state owned by `state::ThresholdCell`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub groq_model: String,
    pub oracle_timeout_secs: u64,
    pub rpc_url: String,
    pub signer_key: String,
    pub hash_registry_address: String,
    pub source_registry_address: String,
    pub ledger_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary lookup (tests pass closures instead
    /// of mutating the process environment).
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let required = |key: &'static str| lookup(key).ok_or(SettingsError::Missing(key));
        let numeric = |key: &'static str, default: u64| match lookup(key) {
            Some(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidNumber(key, raw)),
            None => Ok(default),
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| SettingsError::InvalidAddr("BIND_ADDR", bind_raw))?;

        Ok(Self {
            bind_addr,
            groq_api_key: required("GROQ_API_KEY")?,
            groq_api_url: lookup("GROQ_API_URL")
                .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
            groq_model: lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            oracle_timeout_secs: numeric("ORACLE_TIMEOUT_SECS", DEFAULT_ORACLE_TIMEOUT_SECS)?,
            rpc_url: required("RPC_URL")?,
            signer_key: required("SIGNER_KEY")?,
            hash_registry_address: required("HASH_REGISTRY_ADDRESS")?,
            source_registry_address: required("SOURCE_REGISTRY_ADDRESS")?,
            ledger_timeout_secs: numeric("LEDGER_TIMEOUT_SECS", DEFAULT_LEDGER_TIMEOUT_SECS)?,
        })
    }
}
