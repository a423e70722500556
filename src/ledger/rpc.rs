//! Minimal JSON-RPC 2.0 client shared by both registry wrappers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::LedgerError;

/// JSON-RPC client bound to one gateway endpoint.
#[derive(Clone)]
pub struct RpcClient {
    endpoint: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

#[derive(Serialize)]
struct RpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl RpcClient {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one RPC call and decode its `result`.
    pub async fn call<P, T>(&self, method: &str, params: P) -> Result<T, LedgerError>
    where
        P: Serialize + Send,
        T: DeserializeOwned,
    {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LedgerError::Unreachable(self.endpoint.clone())
                } else if e.is_timeout() {
                    LedgerError::Timeout(self.timeout_secs)
                } else {
                    LedgerError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| LedgerError::Decode(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(LedgerError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        parsed
            .result
            .ok_or_else(|| LedgerError::Decode("RPC response had neither result nor error".into()))
    }
}
