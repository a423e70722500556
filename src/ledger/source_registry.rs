//! Source/trust registry client.
//!
//! Sources (outlets, agencies, authors) are keyed by an opaque address and
//! carry a trust score plus a type tag. Admin-gating is enforced by the
//! contract; this client just forwards the signer identity.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use super::rpc::RpcClient;
use super::types::{SourceInfo, SourceRegistration, SourceRegistryStats, TxReceipt};
use super::LedgerError;

#[async_trait]
pub trait SourceRegistry: Send + Sync {
    async fn register_source(
        &self,
        address: &str,
        registration: &SourceRegistration,
    ) -> Result<TxReceipt, LedgerError>;

    /// Whether the address is registered AND currently active.
    async fn verify_source(&self, address: &str) -> Result<bool, LedgerError>;

    /// Like `verify_source` but additionally requiring a minimum trust score.
    async fn verify_with_min_score(
        &self,
        address: &str,
        min_trust_score: u32,
    ) -> Result<bool, LedgerError>;

    async fn source_info(&self, address: &str) -> Result<SourceInfo, LedgerError>;

    async fn update_trust_score(
        &self,
        address: &str,
        new_trust_score: u32,
    ) -> Result<TxReceipt, LedgerError>;

    async fn deactivate(&self, address: &str) -> Result<TxReceipt, LedgerError>;

    async fn reactivate(&self, address: &str) -> Result<TxReceipt, LedgerError>;

    async fn register_batch(
        &self,
        sources: &[(String, SourceRegistration)],
    ) -> Result<TxReceipt, LedgerError>;

    async fn verify_batch(&self, addresses: &[String]) -> Result<Vec<bool>, LedgerError>;

    async fn stats(&self) -> Result<SourceRegistryStats, LedgerError>;
}

/// Production registry backed by the gateway RPC endpoint.
pub struct RpcSourceRegistry {
    rpc: RpcClient,
    contract: String,
    signer: String,
}

impl RpcSourceRegistry {
    pub fn new(rpc: RpcClient, contract: &str, signer: &str) -> Self {
        Self {
            rpc,
            contract: contract.to_string(),
            signer: signer.to_string(),
        }
    }

    fn write_params(&self, address: &str) -> serde_json::Value {
        json!({ "contract": self.contract, "from": self.signer, "address": address })
    }
}

#[async_trait]
impl SourceRegistry for RpcSourceRegistry {
    async fn register_source(
        &self,
        address: &str,
        registration: &SourceRegistration,
    ) -> Result<TxReceipt, LedgerError> {
        tracing::info!(address = %address, source_type = %registration.source_type, "registering source");
        self.rpc
            .call(
                "sources_register",
                json!({
                    "contract": self.contract,
                    "from": self.signer,
                    "address": address,
                    "metadata": registration.metadata,
                    "trustScore": registration.trust_score,
                    "sourceType": registration.source_type,
                }),
            )
            .await
    }

    async fn verify_source(&self, address: &str) -> Result<bool, LedgerError> {
        self.rpc
            .call(
                "sources_verify",
                json!({ "contract": self.contract, "address": address }),
            )
            .await
    }

    async fn verify_with_min_score(
        &self,
        address: &str,
        min_trust_score: u32,
    ) -> Result<bool, LedgerError> {
        self.rpc
            .call(
                "sources_verifyWithMinScore",
                json!({
                    "contract": self.contract,
                    "address": address,
                    "minTrustScore": min_trust_score,
                }),
            )
            .await
    }

    async fn source_info(&self, address: &str) -> Result<SourceInfo, LedgerError> {
        self.rpc
            .call(
                "sources_info",
                json!({ "contract": self.contract, "address": address }),
            )
            .await
    }

    async fn update_trust_score(
        &self,
        address: &str,
        new_trust_score: u32,
    ) -> Result<TxReceipt, LedgerError> {
        tracing::info!(address = %address, new_trust_score, "updating trust score");
        let mut params = self.write_params(address);
        params["newTrustScore"] = json!(new_trust_score);
        self.rpc.call("sources_updateTrustScore", params).await
    }

    async fn deactivate(&self, address: &str) -> Result<TxReceipt, LedgerError> {
        tracing::info!(address = %address, "deactivating source");
        self.rpc
            .call("sources_deactivate", self.write_params(address))
            .await
    }

    async fn reactivate(&self, address: &str) -> Result<TxReceipt, LedgerError> {
        tracing::info!(address = %address, "reactivating source");
        self.rpc
            .call("sources_reactivate", self.write_params(address))
            .await
    }

    async fn register_batch(
        &self,
        sources: &[(String, SourceRegistration)],
    ) -> Result<TxReceipt, LedgerError> {
        tracing::info!(count = sources.len(), "registering source batch");
        let entries: Vec<serde_json::Value> = sources
            .iter()
            .map(|(address, registration)| {
                json!({
                    "address": address,
                    "metadata": registration.metadata,
                    "trustScore": registration.trust_score,
                    "sourceType": registration.source_type,
                })
            })
            .collect();
        self.rpc
            .call(
                "sources_registerBatch",
                json!({ "contract": self.contract, "from": self.signer, "sources": entries }),
            )
            .await
    }

    async fn verify_batch(&self, addresses: &[String]) -> Result<Vec<bool>, LedgerError> {
        self.rpc
            .call(
                "sources_verifyBatch",
                json!({ "contract": self.contract, "addresses": addresses }),
            )
            .await
    }

    async fn stats(&self) -> Result<SourceRegistryStats, LedgerError> {
        self.rpc
            .call("sources_stats", json!({ "contract": self.contract }))
            .await
    }
}

/// In-memory registry for testing.
#[derive(Default)]
pub struct InMemorySourceRegistry {
    sources: Mutex<HashMap<String, SourceInfo>>,
}

impl InMemorySourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn receipt(block: u64) -> TxReceipt {
        TxReceipt {
            transaction_hash: format!("0xmocktx{block:04}"),
            block_number: block,
        }
    }

    fn missing(address: &str) -> LedgerError {
        LedgerError::Rpc {
            code: -32000,
            message: format!("source {address} not registered"),
        }
    }
}

#[async_trait]
impl SourceRegistry for InMemorySourceRegistry {
    async fn register_source(
        &self,
        address: &str,
        registration: &SourceRegistration,
    ) -> Result<TxReceipt, LedgerError> {
        let mut sources = self.sources.lock().expect("registry lock");
        let block = sources.len() as u64 + 1;
        sources.insert(
            address.to_string(),
            SourceInfo {
                registered: true,
                timestamp: 1_700_000_000 + block,
                registered_by: "0x0000000000000000000000000000000000000001".into(),
                metadata: registration.metadata.clone(),
                trust_score: registration.trust_score,
                source_type: registration.source_type.clone(),
                active: true,
            },
        );
        Ok(Self::receipt(block))
    }

    async fn verify_source(&self, address: &str) -> Result<bool, LedgerError> {
        let sources = self.sources.lock().expect("registry lock");
        Ok(sources.get(address).map(|s| s.active).unwrap_or(false))
    }

    async fn verify_with_min_score(
        &self,
        address: &str,
        min_trust_score: u32,
    ) -> Result<bool, LedgerError> {
        let sources = self.sources.lock().expect("registry lock");
        Ok(sources
            .get(address)
            .map(|s| s.active && s.trust_score >= min_trust_score)
            .unwrap_or(false))
    }

    async fn source_info(&self, address: &str) -> Result<SourceInfo, LedgerError> {
        let sources = self.sources.lock().expect("registry lock");
        sources
            .get(address)
            .cloned()
            .ok_or_else(|| Self::missing(address))
    }

    async fn update_trust_score(
        &self,
        address: &str,
        new_trust_score: u32,
    ) -> Result<TxReceipt, LedgerError> {
        let mut sources = self.sources.lock().expect("registry lock");
        let block = sources.len() as u64 + 1;
        let source = sources
            .get_mut(address)
            .ok_or_else(|| Self::missing(address))?;
        source.trust_score = new_trust_score;
        Ok(Self::receipt(block))
    }

    async fn deactivate(&self, address: &str) -> Result<TxReceipt, LedgerError> {
        let mut sources = self.sources.lock().expect("registry lock");
        let block = sources.len() as u64 + 1;
        let source = sources
            .get_mut(address)
            .ok_or_else(|| Self::missing(address))?;
        source.active = false;
        Ok(Self::receipt(block))
    }

    async fn reactivate(&self, address: &str) -> Result<TxReceipt, LedgerError> {
        let mut sources = self.sources.lock().expect("registry lock");
        let block = sources.len() as u64 + 1;
        let source = sources
            .get_mut(address)
            .ok_or_else(|| Self::missing(address))?;
        source.active = true;
        Ok(Self::receipt(block))
    }

    async fn register_batch(
        &self,
        sources: &[(String, SourceRegistration)],
    ) -> Result<TxReceipt, LedgerError> {
        let mut receipt = Self::receipt(0);
        for (address, registration) in sources {
            receipt = self.register_source(address, registration).await?;
        }
        Ok(receipt)
    }

    async fn verify_batch(&self, addresses: &[String]) -> Result<Vec<bool>, LedgerError> {
        let mut results = Vec::with_capacity(addresses.len());
        for address in addresses {
            results.push(self.verify_source(address).await?);
        }
        Ok(results)
    }

    async fn stats(&self) -> Result<SourceRegistryStats, LedgerError> {
        let sources = self.sources.lock().expect("registry lock");
        let active = sources.values().filter(|s| s.active).count() as u64;
        Ok(SourceRegistryStats {
            total_sources: sources.len() as u64,
            active_sources: active,
            total_admins: 1,
        })
    }
}
