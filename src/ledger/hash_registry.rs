//! News-hash registry client.
//!
//! The registry is the append-only contract that anchors content
//! fingerprints. One long-lived instance is built at startup and shared by
//! every handler.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use super::rpc::RpcClient;
use super::types::{HashBatchEntry, HashInfo, HashRegistryStats, TxReceipt};
use super::LedgerError;

#[async_trait]
pub trait HashRegistry: Send + Sync {
    /// Register one content hash with its metadata blob.
    async fn register_hash(&self, hash: &str, metadata: &str) -> Result<TxReceipt, LedgerError>;

    /// Whether a hash is already registered.
    async fn hash_exists(&self, hash: &str) -> Result<bool, LedgerError>;

    /// Full stored record for a hash (an absent record for unknown hashes).
    async fn hash_info(&self, hash: &str) -> Result<HashInfo, LedgerError>;

    /// Register several hashes in one transaction.
    async fn register_batch(&self, entries: &[HashBatchEntry]) -> Result<TxReceipt, LedgerError>;

    async fn stats(&self) -> Result<HashRegistryStats, LedgerError>;
}

/// Production registry backed by the gateway RPC endpoint.
pub struct RpcHashRegistry {
    rpc: RpcClient,
    contract: String,
    signer: String,
}

impl RpcHashRegistry {
    pub fn new(rpc: RpcClient, contract: &str, signer: &str) -> Self {
        Self {
            rpc,
            contract: contract.to_string(),
            signer: signer.to_string(),
        }
    }
}

#[async_trait]
impl HashRegistry for RpcHashRegistry {
    async fn register_hash(&self, hash: &str, metadata: &str) -> Result<TxReceipt, LedgerError> {
        tracing::info!(hash = %hash, "registering news hash");
        self.rpc
            .call(
                "newshash_register",
                json!({
                    "contract": self.contract,
                    "from": self.signer,
                    "hash": hash,
                    "metadata": metadata,
                }),
            )
            .await
    }

    async fn hash_exists(&self, hash: &str) -> Result<bool, LedgerError> {
        self.rpc
            .call(
                "newshash_exists",
                json!({ "contract": self.contract, "hash": hash }),
            )
            .await
    }

    async fn hash_info(&self, hash: &str) -> Result<HashInfo, LedgerError> {
        self.rpc
            .call(
                "newshash_info",
                json!({ "contract": self.contract, "hash": hash }),
            )
            .await
    }

    async fn register_batch(&self, entries: &[HashBatchEntry]) -> Result<TxReceipt, LedgerError> {
        tracing::info!(count = entries.len(), "registering hash batch");
        self.rpc
            .call(
                "newshash_registerBatch",
                json!({
                    "contract": self.contract,
                    "from": self.signer,
                    "entries": entries,
                }),
            )
            .await
    }

    async fn stats(&self) -> Result<HashRegistryStats, LedgerError> {
        self.rpc
            .call("newshash_stats", json!({ "contract": self.contract }))
            .await
    }
}

/// In-memory registry for testing — same observable contract, no network.
#[derive(Default)]
pub struct InMemoryHashRegistry {
    entries: Mutex<HashMap<String, HashInfo>>,
}

impl InMemoryHashRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered hashes (test assertions).
    pub fn len(&self) -> usize {
        self.entries.lock().expect("registry lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn receipt(block: u64) -> TxReceipt {
        TxReceipt {
            transaction_hash: format!("0xmocktx{block:04}"),
            block_number: block,
        }
    }
}

#[async_trait]
impl HashRegistry for InMemoryHashRegistry {
    async fn register_hash(&self, hash: &str, metadata: &str) -> Result<TxReceipt, LedgerError> {
        let mut entries = self.entries.lock().expect("registry lock");
        let block = entries.len() as u64 + 1;
        entries.insert(
            hash.to_string(),
            HashInfo {
                exists: true,
                timestamp: 1_700_000_000 + block,
                registrant: "0x0000000000000000000000000000000000000001".into(),
                metadata: metadata.to_string(),
            },
        );
        Ok(Self::receipt(block))
    }

    async fn hash_exists(&self, hash: &str) -> Result<bool, LedgerError> {
        Ok(self.entries.lock().expect("registry lock").contains_key(hash))
    }

    async fn hash_info(&self, hash: &str) -> Result<HashInfo, LedgerError> {
        Ok(self
            .entries
            .lock()
            .expect("registry lock")
            .get(hash)
            .cloned()
            .unwrap_or_else(HashInfo::absent))
    }

    async fn register_batch(&self, entries: &[HashBatchEntry]) -> Result<TxReceipt, LedgerError> {
        let mut stored = self.entries.lock().expect("registry lock");
        let block = stored.len() as u64 + 1;
        for entry in entries {
            stored.insert(
                entry.hash.clone(),
                HashInfo {
                    exists: true,
                    timestamp: 1_700_000_000 + block,
                    registrant: "0x0000000000000000000000000000000000000001".into(),
                    metadata: entry.metadata.clone(),
                },
            );
        }
        Ok(Self::receipt(block))
    }

    async fn stats(&self) -> Result<HashRegistryStats, LedgerError> {
        let total = self.entries.lock().expect("registry lock").len() as u64;
        Ok(HashRegistryStats {
            total_hashes: total,
            total_registrants: u64::from(total > 0),
        })
    }
}

/// Registry that fails every call — exercises degraded-ledger paths in tests.
pub struct FailingHashRegistry;

#[async_trait]
impl HashRegistry for FailingHashRegistry {
    async fn register_hash(&self, _hash: &str, _metadata: &str) -> Result<TxReceipt, LedgerError> {
        Err(LedgerError::Unreachable("http://mock-rpc".into()))
    }

    async fn hash_exists(&self, _hash: &str) -> Result<bool, LedgerError> {
        Err(LedgerError::Unreachable("http://mock-rpc".into()))
    }

    async fn hash_info(&self, _hash: &str) -> Result<HashInfo, LedgerError> {
        Err(LedgerError::Unreachable("http://mock-rpc".into()))
    }

    async fn register_batch(
        &self,
        _entries: &[HashBatchEntry],
    ) -> Result<TxReceipt, LedgerError> {
        Err(LedgerError::Unreachable("http://mock-rpc".into()))
    }

    async fn stats(&self) -> Result<HashRegistryStats, LedgerError> {
        Err(LedgerError::Unreachable("http://mock-rpc".into()))
    }
}
