use serde::{Deserialize, Serialize};

/// Receipt for a state-changing registry call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxReceipt {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(rename = "blockNumber")]
    pub block_number: u64,
}

/// Stored information about a registered content hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashInfo {
    #[serde(rename = "existe")]
    pub exists: bool,
    /// Unix timestamp (seconds) of registration; 0 when unregistered.
    pub timestamp: u64,
    #[serde(rename = "registrador")]
    pub registrant: String,
    pub metadata: String,
}

impl HashInfo {
    /// The record the registry reports for a hash it has never seen.
    pub fn absent() -> Self {
        Self {
            exists: false,
            timestamp: 0,
            registrant: String::new(),
            metadata: String::new(),
        }
    }
}

/// One entry of a batched hash registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashBatchEntry {
    pub hash: String,
    pub metadata: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashRegistryStats {
    #[serde(rename = "totalHashes")]
    pub total_hashes: u64,
    #[serde(rename = "totalRegistradores")]
    pub total_registrants: u64,
}

/// Registration payload for a news source, keyed externally by address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRegistration {
    pub metadata: String,
    #[serde(rename = "trustScore")]
    pub trust_score: u32,
    #[serde(rename = "sourceType")]
    pub source_type: String,
}

/// Stored information about a registered source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub registered: bool,
    /// Unix timestamp (seconds) of registration; 0 when unregistered.
    pub timestamp: u64,
    #[serde(rename = "registeredBy")]
    pub registered_by: String,
    pub metadata: String,
    #[serde(rename = "trustScore")]
    pub trust_score: u32,
    #[serde(rename = "sourceType")]
    pub source_type: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRegistryStats {
    #[serde(rename = "totalSources")]
    pub total_sources: u64,
    #[serde(rename = "activeSources")]
    pub active_sources: u64,
    #[serde(rename = "totalAdmins")]
    pub total_admins: u64,
}
