//! Ledger collaborators: the on-chain news-hash registry and source/trust
//! registry, reached through a verification-gateway JSON-RPC endpoint.
//!
//! These are thin clients with narrow contracts. Contract-ABI encoding,
//! signing, gas handling, and receipt/event parsing all live behind the
//! gateway; this module only speaks JSON-RPC and maps transport failures
//! into `LedgerError`.

pub mod hash_registry;
pub mod rpc;
pub mod source_registry;
pub mod types;

pub use hash_registry::*;
pub use rpc::*;
pub use source_registry::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("ledger RPC unreachable at {0}")]
    Unreachable(String),

    #[error("ledger request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("ledger endpoint returned error (status {status}): {body}")]
    Endpoint { status: u16, body: String },

    #[error("ledger RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("response decoding error: {0}")]
    Decode(String),
}
