pub mod classify;
pub mod extract;
pub mod heuristics;
pub mod oracle;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod types;

pub use classify::*;
pub use extract::*;
pub use heuristics::*;
pub use oracle::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

/// Failure modes of the oracle call. Every variant triggers the heuristic
/// fallback; none of them reach the HTTP layer.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("oracle is unreachable at {0}")]
    Unreachable(String),

    #[error("oracle request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("oracle returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("oracle reply contained no completion choices")]
    EmptyCompletion,

    #[error("malformed oracle reply: {0}")]
    MalformedReply(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("response decoding error: {0}")]
    Decode(String),
}
