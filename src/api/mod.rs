//! HTTP surface: a thin axum shell over the verification pipeline and the
//! ledger collaborators.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use router::build_router;
