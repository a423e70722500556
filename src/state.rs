//! Shared application state injected into every handler.
//!
//! Collaborators (oracle-backed verifier, ledger registries, article
//! fetcher) are constructed once at startup and shared. The anchoring
//! threshold is the single piece of runtime-mutable state in the process.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::anchoring::AnchoringCoordinator;
use crate::article::ArticleFetcher;
use crate::ledger::{HashRegistry, SourceRegistry};
use crate::pipeline::Verifier;

/// Default anchoring threshold (percent).
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Runtime-settable anchoring threshold in [0, 100].
///
/// A single atomic scalar: readers take a snapshot at decision time, the
/// configuration endpoint is the only writer, and there is nothing to keep
/// consistent with it, so relaxed ordering is enough. Resets on restart by
/// design — there is no persistence layer.
#[derive(Clone)]
pub struct ThresholdCell(Arc<AtomicU8>);

impl ThresholdCell {
    pub fn new(initial: u8) -> Self {
        Self(Arc::new(AtomicU8::new(initial)))
    }

    pub fn get(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }

    /// Set the threshold. Range validation happens at the API boundary; the
    /// cell itself stores whatever validated value it is handed.
    pub fn set(&self, value: u8) {
        self.0.store(value, Ordering::Relaxed);
    }
}

impl Default for ThresholdCell {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<Verifier>,
    pub anchoring: Arc<AnchoringCoordinator>,
    pub hash_registry: Arc<dyn HashRegistry>,
    pub source_registry: Arc<dyn SourceRegistry>,
    pub articles: Arc<ArticleFetcher>,
    pub threshold: ThresholdCell,
}

impl AppState {
    pub fn new(
        verifier: Verifier,
        hash_registry: Arc<dyn HashRegistry>,
        source_registry: Arc<dyn SourceRegistry>,
        articles: ArticleFetcher,
    ) -> Self {
        Self {
            verifier: Arc::new(verifier),
            anchoring: Arc::new(AnchoringCoordinator::new(hash_registry.clone())),
            hash_registry,
            source_registry,
            articles: Arc::new(articles),
            threshold: ThresholdCell::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_defaults_to_70() {
        assert_eq!(ThresholdCell::default().get(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn threshold_updates_are_visible_to_clones() {
        let cell = ThresholdCell::default();
        let reader = cell.clone();
        cell.set(90);
        assert_eq!(reader.get(), 90);
    }
}
