//! Anchoring decision gate.
//!
//! Pure comparison of a verdict's score against the configured threshold.
//! The threshold is passed in explicitly; callers read it from the
//! process-wide cell at decision time so a concurrent update affects the
//! next decision, never a past one.

use serde::Serialize;

/// Whether a verdict is durable enough to anchor, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchoringDecision {
    #[serde(rename = "shouldAnchor")]
    pub should_anchor: bool,
    pub reason: String,
    #[serde(rename = "thresholdUsed")]
    pub threshold_used: u8,
}

/// Decide whether a score clears the anchoring threshold (inclusive).
pub fn decide(score: u8, threshold: u8) -> AnchoringDecision {
    if score >= threshold {
        AnchoringDecision {
            should_anchor: true,
            reason: format!("Score alto ({score}% >= {threshold}%)"),
            threshold_used: threshold,
        }
    } else {
        AnchoringDecision {
            should_anchor: false,
            reason: format!("Score bajo ({score}% < {threshold}%)"),
            threshold_used: threshold,
        }
    }
}
