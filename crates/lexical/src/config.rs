//! Configuration for the lexical metrics.
//!
//! The metrics are pure functions of `(reference, hypothesis, config)`. The
//! defaults reproduce the reference scoring behavior exactly; every knob here
//! is opt-in.

use serde::{Deserialize, Serialize};

/// Configuration for the precision-brevity scorer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrecisionConfig {
    /// Clip each hypothesis token's match count to its frequency in the reference.
    ///
    /// `false` by default: a hypothesis token counts as a match whenever it
    /// appears anywhere in the reference, however often it repeats. Turning
    /// this on gives standard clipped unigram precision (BLEU-1), so a
    /// hypothesis that repeats one correct word can no longer score 1.0.
    #[serde(default)]
    pub clip_counts: bool,
}

impl PrecisionConfig {
    /// Unclipped precision, the default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable clipping of per-token match counts.
    pub fn with_clip_counts(mut self, clip_counts: bool) -> Self {
        self.clip_counts = clip_counts;
        self
    }
}
