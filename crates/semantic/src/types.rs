use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies which strategy produced a similarity score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Cosine similarity over jointly fitted TF-IDF vectors.
    TfidfCosine,
    /// Jaccard similarity over lowercased token sets.
    Jaccard,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::TfidfCosine => "tfidf_cosine",
            StrategyKind::Jaccard => "jaccard",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A similarity scoring strategy.
///
/// Implementations must be pure: the score depends only on the two input
/// strings and whatever configuration the strategy was built with.
pub trait SimilarityStrategy: Send + Sync {
    /// Which family this strategy belongs to (surfaced in reports and logs).
    fn kind(&self) -> StrategyKind;

    /// Similarity between `reference` and `hypothesis`. Never fails.
    fn similarity(&self, reference: &str, hypothesis: &str) -> f64;
}
