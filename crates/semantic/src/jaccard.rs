use canonical::lowercase_tokens;
use fxhash::FxHashSet;

use crate::types::{SimilarityStrategy, StrategyKind};

/// Token-set Jaccard similarity, the always-available fallback.
///
/// Both inputs are split on whitespace and lowercased, then reduced to sets.
/// Two empty texts are identical (`1.0`); exactly one empty text shares
/// nothing with the other (`0.0`).
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardSimilarity;

impl SimilarityStrategy for JaccardSimilarity {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Jaccard
    }

    fn similarity(&self, reference: &str, hypothesis: &str) -> f64 {
        jaccard_similarity(reference, hypothesis)
    }
}

pub(crate) fn jaccard_similarity(reference: &str, hypothesis: &str) -> f64 {
    let reference = lowercase_tokens(reference);
    let hypothesis = lowercase_tokens(hypothesis);
    let a: FxHashSet<&str> = reference.iter().map(|token| &**token).collect();
    let b: FxHashSet<&str> = hypothesis.iter().map(|token| &**token).collect();

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
