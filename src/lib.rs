//! Workspace umbrella crate for transeval.
//!
//! This crate ties the tokenizer, lexical and semantic crates together so
//! callers can score a translation against its reference through a single
//! entry point, [`Evaluator`]. The individual metrics are re-exported for
//! callers that only need one of them.

pub mod config;
mod evaluate;
pub mod language;

pub use canonical::{TokenizeConfig, tokenize};
pub use lexical::{
    LcsScore, LengthBand, PrecisionConfig, brevity_penalty, lcs_length, length_ratio, rouge_l,
    rouge_l_f1, simple_bleu, simple_bleu_with,
};
pub use semantic::{
    JaccardSimilarity, SemanticError, SimilarityConfig, SimilarityMode, SimilarityScorer,
    SimilarityStrategy, StrategyKind, TfIdfConfig, TfIdfCosine, semantic_similarity,
    vector_backend_available,
};

pub use crate::config::{ConfigLoadError, EvalFileConfig};
pub use crate::evaluate::{EvalConfig, EvaluationReport, Evaluator, TextPair};
pub use crate::language::{LanguageDetector, LanguageTag, StopwordDetector};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for evaluations.
pub trait EvaluationMetrics: Send + Sync {
    fn record_evaluation(&self, latency: Duration, strategy: StrategyKind);
}

/// Install or clear the global evaluation metrics recorder.
pub fn set_evaluation_metrics(recorder: Option<Arc<dyn EvaluationMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn EvaluationMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn EvaluationMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn EvaluationMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn EvaluationMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_evaluation(self, strategy: StrategyKind) {
        self.recorder
            .record_evaluation(self.start.elapsed(), strategy);
    }
}
