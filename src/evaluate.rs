use std::borrow::Cow;
use std::sync::Arc;

use canonical::normalize_nfkc;
use lexical::{LcsScore, LengthBand, PrecisionConfig, length_ratio, rouge_l, simple_bleu_with};
use rayon::prelude::*;
use semantic::{SimilarityConfig, SimilarityScorer, StrategyKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::MetricsSpan;
use crate::language::{LanguageDetector, LanguageTag, StopwordDetector};

/// A reference text and the machine translation being scored against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPair {
    pub reference: String,
    pub hypothesis: String,
}

impl TextPair {
    pub fn new(reference: impl Into<String>, hypothesis: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            hypothesis: hypothesis.into(),
        }
    }
}

/// Every score computed for one [`TextPair`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Unigram precision times brevity penalty, in `[0, 1]`.
    pub precision_brevity: f64,
    /// LCS precision, recall and F1 over case-sensitive tokens.
    pub rouge_l: LcsScore,
    /// Semantic similarity, in `[0, 1]`.
    pub semantic: f64,
    /// Strategy that produced [`semantic`](Self::semantic).
    pub similarity_strategy: StrategyKind,
    /// Hypothesis token count over reference token count.
    pub length_ratio: Option<f64>,
    pub length_band: Option<LengthBand>,
    pub reference_language: Option<LanguageTag>,
    pub hypothesis_language: Option<LanguageTag>,
}

/// Runtime configuration for an [`Evaluator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    #[serde(default)]
    pub precision: PrecisionConfig,
    #[serde(default)]
    pub similarity: SimilarityConfig,
    /// NFKC-normalize both texts before any metric sees them.
    #[serde(default)]
    pub normalize_unicode: bool,
    /// Spread [`Evaluator::evaluate_batch`] across the rayon pool.
    #[serde(default)]
    pub use_parallel: bool,
    /// Attach the built-in [`StopwordDetector`] when no other detector is set.
    #[serde(default)]
    pub detect_language: bool,
}

/// Scores text pairs with every metric under one configuration.
///
/// The similarity strategy is selected once in [`Evaluator::new`]; after
/// that an evaluator is immutable and can be shared across threads.
///
/// ```
/// use transeval::{EvalConfig, Evaluator, TextPair};
///
/// let evaluator = Evaluator::new(EvalConfig::default());
/// let report = evaluator.evaluate(&TextPair::new("Hello this is test", "Hello this is a test"));
/// assert!(report.precision_brevity > 0.0);
/// assert!(report.rouge_l.f1 > 0.8);
/// ```
#[derive(Clone)]
pub struct Evaluator {
    config: EvalConfig,
    scorer: SimilarityScorer,
    detector: Option<Arc<dyn LanguageDetector>>,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        let detector: Option<Arc<dyn LanguageDetector>> = if config.detect_language {
            Some(Arc::new(StopwordDetector::new()))
        } else {
            None
        };
        Self {
            scorer: SimilarityScorer::from_config(&config.similarity),
            config,
            detector,
        }
    }

    pub fn with_language_detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn with_similarity_scorer(mut self, scorer: SimilarityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn similarity_strategy(&self) -> StrategyKind {
        self.scorer.kind()
    }

    pub fn evaluate(&self, pair: &TextPair) -> EvaluationReport {
        let span = MetricsSpan::start();

        let (reference, hypothesis) = if self.config.normalize_unicode {
            (normalize_nfkc(&pair.reference), normalize_nfkc(&pair.hypothesis))
        } else {
            (
                Cow::Borrowed(pair.reference.as_str()),
                Cow::Borrowed(pair.hypothesis.as_str()),
            )
        };

        let ratio = length_ratio(&reference, &hypothesis);
        let (reference_language, hypothesis_language) = match &self.detector {
            Some(detector) => (detector.detect(&pair.reference), detector.detect(&pair.hypothesis)),
            None => (None, None),
        };

        let report = EvaluationReport {
            precision_brevity: simple_bleu_with(&reference, &hypothesis, &self.config.precision),
            rouge_l: rouge_l(&reference, &hypothesis),
            semantic: self.scorer.score(&reference, &hypothesis),
            similarity_strategy: self.scorer.kind(),
            length_ratio: ratio,
            length_band: ratio.map(LengthBand::classify),
            reference_language,
            hypothesis_language,
        };

        debug!(
            precision_brevity = report.precision_brevity,
            rouge_l_f1 = report.rouge_l.f1,
            semantic = report.semantic,
            strategy = %report.similarity_strategy,
            "pair evaluated"
        );

        if let Some(span) = span {
            span.record_evaluation(report.similarity_strategy);
        }
        report
    }

    /// Evaluates every pair, preserving input order.
    pub fn evaluate_batch(&self, pairs: &[TextPair]) -> Vec<EvaluationReport> {
        if self.config.use_parallel {
            pairs.par_iter().map(|pair| self.evaluate(pair)).collect()
        } else {
            pairs.iter().map(|pair| self.evaluate(pair)).collect()
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("config", &self.config)
            .field("scorer", &self.scorer)
            .field("detector", &self.detector.is_some())
            .finish()
    }
}
