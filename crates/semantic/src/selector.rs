use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use crate::config::{SimilarityConfig, SimilarityMode, TfIdfConfig};
use crate::error::SemanticError;
use crate::jaccard::JaccardSimilarity;
use crate::tfidf::TfIdfCosine;
use crate::types::{SimilarityStrategy, StrategyKind};

/// Holds the strategy chosen at construction time and scores text pairs with it.
///
/// Selection happens exactly once, in [`SimilarityScorer::from_config`] or
/// [`SimilarityScorer::with_strategy`]. Scoring never re-selects and never fails.
#[derive(Clone)]
pub struct SimilarityScorer {
    strategy: Arc<dyn SimilarityStrategy>,
}

impl SimilarityScorer {
    pub fn from_config(cfg: &SimilarityConfig) -> Self {
        let strategy = match cfg.mode {
            SimilarityMode::Jaccard => {
                info!(mode = %cfg.mode, strategy = %StrategyKind::Jaccard, "similarity strategy selected");
                fallback()
            }
            SimilarityMode::Auto | SimilarityMode::Tfidf => match vector_backend(&cfg.tfidf) {
                Ok(strategy) => {
                    info!(mode = %cfg.mode, strategy = %strategy.kind(), "similarity strategy selected");
                    strategy
                }
                Err(err) if should_fall_back(&err) => {
                    if cfg.mode == SimilarityMode::Tfidf {
                        warn!(error = %err, "tfidf similarity requested but unavailable; using jaccard");
                    } else {
                        info!(mode = %cfg.mode, strategy = %StrategyKind::Jaccard, reason = %err, "similarity strategy selected");
                    }
                    fallback()
                }
                Err(err) => {
                    warn!(error = %err, "similarity backend failed to initialize; using jaccard");
                    fallback()
                }
            },
        };
        Self { strategy }
    }

    /// Uses a caller-supplied strategy instead of selecting one.
    pub fn with_strategy(strategy: Arc<dyn SimilarityStrategy>) -> Self {
        Self { strategy }
    }

    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn score(&self, reference: &str, hypothesis: &str) -> f64 {
        self.strategy.similarity(reference, hypothesis)
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::from_config(&SimilarityConfig::default())
    }
}

impl fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("strategy", &self.strategy.kind())
            .finish()
    }
}

/// Builds the TF-IDF cosine backend.
pub fn vector_backend(cfg: &TfIdfConfig) -> Result<Arc<dyn SimilarityStrategy>, SemanticError> {
    Ok(Arc::new(TfIdfCosine::try_new(*cfg)?))
}

/// Whether the TF-IDF backend is part of this build.
pub fn vector_backend_available() -> bool {
    TfIdfCosine::try_new(TfIdfConfig::default()).is_ok()
}

fn should_fall_back(err: &SemanticError) -> bool {
    matches!(err, SemanticError::BackendUnavailable(_))
}

fn fallback() -> Arc<dyn SimilarityStrategy> {
    Arc::new(JaccardSimilarity)
}

static DEFAULT_SCORER: OnceLock<SimilarityScorer> = OnceLock::new();

/// Process-wide default scorer, selected on first use.
pub fn default_scorer() -> &'static SimilarityScorer {
    DEFAULT_SCORER.get_or_init(SimilarityScorer::default)
}

/// Similarity between two texts using the default scorer.
///
/// TF-IDF cosine when the backend is available, token-set Jaccard otherwise.
pub fn semantic_similarity(reference: &str, hypothesis: &str) -> f64 {
    default_scorer().score(reference, hypothesis)
}
