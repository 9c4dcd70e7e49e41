use thiserror::Error;

/// Errors raised while setting up a similarity scorer.
///
/// Scoring itself never fails; these only surface from construction-time
/// helpers and are absorbed by [`SimilarityScorer::from_config`](crate::SimilarityScorer::from_config).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// The term-weighting backend is not part of this build.
    #[error("similarity backend unavailable: {0}")]
    BackendUnavailable(String),
    /// A mode string or other setting could not be understood.
    #[error("invalid similarity config: {0}")]
    InvalidConfig(String),
}
