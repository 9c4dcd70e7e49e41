//! transeval semantic similarity.
//!
//! Scores how close two texts are in meaning, using whichever strategy is
//! available in this build:
//!
//! - **TF-IDF cosine** - term weighting fitted on the two inputs, cosine of
//!   the L2-normalized rows. Behind the `tfidf` cargo feature (on by default).
//! - **Jaccard** - overlap of lowercased whitespace token sets. Always there.
//!
//! The choice is made once when a [`SimilarityScorer`] is built and logged
//! through `tracing`. If the TF-IDF backend is missing we fall back to Jaccard
//! instead of failing, so callers never see an error from scoring.
//!
//! ## Quick example
//!
//! ```
//! use semantic::{semantic_similarity, SimilarityScorer, SimilarityConfig};
//!
//! let score = semantic_similarity("The cat sat on the mat", "A cat was sitting on the mat");
//! assert!(score > 0.4);
//!
//! let scorer = SimilarityScorer::from_config(&SimilarityConfig::default());
//! println!("using {}", scorer.kind());
//! ```

mod config;
mod error;
mod jaccard;
mod normalize;
mod selector;
mod tfidf;
mod types;

pub use crate::config::{SimilarityConfig, SimilarityMode, TfIdfConfig};
pub use crate::error::SemanticError;
pub use crate::jaccard::JaccardSimilarity;
pub use crate::selector::{
    default_scorer, semantic_similarity, vector_backend, vector_backend_available,
    SimilarityScorer,
};
pub use crate::tfidf::TfIdfCosine;
pub use crate::types::{SimilarityStrategy, StrategyKind};
