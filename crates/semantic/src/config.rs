use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SemanticError;

/// Which similarity strategy the scorer should try to use.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMode {
    /// Prefer TF-IDF cosine, fall back to Jaccard when the backend is missing.
    #[default]
    Auto,
    /// Ask for TF-IDF cosine explicitly. Still degrades to Jaccard (with a
    /// warning) when the backend is missing.
    Tfidf,
    /// Always use token-set Jaccard.
    Jaccard,
}

impl SimilarityMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMode::Auto => "auto",
            SimilarityMode::Tfidf => "tfidf",
            SimilarityMode::Jaccard => "jaccard",
        }
    }
}

impl fmt::Display for SimilarityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMode {
    type Err = SemanticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SimilarityMode::Auto),
            "tfidf" | "tf-idf" => Ok(SimilarityMode::Tfidf),
            "jaccard" => Ok(SimilarityMode::Jaccard),
            other => Err(SemanticError::InvalidConfig(format!(
                "unknown similarity mode '{other}' (expected auto, tfidf or jaccard)"
            ))),
        }
    }
}

/// Term weighting knobs for the TF-IDF backend.
///
/// The defaults match the conventional vectorizer setup: raw term counts,
/// smoothed idf, L2-normalized rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TfIdfConfig {
    /// Use `ln((1 + n) / (1 + df)) + 1` instead of `ln(n / df) + 1`.
    #[serde(default = "default_true")]
    pub smooth_idf: bool,
    /// Replace raw term frequency `tf` with `1 + ln(tf)`.
    #[serde(default)]
    pub sublinear_tf: bool,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

/// Runtime configuration for [`SimilarityScorer`](crate::SimilarityScorer).
///
/// # Example
/// ```
/// use semantic::{SimilarityConfig, SimilarityMode, SimilarityScorer};
///
/// let cfg = SimilarityConfig {
///     mode: SimilarityMode::Jaccard,
///     ..Default::default()
/// };
/// let scorer = SimilarityScorer::from_config(&cfg);
/// assert_eq!(scorer.score("", ""), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimilarityConfig {
    #[serde(default)]
    pub mode: SimilarityMode,
    #[serde(default)]
    pub tfidf: TfIdfConfig,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = SimilarityConfig::default();
        assert_eq!(cfg.mode, SimilarityMode::Auto);
        assert!(cfg.tfidf.smooth_idf);
        assert!(!cfg.tfidf.sublinear_tf);
    }

    #[test]
    fn mode_parses_known_names() {
        assert_eq!("auto".parse::<SimilarityMode>().unwrap(), SimilarityMode::Auto);
        assert_eq!("TFIDF".parse::<SimilarityMode>().unwrap(), SimilarityMode::Tfidf);
        assert_eq!("tf-idf".parse::<SimilarityMode>().unwrap(), SimilarityMode::Tfidf);
        assert_eq!(" jaccard ".parse::<SimilarityMode>().unwrap(), SimilarityMode::Jaccard);
    }

    #[test]
    fn mode_rejects_unknown_names() {
        let err = "bert".parse::<SimilarityMode>().unwrap_err();
        assert!(matches!(err, SemanticError::InvalidConfig(_)));
        assert!(err.to_string().contains("bert"));
    }

    #[test]
    fn mode_display_roundtrips_through_from_str() {
        for mode in [SimilarityMode::Auto, SimilarityMode::Tfidf, SimilarityMode::Jaccard] {
            assert_eq!(mode.to_string().parse::<SimilarityMode>().unwrap(), mode);
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: SimilarityConfig = serde_json::from_str(r#"{"mode": "jaccard"}"#).unwrap();
        assert_eq!(cfg.mode, SimilarityMode::Jaccard);
        assert_eq!(cfg.tfidf, TfIdfConfig::default());
    }
}
