//! Configuration types for the shared tokenizer.
//!
//! Every metric family in transeval tokenizes its inputs internally. The
//! families disagree on casing: the precision-brevity and Jaccard metrics
//! compare lowercased tokens, while the LCS metric keeps the original case.
//! [`TokenizeConfig`] captures that choice so each metric states it
//! explicitly instead of re-implementing the split.
//!
//! # Examples
//!
//! ```rust
//! use canonical::TokenizeConfig;
//!
//! let config = TokenizeConfig::default();
//! assert!(config.lowercase);
//! assert!(!config.normalize_unicode);
//!
//! let exact = TokenizeConfig::case_preserving();
//! assert!(!exact.lowercase);
//! ```

use serde::{Deserialize, Serialize};

/// Controls how text is split into tokens.
///
/// Splitting always happens on runs of Unicode whitespace. The flags only
/// change what each token looks like afterwards.
///
/// # Serialization
///
/// ```json
/// {
///   "lowercase": true,
///   "normalize_unicode": false
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeConfig {
    /// Apply locale-free Unicode lowercasing to every token.
    ///
    /// `true` by default. The LCS metric turns this off because it compares
    /// tokens case-sensitively.
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,

    /// Apply Unicode NFKC normalization before splitting.
    ///
    /// With normalization enabled, `"Caf\u{00E9}"` and `"Cafe\u{0301}"`
    /// produce the same token. Off by default, so tokens are byte-for-byte
    /// slices of the input (modulo casing).
    #[serde(default)]
    pub normalize_unicode: bool,
}

impl TokenizeConfig {
    /// Lowercasing tokenizer, the default used by bag-of-words metrics.
    pub const fn lowercased() -> Self {
        Self {
            lowercase: true,
            normalize_unicode: false,
        }
    }

    /// Tokenizer that keeps the original case of every token.
    pub const fn case_preserving() -> Self {
        Self {
            lowercase: false,
            normalize_unicode: false,
        }
    }

    /// Enable or disable NFKC normalization.
    pub const fn with_unicode_normalization(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self::lowercased()
    }
}

fn default_lowercase() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = TokenizeConfig::default();
        assert!(cfg.lowercase);
        assert!(!cfg.normalize_unicode);
        assert_eq!(cfg, TokenizeConfig::lowercased());
    }

    #[test]
    fn case_preserving_disables_lowercase() {
        let cfg = TokenizeConfig::case_preserving();
        assert!(!cfg.lowercase);
        assert!(!cfg.normalize_unicode);
    }

    #[test]
    fn builder_sets_normalization() {
        let cfg = TokenizeConfig::case_preserving().with_unicode_normalization(true);
        assert!(!cfg.lowercase);
        assert!(cfg.normalize_unicode);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: TokenizeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, TokenizeConfig::default());

        let cfg: TokenizeConfig = serde_json::from_str(r#"{"normalize_unicode": true}"#).unwrap();
        assert!(cfg.lowercase);
        assert!(cfg.normalize_unicode);
    }
}
