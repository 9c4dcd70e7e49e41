//! Token-count length ratio between a source text and its translation.

use serde::{Deserialize, Serialize};

use canonical::token_count;

/// Lower bound of the balanced band (inclusive).
pub const BALANCED_MIN_RATIO: f64 = 0.7;
/// Upper bound of the balanced band (inclusive).
pub const BALANCED_MAX_RATIO: f64 = 1.3;

/// Ratio of translation tokens to source tokens.
///
/// Returns `None` when the source has no tokens, since no ratio is defined.
///
/// ```
/// use lexical::length_ratio;
///
/// assert_eq!(length_ratio("Short sentence for testing", "Short sentence"), Some(0.5));
/// assert_eq!(length_ratio("", "anything"), None);
/// ```
pub fn length_ratio(source: &str, translation: &str) -> Option<f64> {
    let source_len = token_count(source);
    if source_len == 0 {
        return None;
    }
    Some(token_count(translation) as f64 / source_len as f64)
}

/// Coarse classification of a length ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LengthBand {
    /// Translation has fewer than 70% of the source tokens.
    Short,
    /// Translation is within 70%..=130% of the source length.
    Balanced,
    /// Translation has more than 130% of the source tokens.
    Long,
}

impl LengthBand {
    pub fn classify(ratio: f64) -> Self {
        if ratio < BALANCED_MIN_RATIO {
            LengthBand::Short
        } else if ratio <= BALANCED_MAX_RATIO {
            LengthBand::Balanced
        } else {
            LengthBand::Long
        }
    }
}
