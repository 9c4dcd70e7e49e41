//! # transeval lexical metrics
//!
//! Reference-based lexical scores for a translation `hypothesis` against a
//! `reference`. Each metric is a pure function of its two strings (plus an
//! optional config), shares no state with the others, and never fails:
//! degenerate inputs map to defined sentinel scores.
//!
//! | Metric | Tokens | Order-aware | Range |
//! |---|---|---|---|
//! | [`simple_bleu`] | lowercased | no | `[0, 1]` |
//! | [`rouge_l_f1`] | case-sensitive | yes | `[0, 1]` |
//! | [`length_ratio`] | whitespace count | no | `[0, ∞)` |
//!
//! ## Example
//!
//! ```
//! use lexical::{rouge_l_f1, simple_bleu};
//!
//! let reference = "Short sentence for testing";
//! let hypothesis = "Short sentence";
//!
//! // Both tokens match, but the brevity penalty kicks in.
//! assert!(simple_bleu(reference, hypothesis) < 1.0);
//! assert!(rouge_l_f1(reference, hypothesis) > 0.0);
//! ```

pub mod config;
mod lcs;
mod length;
mod precision;

pub use crate::config::PrecisionConfig;
pub use crate::lcs::{lcs_length, rouge_l, rouge_l_f1, LcsScore};
pub use crate::length::{length_ratio, LengthBand, BALANCED_MAX_RATIO, BALANCED_MIN_RATIO};
pub use crate::precision::{brevity_penalty, simple_bleu, simple_bleu_with};

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "Hello world this is a test";

    #[test]
    fn exact_match_scenario() {
        assert!(simple_bleu(REFERENCE, REFERENCE) >= 0.9);
        assert!(rouge_l_f1(REFERENCE, REFERENCE) > 0.9);
    }

    #[test]
    fn disjoint_text_scenario() {
        assert!(simple_bleu(REFERENCE, "Completely different sentence") < 0.2);
        assert_eq!(rouge_l_f1(REFERENCE, "Completely different sentence"), 0.0);
    }

    #[test]
    fn lcs_sees_order_that_precision_ignores() {
        let reference = "a b c d";
        let shuffled = "d c b a";
        assert!((simple_bleu(reference, shuffled) - 1.0).abs() < 1e-12);
        assert!(rouge_l_f1(reference, shuffled) < 0.5);
    }

    #[test]
    fn casing_asymmetry_between_metrics() {
        let reference = "Good Morning";
        let hypothesis = "good morning";
        assert!((simple_bleu(reference, hypothesis) - 1.0).abs() < 1e-12);
        assert_eq!(rouge_l_f1(reference, hypothesis), 0.0);
    }
}
