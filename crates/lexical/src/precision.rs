//! Unigram precision with a brevity penalty.
//!
//! A small BLEU-1-like adequacy score. It is not sacreBLEU: there are no
//! higher-order n-grams and, unless [`PrecisionConfig::clip_counts`] is set,
//! per-token counts are not clipped to the reference frequency.

use std::borrow::Cow;

use canonical::lowercase_tokens;
use fxhash::{FxHashMap, FxHashSet};

use crate::config::PrecisionConfig;

/// Precision-brevity score with the default (unclipped) configuration.
///
/// Returns a value in `[0, 1]`. An empty hypothesis scores `0.0`.
///
/// ```
/// use lexical::simple_bleu;
///
/// let score = simple_bleu("Hello world this is a test", "Hello world this is a test");
/// assert!((score - 1.0).abs() < 1e-12);
/// assert_eq!(simple_bleu("Hello world", ""), 0.0);
/// ```
pub fn simple_bleu(reference: &str, hypothesis: &str) -> f64 {
    simple_bleu_with(reference, hypothesis, &PrecisionConfig::default())
}

/// Precision-brevity score under an explicit [`PrecisionConfig`].
pub fn simple_bleu_with(reference: &str, hypothesis: &str, cfg: &PrecisionConfig) -> f64 {
    let ref_tokens = lowercase_tokens(reference);
    let hyp_tokens = lowercase_tokens(hypothesis);
    if hyp_tokens.is_empty() {
        return 0.0;
    }

    let matches = if cfg.clip_counts {
        clipped_matches(&ref_tokens, &hyp_tokens)
    } else {
        unclipped_matches(&ref_tokens, &hyp_tokens)
    };

    let precision = matches as f64 / hyp_tokens.len() as f64;
    precision * brevity_penalty(ref_tokens.len(), hyp_tokens.len())
}

/// Multiplicative penalty for hypotheses shorter than the reference.
///
/// `1.0` when `hyp_len >= ref_len` (including an empty reference), otherwise
/// `exp(1 - ref_len / hyp_len)`. A zero-length hypothesis yields `0.0`.
pub fn brevity_penalty(ref_len: usize, hyp_len: usize) -> f64 {
    if hyp_len >= ref_len {
        return 1.0;
    }
    if hyp_len == 0 {
        return 0.0;
    }
    (1.0 - ref_len as f64 / hyp_len as f64).exp()
}

/// Every hypothesis token present anywhere in the reference counts, repeats included.
fn unclipped_matches(reference: &[Cow<'_, str>], hypothesis: &[Cow<'_, str>]) -> usize {
    let vocabulary: FxHashSet<&str> = reference.iter().map(|token| &**token).collect();
    hypothesis
        .iter()
        .filter(|token| vocabulary.contains::<str>(token))
        .count()
}

fn clipped_matches(reference: &[Cow<'_, str>], hypothesis: &[Cow<'_, str>]) -> usize {
    let mut remaining: FxHashMap<&str, usize> = FxHashMap::default();
    for token in reference {
        *remaining.entry(&**token).or_insert(0) += 1;
    }

    let mut matches = 0;
    for token in hypothesis {
        if let Some(count) = remaining.get_mut::<str>(token) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_scores_one() {
        let text = "Hello world this is a test";
        assert!((simple_bleu(text, text) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_hypothesis_scores_zero() {
        assert_eq!(simple_bleu("Hello world", ""), 0.0);
        assert_eq!(simple_bleu("Hello world", "   \n"), 0.0);
        assert_eq!(simple_bleu("", ""), 0.0);
    }

    #[test]
    fn empty_reference_has_no_penalty_and_no_matches() {
        assert_eq!(brevity_penalty(0, 3), 1.0);
        assert_eq!(simple_bleu("", "some words here"), 0.0);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert!((simple_bleu("HELLO World", "hello world") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn partial_hypothesis_is_penalized() {
        // 4/4 tokens match, brevity penalty exp(1 - 6/4).
        let score = simple_bleu("Hello world this is a test", "Hello this is test");
        let expected = (1.0f64 - 6.0 / 4.0).exp();
        assert!((score - expected).abs() < 1e-12);
        assert!(score >= 0.4);
    }

    #[test]
    fn disjoint_text_scores_zero() {
        let score = simple_bleu("Hello world this is a test", "Completely different sentence");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn brevity_penalty_reduces_score() {
        let score = simple_bleu("Short sentence for testing", "Short sentence");
        assert!(score < 1.0);
        assert!((score - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn brevity_penalty_values() {
        assert_eq!(brevity_penalty(4, 4), 1.0);
        assert_eq!(brevity_penalty(4, 10), 1.0);
        assert_eq!(brevity_penalty(4, 0), 0.0);
        assert!((brevity_penalty(4, 2) - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn repeated_tokens_are_not_clipped_by_default() {
        let score = simple_bleu("the cat", "the the the the");
        // Shorter reference, so no penalty; every "the" counts.
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clipping_limits_repeated_tokens() {
        let cfg = PrecisionConfig::new().with_clip_counts(true);
        let score = simple_bleu_with("the cat", "the the the the", &cfg);
        assert!((score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn clipped_never_exceeds_unclipped() {
        let cfg = PrecisionConfig::new().with_clip_counts(true);
        let pairs = [
            ("a b c a", "a a a b"),
            ("the cat sat on the mat", "the the cat"),
            ("x y z", "x y z"),
            ("", "lonely"),
        ];
        for (reference, hypothesis) in pairs {
            assert!(
                simple_bleu_with(reference, hypothesis, &cfg) <= simple_bleu(reference, hypothesis)
            );
        }
    }
}
