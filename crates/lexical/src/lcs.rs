//! ROUGE-L over whitespace tokens.
//!
//! The longest common subsequence rewards hypotheses that keep the
//! reference's word order, which bag-of-words precision cannot see. Tokens
//! are compared case-sensitively.
//!
//! The DP table is `(n + 1) × (m + 1)` cells for token counts `n` and `m`,
//! so both time and memory grow with the product of the input lengths.
//! Callers scoring very long documents should chunk them first.

use serde::{Deserialize, Serialize};

use canonical::whitespace_tokens;

/// Precision, recall and F1 derived from the LCS length.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LcsScore {
    /// LCS length divided by the hypothesis length.
    pub precision: f64,
    /// LCS length divided by the reference length.
    pub recall: f64,
    /// Harmonic mean of `precision` and `recall`.
    pub f1: f64,
}

/// ROUGE-L F1 between `reference` and `hypothesis`, in `[0, 1]`.
///
/// ```
/// use lexical::rouge_l_f1;
///
/// let reference = "The quick brown fox jumps over the lazy dog";
/// assert!((rouge_l_f1(reference, reference) - 1.0).abs() < 1e-12);
/// assert!(rouge_l_f1(reference, "The quick brown fox jumps") > 0.3);
/// ```
pub fn rouge_l_f1(reference: &str, hypothesis: &str) -> f64 {
    rouge_l(reference, hypothesis).f1
}

/// Full ROUGE-L breakdown between `reference` and `hypothesis`.
pub fn rouge_l(reference: &str, hypothesis: &str) -> LcsScore {
    let reference = whitespace_tokens(reference);
    let hypothesis = whitespace_tokens(hypothesis);

    let lcs = lcs_length(&reference, &hypothesis);
    if lcs == 0 {
        return LcsScore::default();
    }

    let lcs = lcs as f64;
    let precision = if hypothesis.is_empty() {
        0.0
    } else {
        lcs / hypothesis.len() as f64
    };
    let recall = if reference.is_empty() {
        0.0
    } else {
        lcs / reference.len() as f64
    };
    if precision + recall == 0.0 {
        return LcsScore::default();
    }

    LcsScore {
        precision,
        recall,
        f1: 2.0 * precision * recall / (precision + recall),
    }
}

/// Length of the longest common subsequence of two token slices.
///
/// `dp[i][j]` holds the LCS length of the suffixes `a[i..]` and `b[j..]`;
/// the table is filled bottom-up from the `dp[n][*] = dp[*][m] = 0` border,
/// so stack depth stays constant regardless of input size.
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = a.len();
    let m = b.len();
    if n == 0 || m == 0 {
        return 0;
    }

    let width = m + 1;
    let mut dp = vec![0usize; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i * width + j] = if a[i] == b[j] {
                1 + dp[(i + 1) * width + j + 1]
            } else {
                dp[(i + 1) * width + j].max(dp[i * width + j + 1])
            };
        }
    }
    dp[0]
}
