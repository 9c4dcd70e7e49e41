use std::borrow::Cow;

use unicode_normalization::{is_nfkc, UnicodeNormalization};

use crate::config::TokenizeConfig;

/// Splits `text` on runs of Unicode whitespace and applies the casing rules in `cfg`.
///
/// Tokens borrow from `text` whenever no transformation is required, so the
/// case-preserving path does not allocate per token. Empty or whitespace-only
/// input yields an empty vector; there is no error case.
pub fn tokenize<'a>(text: &'a str, cfg: &TokenizeConfig) -> Vec<Cow<'a, str>> {
    if cfg.normalize_unicode {
        let normalized: String = text.nfkc().collect();
        return normalized
            .split_whitespace()
            .map(|token| Cow::Owned(apply_case(token, cfg).into_owned()))
            .collect();
    }

    text.split_whitespace()
        .map(|token| apply_case(token, cfg))
        .collect()
}

/// Lowercased whitespace tokens, as used by the precision-brevity and Jaccard metrics.
pub fn lowercase_tokens(text: &str) -> Vec<Cow<'_, str>> {
    tokenize(text, &TokenizeConfig::lowercased())
}

/// Case-preserving whitespace tokens, as used by the LCS metric.
pub fn whitespace_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// NFKC-normalized form of `text`, borrowed when it is already normalized.
pub fn normalize_nfkc(text: &str) -> Cow<'_, str> {
    if is_nfkc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfkc().collect())
    }
}

/// Number of whitespace-separated tokens in `text`.
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn apply_case<'a>(token: &'a str, cfg: &TokenizeConfig) -> Cow<'a, str> {
    // Skip the allocation when lowercasing would not change anything.
    if cfg.lowercase && token.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
        Cow::Owned(token.to_lowercase())
    } else {
        Cow::Borrowed(token)
    }
}
