//! transeval tokenizer layer.
//!
//! Every similarity metric in transeval starts by splitting its two inputs
//! into tokens. This crate owns that step so the metrics agree on what a
//! token is.
//!
//! ## What we do
//!
//! - Split on runs of Unicode whitespace (tabs, newlines, NBSP, ...)
//! - Optionally lowercase (locale-free Unicode lowercasing)
//! - Optionally apply NFKC normalization first
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Tokenization cannot fail:
//! any string, including the empty string, is valid input and produces a
//! (possibly empty) token sequence. No state is retained between calls.

mod config;
mod token;

pub use crate::config::TokenizeConfig;
pub use crate::token::{
    lowercase_tokens, normalize_nfkc, token_count, tokenize, whitespace_tokens,
};
