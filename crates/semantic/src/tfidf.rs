use std::collections::BTreeMap;

use crate::config::TfIdfConfig;
use crate::error::SemanticError;
use crate::normalize::{dot, l2_normalize_in_place};
use crate::types::{SimilarityStrategy, StrategyKind};

/// Cosine similarity over TF-IDF vectors fitted jointly on the two inputs.
///
/// Terms are runs of two or more word characters (alphanumerics or `_`)
/// taken from the lowercased text, so single-letter words and punctuation
/// never count. The idf table is computed over exactly the two documents
/// being compared. Vocabulary iteration is ordered, which keeps the floating
/// point sums identical from run to run.
///
/// If either text yields no terms the similarity is `0.0`.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfCosine {
    config: TfIdfConfig,
}

impl TfIdfCosine {
    /// Builds the backend, or reports that it was compiled out.
    pub fn try_new(config: TfIdfConfig) -> Result<Self, SemanticError> {
        if cfg!(feature = "tfidf") {
            Ok(Self { config })
        } else {
            Err(SemanticError::BackendUnavailable(
                "transeval-semantic was built without the `tfidf` feature".into(),
            ))
        }
    }

    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }
}

impl SimilarityStrategy for TfIdfCosine {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TfidfCosine
    }

    fn similarity(&self, reference: &str, hypothesis: &str) -> f64 {
        tfidf_cosine(reference, hypothesis, &self.config)
    }
}

fn tfidf_cosine(reference: &str, hypothesis: &str, config: &TfIdfConfig) -> f64 {
    let reference = term_counts(reference);
    let hypothesis = term_counts(hypothesis);
    if reference.is_empty() || hypothesis.is_empty() {
        return 0.0;
    }

    let vocabulary: BTreeMap<&str, usize> = reference
        .keys()
        .chain(hypothesis.keys())
        .map(String::as_str)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(index, term)| (term, index))
        .collect();

    let mut a = weigh(&reference, &hypothesis, &vocabulary, config);
    let mut b = weigh(&hypothesis, &reference, &vocabulary, config);
    l2_normalize_in_place(&mut a);
    l2_normalize_in_place(&mut b);

    dot(&a, &b).clamp(0.0, 1.0)
}

/// Builds the weighted row for `doc`; `other` is only consulted for document frequency.
fn weigh(
    doc: &BTreeMap<String, u32>,
    other: &BTreeMap<String, u32>,
    vocabulary: &BTreeMap<&str, usize>,
    config: &TfIdfConfig,
) -> Vec<f64> {
    const DOCUMENTS: f64 = 2.0;

    let mut row = vec![0.0; vocabulary.len()];
    for (term, &count) in doc {
        let Some(&index) = vocabulary.get(term.as_str()) else {
            continue;
        };
        let df = if other.contains_key(term) { 2.0 } else { 1.0 };
        let idf = if config.smooth_idf {
            ((1.0 + DOCUMENTS) / (1.0 + df)).ln() + 1.0
        } else {
            (DOCUMENTS / df).ln() + 1.0
        };
        let tf = if config.sublinear_tf {
            1.0 + f64::from(count).ln()
        } else {
            f64::from(count)
        };
        row[index] = tf * idf;
    }
    row
}

fn term_counts(text: &str) -> BTreeMap<String, u32> {
    let lowered = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for term in terms(&lowered) {
        *counts.entry(term.to_owned()).or_insert(0) += 1;
    }
    counts
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn terms(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|run| run.chars().nth(1).is_some())
}
