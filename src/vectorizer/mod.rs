//! Term vocabularies and L2-normalized term-frequency vectors.
//!
//! A `Vocabulary` maps normalized terms to dense vector indices. Two builders
//! exist on purpose and must not be unified: the catalog-wide builder ranks
//! terms by global frequency, while the query-scoped builder keeps distinct
//! terms in first-appearance order. The two produce different index layouts
//! and therefore different downstream rankings; callers pick the one their
//! path requires.

pub mod similarity;
pub mod tokenize;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::tokenize::tokenize;

/// Ordered mapping from normalized term to vector index. Rebuilt from scratch
/// on every invocation; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(with = "indexmap::map::serde_seq")]
    terms: IndexMap<String, usize>,
}

impl Vocabulary {
    /// Catalog-wide vocabulary: count every term across all texts, keep the
    /// `cap` most frequent, indices in descending-frequency order. Ties keep
    /// first-encountered order (the sort is stable).
    pub fn build_frequency_vocabulary<'a, I>(texts: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: IndexMap<String, u64> = IndexMap::new();
        for text in texts {
            for token in tokenize(text) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let terms = ranked
            .into_iter()
            .take(cap)
            .enumerate()
            .map(|(index, (term, _))| (term, index))
            .collect();
        Self { terms }
    }

    /// Query-scoped vocabulary: distinct terms in first-appearance order,
    /// capped at `cap`. Deliberately not frequency-ranked; see the module
    /// docs.
    pub fn build_query_scoped_vocabulary<'a, I>(texts: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut terms: IndexMap<String, usize> = IndexMap::new();
        'texts: for text in texts {
            for token in tokenize(text) {
                if terms.len() >= cap {
                    break 'texts;
                }
                let next = terms.len();
                terms.entry(token).or_insert(next);
            }
        }
        Self { terms }
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in index order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// L2-normalized term-frequency vector of this vocabulary's
    /// dimensionality. Terms outside the vocabulary are ignored; a text with
    /// no recognized terms yields the zero vector, which downstream
    /// similarity treats as "related to nothing".
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.terms.len()];
        for token in tokenize(text) {
            if let Some(index) = self.index_of(&token) {
                vector[index] += 1.0;
            }
        }
        l2_normalize(&mut vector);
        vector
    }
}

/// Scale to unit Euclidean length in place. Zero vectors stay untouched so
/// there is never a division by zero.
pub(crate) fn l2_normalize(vector: &mut [f32]) {
    let magnitude = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        for v in vector.iter_mut() {
            *v /= magnitude;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_vocabulary_ranks_by_descending_count() {
        let texts = ["sofa sofa sofa chair chair lamp"];
        let vocab = Vocabulary::build_frequency_vocabulary(texts, 100);
        assert_eq!(vocab.index_of("sofa"), Some(0));
        assert_eq!(vocab.index_of("chair"), Some(1));
        assert_eq!(vocab.index_of("lamp"), Some(2));
    }

    #[test]
    fn frequency_ties_keep_first_encountered_order() {
        let texts = ["lamp chair", "chair lamp"];
        let vocab = Vocabulary::build_frequency_vocabulary(texts, 100);
        assert_eq!(vocab.index_of("lamp"), Some(0));
        assert_eq!(vocab.index_of("chair"), Some(1));
    }

    #[test]
    fn frequency_vocabulary_respects_cap() {
        let texts = ["aaa aaa bbb bbb ccc ddd"];
        let vocab = Vocabulary::build_frequency_vocabulary(texts, 2);
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("aaa"));
        assert!(vocab.contains("bbb"));
        assert!(!vocab.contains("ccc"));
    }

    #[test]
    fn query_scoped_vocabulary_keeps_first_appearance_order() {
        let texts = ["lamp chair", "sofa lamp desk"];
        let vocab = Vocabulary::build_query_scoped_vocabulary(texts, 50);
        let order: Vec<&str> = vocab.terms().collect();
        assert_eq!(order, vec!["lamp", "chair", "sofa", "desk"]);
    }

    #[test]
    fn query_scoped_vocabulary_caps_distinct_terms() {
        let texts = ["one1 two2 three aaa bbb ccc"];
        let vocab = Vocabulary::build_query_scoped_vocabulary(texts, 3);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn builders_disagree_on_layout() {
        // same input, different index order: the asymmetry is load-bearing
        let texts = ["chair sofa sofa"];
        let by_freq = Vocabulary::build_frequency_vocabulary(texts, 10);
        let by_seen = Vocabulary::build_query_scoped_vocabulary(texts, 10);
        assert_eq!(by_freq.index_of("sofa"), Some(0));
        assert_eq!(by_seen.index_of("sofa"), Some(1));
    }

    #[test]
    fn vectorize_is_unit_length() {
        let vocab = Vocabulary::build_query_scoped_vocabulary(["sofa chair lamp"], 50);
        let vector = vocab.vectorize("sofa sofa chair");
        let magnitude: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 1e-6);
        // counts before normalization were [2, 1, 0]
        assert!(vector[0] > vector[1]);
        assert_eq!(vector[2], 0.0);
    }

    #[test]
    fn vectorize_ignores_out_of_vocabulary_terms() {
        let vocab = Vocabulary::build_query_scoped_vocabulary(["sofa"], 50);
        let vector = vocab.vectorize("television");
        assert_eq!(vector, vec![0.0]);
    }

    #[test]
    fn unrecognized_text_yields_zero_vector() {
        let vocab = Vocabulary::build_query_scoped_vocabulary(["sofa chair"], 50);
        let vector = vocab.vectorize("nothing matches here");
        assert!(vector.iter().all(|v| *v == 0.0));
        assert_eq!(vector.len(), vocab.len());
    }
}
