//! Hybrid search: keyword and semantic passes over a filtered candidate set,
//! merged by item identity and re-ranked.
//!
//! The engine is a stateless service object. Every call takes the catalog
//! snapshot as an explicit argument and builds all transient state inside the
//! call, so concurrent searches over the same snapshot need no locking.

pub mod keyword;
pub mod semantic;

use std::cmp::Ordering;

use indexmap::map::Entry;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogItem, ListingSummary, SearchFilters};
use crate::config::EngineConfig;
use crate::vectorizer::tokenize::tokenize;
use crate::vectorizer::Vocabulary;

/// Which pass produced a result. Items found by both passes are retagged
/// `Hybrid` and boosted during the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Keyword,
    Semantic,
    Hybrid,
}

/// One ranked hit. Borrows the snapshot; nothing here outlives the call.
/// Search scores are non-negative with no fixed upper bound, so callers
/// compare them relatively, never against an absolute scale.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
    pub kind: MatchKind,
}

impl ScoredResult<'_> {
    /// Boundary projection carrying the fields the API layer returns.
    pub fn summary(&self) -> ListingSummary {
        ListingSummary::from(self.item)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HybridSearchEngine {
    config: EngineConfig,
}

impl HybridSearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Search `catalog` for `query` under `filters`, returning at most
    /// `limit` ranked results.
    ///
    /// A blank query is the browse path: filters apply, results are ordered
    /// by condition then recency and every hit is tagged `Keyword` with its
    /// condition weight as the score. An empty candidate set yields an empty
    /// list, never an error. Filters are assumed pre-validated
    /// (`SearchFilters::validate`); unvalidated non-finite bounds are
    /// ignored rather than honored.
    pub fn search<'a>(
        &self,
        catalog: &'a [CatalogItem],
        query: &str,
        filters: &SearchFilters,
        limit: usize,
    ) -> Vec<ScoredResult<'a>> {
        let query = query.trim();
        if query.is_empty() {
            return self.browse(catalog, filters, limit);
        }

        let candidates: Vec<&CatalogItem> =
            catalog.iter().filter(|item| filters.matches(item)).collect();
        debug!(query, candidates = candidates.len(), "hybrid search");
        if candidates.is_empty() {
            return Vec::new();
        }
        let terms = tokenize(query);

        let keyword_hits: Vec<(usize, f64)> = candidates
            .par_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let score = keyword::keyword_score(&terms, item);
                (score > 0.0).then_some((index, score))
            })
            .collect();

        let overlap_floor = self.config.overlap_floor;
        let semantic_hits: Vec<(usize, f64)> = candidates
            .par_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let item_terms = tokenize(&item.search_text());
                let similarity = semantic::overlap_similarity(&terms, &item_terms);
                (similarity > overlap_floor)
                    .then(|| (index, similarity * item.condition.weight()))
            })
            .collect();
        debug!(
            keyword = keyword_hits.len(),
            semantic = semantic_hits.len(),
            "pass results"
        );

        // merge by item identity; a dual hit keeps its keyword score,
        // boosted, instead of summing (agreement, not double counting)
        let mut merged: IndexMap<&str, ScoredResult<'a>> = IndexMap::new();
        for (index, score) in keyword_hits {
            let item = candidates[index];
            merged.insert(
                item.id.as_str(),
                ScoredResult {
                    item,
                    score,
                    kind: MatchKind::Keyword,
                },
            );
        }
        for (index, score) in semantic_hits {
            let item = candidates[index];
            match merged.entry(item.id.as_str()) {
                Entry::Occupied(mut entry) => {
                    let hit = entry.get_mut();
                    hit.score *= self.config.hybrid_boost;
                    hit.kind = MatchKind::Hybrid;
                }
                Entry::Vacant(entry) => {
                    entry.insert(ScoredResult {
                        item,
                        score,
                        kind: MatchKind::Semantic,
                    });
                }
            }
        }

        let mut results: Vec<ScoredResult<'a>> = merged.into_values().collect();
        self.rank(&mut results);
        results.truncate(limit);
        results
    }

    /// Query-scoped vocabulary over a candidate set, for callers that need
    /// per-query vectors alongside the ranked results. Distinct terms in
    /// first-appearance order, capped by `query_vocab_terms`.
    pub fn query_vocabulary(&self, candidates: &[CatalogItem]) -> Vocabulary {
        let texts: Vec<String> = candidates.iter().map(CatalogItem::search_text).collect();
        Vocabulary::build_query_scoped_vocabulary(
            texts.iter().map(String::as_str),
            self.config.query_vocab_terms,
        )
    }

    /// Browse path for blank queries: no text scoring, condition then
    /// recency.
    fn browse<'a>(
        &self,
        catalog: &'a [CatalogItem],
        filters: &SearchFilters,
        limit: usize,
    ) -> Vec<ScoredResult<'a>> {
        let mut results: Vec<ScoredResult<'a>> = catalog
            .iter()
            .filter(|item| filters.matches(item))
            .map(|item| ScoredResult {
                item,
                score: item.condition.weight(),
                kind: MatchKind::Keyword,
            })
            .collect();
        results.sort_by(|a, b| {
            b.item
                .condition
                .weight()
                .total_cmp(&a.item.condition.weight())
                .then_with(|| b.item.created_at.cmp(&a.item.created_at))
        });
        results.truncate(limit);
        results
    }

    /// Final ranking: score descending, but scores within the tie window are
    /// treated as equal and fall through to condition, recency, then price.
    ///
    /// The tie window is not a total order, so the sort runs in two steps:
    /// stable sort on score, then adjacent runs whose gaps stay inside the
    /// window are re-ordered by the secondary keys.
    fn rank(&self, results: &mut [ScoredResult<'_>]) {
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
        let tie_window = self.config.tie_window;
        let mut run_start = 0;
        for i in 1..=scores.len() {
            if i == scores.len() || scores[i - 1] - scores[i] > tie_window {
                if i - run_start > 1 {
                    results[run_start..i].sort_by(tie_break_order);
                }
                run_start = i;
            }
        }
    }
}

/// Secondary ordering inside a score tie: condition weight descending,
/// newest first, then cheapest first.
fn tie_break_order(a: &ScoredResult<'_>, b: &ScoredResult<'_>) -> Ordering {
    b.item
        .condition
        .weight()
        .total_cmp(&a.item.condition.weight())
        .then_with(|| b.item.created_at.cmp(&a.item.created_at))
        .then_with(|| a.item.price.total_cmp(&b.item.price))
}
