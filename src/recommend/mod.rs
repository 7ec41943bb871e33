//! Item-to-item recommendations over a bounded catalog snapshot.
//!
//! `initialize` builds a catalog-wide vocabulary and one vector per item and
//! must be rerun whenever the snapshot changes; there is no incremental
//! update. Lookups before the first `initialize` see an empty index and
//! resolve to "not found", never an error.

use indexmap::IndexMap;
use rand::seq::IndexedRandom;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogItem, ListingSummary};
use crate::config::EngineConfig;
use crate::vectorizer::similarity::find_similar_items;
use crate::vectorizer::{l2_normalize, Vocabulary};

/// One recommendation as returned across the API boundary. The score is a
/// relevance value in [0, 1], suitable for display rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub listing: ListingSummary,
    pub score: f32,
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
    vocabulary: Vocabulary,
    vectors: IndexMap<String, Vec<f32>>,
    listings: IndexMap<String, ListingSummary>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Rebuild the vocabulary and every item vector from `items`.
    ///
    /// Only the newest `snapshot_cap` items are indexed, keeping each call's
    /// cost bounded by configuration rather than catalog growth.
    pub fn initialize(&mut self, items: &[CatalogItem]) {
        let mut snapshot: Vec<&CatalogItem> = items.iter().collect();
        snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        snapshot.truncate(self.config.snapshot_cap);

        let texts: Vec<String> = snapshot.iter().map(|item| item.search_text()).collect();
        self.vocabulary = Vocabulary::build_frequency_vocabulary(
            texts.iter().map(String::as_str),
            self.config.catalog_vocab_terms,
        );
        let vectors: Vec<Vec<f32>> = texts
            .par_iter()
            .map(|text| self.vocabulary.vectorize(text))
            .collect();
        self.vectors = snapshot
            .iter()
            .zip(vectors)
            .map(|(item, vector)| (item.id.clone(), vector))
            .collect();
        self.listings = snapshot
            .iter()
            .map(|item| (item.id.clone(), ListingSummary::from(*item)))
            .collect();
        debug!(
            items = self.vectors.len(),
            vocabulary = self.vocabulary.len(),
            "recommendation index rebuilt"
        );
    }

    /// Items most similar to `item_id`, excluding itself. An unknown id has
    /// no recommendations and yields an empty list.
    pub fn similar_items(&self, item_id: &str, limit: usize) -> Vec<Recommendation> {
        let Some(target) = self.vectors.get(item_id) else {
            return Vec::new();
        };
        let hits = find_similar_items(
            target,
            self.vector_entries(),
            Some(item_id),
            self.config.cosine_floor,
            limit,
        );
        self.enrich(hits)
    }

    /// Recommendations from a browsing history: the profile is the
    /// re-normalized mean of the viewed items' vectors. Unknown ids are
    /// silently dropped; if none resolve, there is no profile and the list
    /// is empty. Already-viewed items are filtered out before truncation.
    pub fn personalized(&self, viewed_item_ids: &[String], limit: usize) -> Vec<Recommendation> {
        let viewed: Vec<&Vec<f32>> = viewed_item_ids
            .iter()
            .filter_map(|id| self.vectors.get(id))
            .collect();
        if viewed.is_empty() {
            return Vec::new();
        }

        let mut profile = vec![0.0f32; self.vocabulary.len()];
        for vector in &viewed {
            for (acc, component) in profile.iter_mut().zip(vector.iter()) {
                *acc += component;
            }
        }
        let count = viewed.len() as f32;
        for component in profile.iter_mut() {
            *component /= count;
        }
        l2_normalize(&mut profile);

        let hits = find_similar_items(
            &profile,
            self.vector_entries(),
            None,
            self.config.cosine_floor,
            usize::MAX,
        );
        let filtered: Vec<(&str, f32)> = hits
            .into_iter()
            .filter(|(id, _)| !viewed_item_ids.iter().any(|viewed_id| viewed_id == id))
            .take(limit)
            .collect();
        self.enrich(filtered)
    }

    /// Trending shelf: a random sample of listings that have at least one
    /// image, each with a display score in [0.5, 1.0). Not a popularity
    /// signal; the randomness only rotates the shelf between requests.
    pub fn trending(&self, limit: usize) -> Vec<Recommendation> {
        self.trending_with(limit, &mut rand::rng())
    }

    /// Same as `trending`, with the random source injected so tests can pin
    /// the sample.
    pub fn trending_with<R: Rng + ?Sized>(&self, limit: usize, rng: &mut R) -> Vec<Recommendation> {
        let with_images: Vec<&ListingSummary> = self
            .listings
            .values()
            .filter(|listing| listing.image.is_some())
            .collect();
        let picks: Vec<&ListingSummary> = with_images
            .choose_multiple(rng, limit)
            .copied()
            .collect();
        picks
            .into_iter()
            .map(|listing| Recommendation {
                listing: listing.clone(),
                score: rng.random_range(0.5..1.0),
            })
            .collect()
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    fn vector_entries(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.vectors
            .iter()
            .map(|(id, vector)| (id.as_str(), vector.as_slice()))
    }

    fn enrich(&self, hits: Vec<(&str, f32)>) -> Vec<Recommendation> {
        hits.into_iter()
            .filter_map(|(id, score)| {
                self.listings.get(id).map(|listing| Recommendation {
                    listing: listing.clone(),
                    score,
                })
            })
            .collect()
    }
}
