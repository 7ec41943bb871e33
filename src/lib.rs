/// This crate is a hybrid search and recommendation engine for second-hand
/// marketplace listings.
pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod search;
pub mod synonyms;
pub mod utils;
pub mod vectorizer;

/// Hybrid Search Engine
/// The top-level search entry point of this crate. It combines a
/// field-weighted keyword pass with a synonym-aware pseudo-semantic pass over
/// a filtered candidate set, merges the two by item identity (boosting items
/// found by both), and returns a ranked result list.
///
/// The engine itself is stateless: every call receives the catalog snapshot
/// as an explicit argument, so concurrent searches are naturally isolated and
/// no locking is required as long as callers treat a snapshot as immutable
/// for the duration of a call.
///
/// # Failure semantics
/// An empty catalog or candidate set produces an empty result list, never an
/// error. Blank queries take the browse path (condition then recency).
pub use search::HybridSearchEngine;

/// Search Result structures
/// - `ScoredResult`: one ranked hit, borrowing the snapshot item, with a
///   non-negative unbounded score and the pass that produced it
/// - `MatchKind`: `Keyword`, `Semantic`, or `Hybrid` (found by both passes)
pub use search::{MatchKind, ScoredResult};

/// Recommendation Engine
/// Item-to-item recommendations over a bounded snapshot of the catalog.
/// `initialize` builds a catalog-wide vocabulary and one L2-normalized
/// term-frequency vector per item; `similar_items`, `personalized`, and
/// `trending` serve lookups against that index. Rebuilding is from scratch:
/// there is no incremental update and nothing is persisted.
///
/// Lookups on an engine that has not been initialized behave as "not found"
/// and return empty lists.
pub use recommend::{Recommendation, RecommendationEngine};

/// Catalog data model
/// - `CatalogItem`: a listing as supplied by the caller; the core only reads
///   it
/// - `Condition`: five-step physical condition with its ranking weight;
///   unrecognized values parse to the lowest weight instead of failing
/// - `SearchFilters`: conjunctive structural filters (category, price range,
///   location, condition)
/// - `ListingSummary`: the minimal projection handed across the API boundary
pub use catalog::{CatalogItem, Condition, ListingSummary, SearchFilters};

/// Engine Configuration
/// All thresholds and caps as one `Default`-able, deserializable struct:
/// vocabulary sizes, similarity floors, the hybrid boost, the ranking tie
/// window, and the snapshot cap.
pub use config::EngineConfig;

/// Vocabulary for term vectorization
/// Ordered mapping from normalized term to vector index, with two
/// deliberately distinct builders: `build_frequency_vocabulary`
/// (catalog-wide, frequency-ranked) and `build_query_scoped_vocabulary`
/// (first-appearance order, capped). They produce different index layouts
/// and must not be unified.
pub use vectorizer::Vocabulary;

/// Similarity primitives
/// `cosine_similarity` is the sole vector similarity of the crate;
/// `find_similar_items` ranks candidates against a target vector with the
/// relatedness floor and identity exclusion applied.
pub use vectorizer::similarity::{cosine_similarity, find_similar_items};

/// Synonym-aware term comparison used by the semantic pass.
pub use synonyms::are_words_similar;

/// Error taxonomy
/// Narrow by design: only structurally broken filters are rejected; every
/// other edge case in the core degrades to an empty or neutral result.
pub use error::{FilterError, Result};
