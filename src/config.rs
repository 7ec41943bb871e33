use serde::{Deserialize, Serialize};

/// Tuning knobs for the search and recommendation engines.
///
/// The defaults are the reference parameters; every threshold is carried as a
/// value here rather than a global so callers can deserialize an override from
/// their own configuration layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Catalog-wide vocabulary size used by the recommendation engine.
    pub catalog_vocab_terms: usize,
    /// Query-scoped vocabulary cap used for per-query vectorization.
    pub query_vocab_terms: usize,
    /// Cosine similarity at or below this is treated as unrelated.
    pub cosine_floor: f32,
    /// Word-overlap similarity at or below this drops a candidate from the
    /// semantic pass.
    pub overlap_floor: f64,
    /// Multiplier applied when an item is found by both search passes.
    pub hybrid_boost: f64,
    /// Scores closer than this are treated as tied during final ranking.
    pub tie_window: f64,
    /// Newest-first cap on the snapshot indexed by the recommendation engine.
    pub snapshot_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_vocab_terms: 100,
            query_vocab_terms: 50,
            cosine_floor: 0.1,
            overlap_floor: 0.15,
            hybrid_boost: 3.0,
            tie_window: 0.1,
            snapshot_cap: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_parameters() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.catalog_vocab_terms, 100);
        assert_eq!(cfg.query_vocab_terms, 50);
        assert_eq!(cfg.cosine_floor, 0.1);
        assert_eq!(cfg.overlap_floor, 0.15);
        assert_eq!(cfg.hybrid_boost, 3.0);
        assert_eq!(cfg.tie_window, 0.1);
        assert_eq!(cfg.snapshot_cap, 300);
    }
}
