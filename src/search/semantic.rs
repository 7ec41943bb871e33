//! Pseudo-semantic pass: synonym-aware weighted word overlap.
//!
//! Not cosine scoring. Each query term takes the weight of its strongest
//! match among the item's terms (identical > declared synonym > long
//! substring) and the weights are averaged over the query terms, so the
//! result stays in [0, 1] regardless of item length.

use crate::synonyms::{match_strength, TermMatch};

const IDENTICAL_WEIGHT: f64 = 1.0;
const SYNONYM_WEIGHT: f64 = 0.8;
const SUBSTRING_WEIGHT: f64 = 0.6;

fn tier_weight(tier: TermMatch) -> f64 {
    match tier {
        TermMatch::Identical => IDENTICAL_WEIGHT,
        TermMatch::Synonym => SYNONYM_WEIGHT,
        TermMatch::Substring => SUBSTRING_WEIGHT,
    }
}

/// Average best-match weight of the query terms against the item terms.
/// Either side empty means no relation (0.0).
pub fn overlap_similarity(query_terms: &[String], item_terms: &[String]) -> f64 {
    if query_terms.is_empty() || item_terms.is_empty() {
        return 0.0;
    }
    let mut total = 0.0;
    for query_term in query_terms {
        let mut best = 0.0;
        for item_term in item_terms {
            if let Some(tier) = match_strength(query_term, item_term) {
                let weight = tier_weight(tier);
                if weight > best {
                    best = weight;
                    if best >= IDENTICAL_WEIGHT {
                        break;
                    }
                }
            }
        }
        total += best;
    }
    total / query_terms.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn identical_terms_score_full_overlap() {
        let sim = overlap_similarity(&terms(&["sofa"]), &terms(&["sofa", "leather"]));
        assert_eq!(sim, 1.0);
    }

    #[test]
    fn synonyms_score_below_identical() {
        let sim = overlap_similarity(&terms(&["couch"]), &terms(&["sofa"]));
        assert_eq!(sim, 0.8);
    }

    #[test]
    fn long_substring_scores_lowest_tier() {
        let sim = overlap_similarity(&terms(&["charger"]), &terms(&["supercharger"]));
        assert_eq!(sim, 0.6);
    }

    #[test]
    fn best_tier_wins_per_query_term() {
        // "couch" is both a synonym of "sofa" and identical to "couch"
        let sim = overlap_similarity(&terms(&["couch"]), &terms(&["sofa", "couch"]));
        assert_eq!(sim, 1.0);
    }

    #[test]
    fn average_is_over_query_terms() {
        let sim = overlap_similarity(
            &terms(&["sofa", "bicycle"]),
            &terms(&["sofa", "leather", "brown"]),
        );
        assert_eq!(sim, 0.5);
    }

    #[test]
    fn empty_sides_are_unrelated() {
        assert_eq!(overlap_similarity(&[], &terms(&["sofa"])), 0.0);
        assert_eq!(overlap_similarity(&terms(&["sofa"]), &[]), 0.0);
    }
}
