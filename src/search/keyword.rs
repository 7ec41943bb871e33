//! Field-weighted keyword scoring.
//!
//! Each query term walks a cascade of tiers, strongest field first; a term
//! contributes at most one tier. Whole-word hits count as exact matches and
//! feed the exact-match bonus, substring hits only add their tier weight.

use crate::catalog::CatalogItem;
use crate::utils::text::contains_word;

const TITLE_WORD: f64 = 2.0;
const CATEGORY_WORD: f64 = 1.5;
const DESCRIPTION_WORD: f64 = 1.0;
const TITLE_PARTIAL: f64 = 0.5;
const DESCRIPTION_PARTIAL: f64 = 0.2;
const EXACT_MATCH_BONUS: f64 = 0.5;

/// Score `item` against pre-tokenized query terms.
///
/// Returns 0 when nothing matches, which excludes the item from the keyword
/// pass. Otherwise:
///
/// `(sum / terms + (exact / terms) * 0.5) * condition_weight`
///
/// so items matching many terms exactly, in better condition, rank above
/// equally relevant worn ones.
pub fn keyword_score(terms: &[String], item: &CatalogItem) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let title = item.title.to_lowercase();
    let category = item.category.to_lowercase();
    let description = item.description.to_lowercase();

    let mut sum = 0.0;
    let mut exact_matches = 0usize;
    for term in terms {
        if contains_word(&title, term) {
            sum += TITLE_WORD;
            exact_matches += 1;
        } else if contains_word(&category, term) {
            sum += CATEGORY_WORD;
            exact_matches += 1;
        } else if contains_word(&description, term) {
            sum += DESCRIPTION_WORD;
            exact_matches += 1;
        } else if title.contains(term.as_str()) {
            sum += TITLE_PARTIAL;
        } else if description.contains(term.as_str()) {
            sum += DESCRIPTION_PARTIAL;
        }
    }
    if sum == 0.0 {
        return 0.0;
    }
    let term_count = terms.len() as f64;
    (sum / term_count + (exact_matches as f64 / term_count) * EXACT_MATCH_BONUS)
        * item.condition.weight()
}
