//! Curated domain synonym table.
//!
//! The table is static data materialized into a lookup map once, on first
//! use. Only the semantic pass consults it; the keyword matcher scores raw
//! terms.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Domain terms and their declared equivalents. Lookup is symmetric: the
/// comparator checks both directions, so entries only need one side.
static SYNONYM_TABLE: &[(&str, &[&str])] = &[
    // footwear
    ("shoes", &["sneakers", "trainers", "boots", "footwear"]),
    ("sneakers", &["shoes", "trainers", "kicks"]),
    ("boots", &["shoes", "footwear"]),
    // furniture
    ("couch", &["sofa", "settee", "loveseat"]),
    ("sofa", &["couch", "settee"]),
    ("table", &["desk", "stand"]),
    ("desk", &["table", "workstation"]),
    ("chair", &["armchair", "seat", "stool"]),
    ("wardrobe", &["closet", "dresser", "armoire"]),
    // electronics
    ("phone", &["smartphone", "mobile", "cellphone", "iphone", "android"]),
    ("smartphone", &["phone", "mobile", "cellphone"]),
    ("laptop", &["notebook", "computer", "macbook"]),
    ("computer", &["laptop", "desktop", "notebook"]),
    ("television", &["telly", "screen", "monitor"]),
    ("headphones", &["earphones", "earbuds", "headset"]),
    ("fridge", &["refrigerator", "freezer"]),
    // locations
    ("downtown", &["central", "city"]),
    ("nearby", &["local", "close"]),
    // condition adjectives
    ("new", &["unused", "sealed", "unopened", "mint"]),
    ("used", &["secondhand", "preowned", "worn"]),
    // price adjectives
    ("cheap", &["affordable", "budget", "bargain", "inexpensive"]),
    ("expensive", &["premium", "luxury", "pricey"]),
    // size and quality adjectives
    ("big", &["large", "huge", "spacious"]),
    ("small", &["compact", "little", "mini", "tiny"]),
    ("quality", &["excellent", "pristine", "premium"]),
];

fn table() -> &'static HashMap<&'static str, &'static [&'static str]> {
    static TABLE: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
    TABLE.get_or_init(|| SYNONYM_TABLE.iter().copied().collect())
}

/// Declared synonyms of `term`, or empty if it has none.
pub fn synonyms_of(term: &str) -> &'static [&'static str] {
    table().get(term).copied().unwrap_or(&[])
}

/// How strongly two terms match, strongest tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermMatch {
    Identical,
    Synonym,
    Substring,
}

/// Tiered term comparison used by the semantic pass.
///
/// Expects normalized (lowercased) terms, as produced by the tokenizer.
/// Synonymy needs both terms longer than 2 chars; the substring tier needs
/// both longer than 4, so short fragments never count as related.
pub fn match_strength(a: &str, b: &str) -> Option<TermMatch> {
    if a == b {
        return Some(TermMatch::Identical);
    }
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a > 2 && len_b > 2 && (synonyms_of(a).contains(&b) || synonyms_of(b).contains(&a)) {
        return Some(TermMatch::Synonym);
    }
    if len_a > 4 && len_b > 4 && (a.contains(b) || b.contains(a)) {
        return Some(TermMatch::Substring);
    }
    None
}

/// Whether two terms are considered similar at any tier.
pub fn are_words_similar(a: &str, b: &str) -> bool {
    match_strength(a, b).is_some()
}
