//! Domain types shared by the search and recommendation engines.
//!
//! The catalog snapshot is owned by the caller and only read here; every
//! search or recommendation call receives it as an argument and nothing in
//! this module outlives a single call except the snapshot itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// A single active listing as fetched by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub condition: Condition,
    pub location: String,
    pub seller_id: String,
    /// Ordered image references; the first one is the display image.
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Concatenated text fields in the order the vectorizer consumes them.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title, self.description, self.category, self.condition, self.location
        )
    }
}

/// Physical condition of a listing.
///
/// Unrecognized strings parse to `Poor` so a malformed document can never
/// crash scoring; it just ranks at the lowest condition weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Ranking multiplier. A business bias, not an IR signal: better-kept
    /// items outrank equally relevant worn ones.
    pub fn weight(self) -> f64 {
        match self {
            Condition::New => 1.0,
            Condition::LikeNew => 0.8,
            Condition::Good => 0.6,
            Condition::Fair => 0.4,
            Condition::Poor => 0.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }

    /// Case-insensitive parse with a fail-safe default.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "new" => Condition::New,
            "like new" | "like-new" | "likenew" => Condition::LikeNew,
            "good" => Condition::Good,
            "fair" => Condition::Fair,
            _ => Condition::Poor,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::parse(&value)
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.label().to_string()
    }
}

/// Structural filters applied before any text scoring. All present filters
/// must hold (conjunctive).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Exact category, compared case-insensitively.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Case-insensitive location substring.
    pub location: Option<String>,
    /// Exact condition.
    pub condition: Option<Condition>,
}

impl SearchFilters {
    /// Rejects structurally broken filters. Callers at the HTTP boundary run
    /// this before searching; `matches` itself never panics on bad bounds.
    pub fn validate(&self) -> Result<()> {
        for bound in [self.min_price, self.max_price].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(FilterError::NonFiniteBound { value: bound });
            }
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(FilterError::EmptyPriceRange { min, max });
            }
        }
        Ok(())
    }

    /// Conjunctive match. Non-finite price bounds are ignored rather than
    /// excluding everything.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if let Some(category) = &self.category {
            if !item.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if min.is_finite() && item.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if max.is_finite() && item.price > max {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !item.location.to_lowercase().contains(&location.to_lowercase()) {
                return false;
            }
        }
        if let Some(condition) = self.condition {
            if item.condition != condition {
                return false;
            }
        }
        true
    }
}

/// The minimal listing surface handed back across the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
    /// First image reference, if the listing has any.
    pub image: Option<String>,
    pub category: String,
}

impl From<&CatalogItem> for ListingSummary {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            price: item.price,
            image: item.images.first().cloned(),
            category: item.category.clone(),
        }
    }
}
