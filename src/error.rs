use thiserror::Error;

/// Everything else in the core degrades to an empty or neutral result, so the
/// taxonomy stays narrow: only structurally broken filters are rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("price bound {value} is not a finite number")]
    NonFiniteBound { value: f64 },

    #[error("price range is empty: min {min} is greater than max {max}")]
    EmptyPriceRange { min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, FilterError>;
