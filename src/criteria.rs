//! Criteria

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::facets::FacetSet;

/// The ordering applied to the visible product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Preserve catalog order.
    #[default]
    Relevance,

    /// Cheapest first.
    PriceAsc,

    /// Most expensive first.
    PriceDesc,

    /// Highest rated first.
    RatingDesc,
}

impl SortOrder {
    /// The kebab-case wire name used by the sort control.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::RatingDesc => "rating-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised sort order name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown sort order: {0}")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating-desc" => Ok(Self::RatingDesc),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// The current search, filter and sort state.
///
/// Every field with an "empty" value (empty search, empty facet set, `None`
/// price bound) is treated as unconstrained and passes all products.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria<'a> {
    /// Free-text search, matched case-insensitively against title, brand and category.
    pub search: String,

    /// Accepted brand values; empty means all brands pass.
    pub brands: FacetSet,

    /// Accepted category values; empty means all categories pass.
    pub categories: FacetSet,

    /// Inclusive lower price bound.
    pub min_price: Option<Money<'a, Currency>>,

    /// Inclusive upper price bound.
    pub max_price: Option<Money<'a, Currency>>,

    /// Ordering of the visible list.
    pub sort: SortOrder,
}

impl Criteria<'_> {
    /// Reset the brand, category and price constraints.
    ///
    /// Search text and sort order are left in place.
    pub fn clear_filters(&mut self) {
        self.brands.clear();
        self.categories.clear();
        self.min_price = None;
        self.max_price = None;
    }
}
