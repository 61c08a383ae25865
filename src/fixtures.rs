//! Fixtures
//!
//! The catalog is defined as YAML data and loaded once at startup. The demo
//! shop's catalog is embedded in the binary; callers can also supply their
//! own document in the same format.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, INR},
};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    products::Product,
};

/// The embedded demo catalog document.
pub const DEMO_CATALOG: &str = include_str!("../fixtures/catalog.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Catalog construction error
    #[error("Failed to build catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Wrapper for the catalog document in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Unique product id
    pub id: String,

    /// Display title
    pub title: String,

    /// Brand name
    pub brand: String,

    /// Category name
    pub category: String,

    /// Customer rating
    pub rating: f32,

    /// Selling price (e.g., "79999 INR")
    pub price: String,

    /// Maximum retail price (e.g., "85999 INR")
    pub mrp: String,

    /// Thumbnail image reference
    pub thumb: String,

    /// Gallery image references
    #[serde(default)]
    pub images: Vec<String>,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (price_minor, price_currency) = parse_price(&fixture.price)?;
        let (mrp_minor, mrp_currency) = parse_price(&fixture.mrp)?;

        Ok(Product {
            id: fixture.id,
            title: fixture.title,
            brand: fixture.brand,
            category: fixture.category,
            rating: fixture.rating,
            price: Money::from_minor(price_minor, price_currency),
            mrp: Money::from_minor(mrp_minor, mrp_currency),
            thumb: fixture.thumb,
            images: fixture.images,
        })
    }
}

/// Parse a price string (e.g., "79999 INR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "INR" => INR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

/// Build a catalog from a YAML document, preserving product order.
///
/// # Errors
///
/// Returns a `FixtureError` if the document cannot be parsed or a product
/// cannot be inserted.
pub fn catalog_from_str(document: &str) -> Result<Catalog<'static>, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(document)?;

    let mut catalog = Catalog::new();

    for product_fixture in fixture.products {
        let product: Product<'static> = product_fixture.try_into()?;

        catalog.insert(product)?;
    }

    Ok(catalog)
}

/// The demo shop's catalog.
///
/// # Errors
///
/// Returns a `FixtureError` if the embedded document fails to load; with an
/// unmodified build this does not happen.
pub fn demo_catalog() -> Result<Catalog<'static>, FixtureError> {
    catalog_from_str(DEMO_CATALOG)
}
