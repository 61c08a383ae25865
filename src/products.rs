//! Products

use rusty_money::{Money, MoneyError, iso::Currency};
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// A catalog entry. Defined once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Unique product id, as referenced by the persisted cart.
    pub id: String,

    /// Display title
    pub title: String,

    /// Brand name
    pub brand: String,

    /// Category name
    pub category: String,

    /// Customer rating, 0.0 to 5.0
    pub rating: f32,

    /// Selling price
    pub price: Money<'a, Currency>,

    /// Maximum retail price. Expected to be at least `price`, but not enforced.
    pub mrp: Money<'a, Currency>,

    /// Thumbnail image reference
    pub thumb: String,

    /// Gallery image references
    pub images: Vec<String>,
}

impl<'a> Product<'a> {
    /// The amount saved against the maximum retail price.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.mrp.sub(self.price)
    }
}
