//! Checkout

use rand::Rng;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    basket::Basket,
    catalog::Catalog,
    pricing::SubtotalError,
    storage::{self, KeyValueStore, StorageError},
};

/// Prefix shared by every generated order id.
pub const ORDER_PREFIX: &str = "BM";

/// Number of random base-36 characters following the prefix.
const ORDER_ID_SUFFIX_LEN: usize = 6;

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The basket has no lines; this is the only user-facing validation.
    #[error("Cannot checkout an empty basket")]
    EmptyBasket,

    /// Subtotal calculation failed.
    #[error(transparent)]
    Subtotal(#[from] SubtotalError),

    /// The cart or last-order id could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A confirmed checkout transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    /// Generated order id
    pub id: String,

    /// Amount charged for the order
    pub total: Money<'a, Currency>,

    /// Number of units in the order
    pub items: u32,
}

/// Generate a fresh order id: the fixed prefix plus six random uppercase
/// base-36 characters.
///
/// Uniqueness is probabilistic and deliberately undefended; collisions are
/// accepted as negligible for a demo shop.
pub fn order_id<R: Rng>(rng: &mut R) -> String {
    let mut id = String::with_capacity(ORDER_PREFIX.len() + ORDER_ID_SUFFIX_LEN);

    id.push_str(ORDER_PREFIX);

    for _ in 0..ORDER_ID_SUFFIX_LEN {
        if let Some(c) = char::from_digit(rng.gen_range(0..36), 36) {
            id.push(c.to_ascii_uppercase());
        }
    }

    id
}

/// Place an order for the current basket contents.
///
/// Generates an order id, records it as the last order, clears the basket
/// and persists the now-empty cart, then emits the confirmation record.
///
/// # Errors
///
/// - [`CheckoutError::EmptyBasket`]: The basket was empty; nothing changed.
/// - [`CheckoutError::Subtotal`]: The order total could not be calculated.
/// - [`CheckoutError::Storage`]: A persistence write failed.
pub fn place_order<'a, S: KeyValueStore, R: Rng>(
    basket: &mut Basket<'a>,
    catalog: &Catalog<'a>,
    store: &mut S,
    rng: &mut R,
) -> Result<Order<'a>, CheckoutError> {
    if basket.is_empty() {
        return Err(CheckoutError::EmptyBasket);
    }

    let total = basket.subtotal()?;
    let items = basket.unit_count();
    let id = order_id(rng);

    storage::save_last_order(store, &id)?;

    basket.clear();
    storage::save_cart(store, basket, catalog)?;

    Ok(Order { id, total, items })
}
