//! Storefront
//!
//! The state container behind the shop pages. It owns the catalog, the
//! current criteria, the basket and the backing store, accepts the discrete
//! user intents, and exposes the derived views a rendering layer consumes.
//! Every basket mutation is persisted in the same synchronous step.

use rusty_money::{Money, iso, iso::Currency};
use thiserror::Error;

use crate::{
    basket::{Basket, BasketError},
    catalog::Catalog,
    checkout::{self, CheckoutError, Order},
    criteria::{Criteria, SortOrder},
    facets::FacetSet,
    filtering,
    products::Product,
    storage::{self, KeyValueStore, StorageError},
    tracking::{self, ShipmentStatus},
};

/// Errors raised by basket intents.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Basket mutation error
    #[error(transparent)]
    Basket(#[from] BasketError),

    /// Persistence error
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The storefront state container.
#[derive(Debug)]
pub struct Storefront<'a: 'static, S: KeyValueStore> {
    catalog: Catalog<'a>,
    criteria: Criteria<'a>,
    basket: Basket<'a>,
    store: S,
}

impl<'a: 'static, S: KeyValueStore> Storefront<'a, S> {
    /// Open the storefront, restoring any persisted cart from the store.
    ///
    /// Restoration is tolerant: missing or corrupt data starts an empty
    /// basket.
    pub fn new(catalog: Catalog<'a>, store: S) -> Self {
        let basket = storage::load_cart(&store, &catalog);

        Self {
            catalog,
            criteria: Criteria::default(),
            basket,
            store,
        }
    }

    /// Replace the free-text search.
    pub fn set_search(&mut self, search: &str) {
        self.criteria.search = search.trim().to_string();
    }

    /// Replace the sort order.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.criteria.sort = sort;
    }

    /// Apply the brand, category and price-bound filters in one step.
    pub fn apply_filters(
        &mut self,
        brands: FacetSet,
        categories: FacetSet,
        min_price: Option<Money<'a, Currency>>,
        max_price: Option<Money<'a, Currency>>,
    ) {
        self.criteria.brands = brands;
        self.criteria.categories = categories;
        self.criteria.min_price = min_price;
        self.criteria.max_price = max_price;
    }

    /// Reset the brand, category and price-bound filters.
    pub fn clear_filters(&mut self) {
        self.criteria.clear_filters();
    }

    /// The filtered, sorted product list for the current criteria.
    pub fn visible_products(&self) -> Vec<&Product<'a>> {
        filtering::visible_products(&self.catalog, &self.criteria)
    }

    /// Add `quantity` units of a product to the basket and persist the cart.
    ///
    /// An id unknown to the catalog is silently ignored.
    ///
    /// # Errors
    ///
    /// Returns a `StorefrontError` if the basket rejects the line or the
    /// cart cannot be persisted.
    pub fn add_to_basket(&mut self, id: &str, quantity: u32) -> Result<(), StorefrontError> {
        let Some(key) = self.catalog.resolve(id) else {
            return Ok(());
        };

        let Some(price) = self.catalog.get(key).map(|product| product.price) else {
            return Ok(());
        };

        self.basket.add(key, price, quantity)?;
        self.persist()?;

        Ok(())
    }

    /// Remove a product's line from the basket and persist the cart.
    ///
    /// An id unknown to the catalog is silently ignored.
    ///
    /// # Errors
    ///
    /// Returns a `StorefrontError` if the cart cannot be persisted.
    pub fn remove_from_basket(&mut self, id: &str) -> Result<(), StorefrontError> {
        let Some(key) = self.catalog.resolve(id) else {
            return Ok(());
        };

        self.basket.remove(key);
        self.persist()?;

        Ok(())
    }

    /// Set a line's quantity and persist the cart.
    ///
    /// A quantity of zero removes the line. An id unknown to the catalog, or
    /// without a line in the basket, is silently ignored and storage is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns a `StorefrontError` if the cart cannot be persisted.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) -> Result<(), StorefrontError> {
        let Some(key) = self.catalog.resolve(id) else {
            return Ok(());
        };

        if self.basket.quantity(key).is_none() {
            return Ok(());
        }

        self.basket.set_quantity(key, quantity);
        self.persist()?;

        Ok(())
    }

    /// Place an order for the current basket contents.
    ///
    /// # Errors
    ///
    /// Returns a `CheckoutError` if the basket is empty or persistence
    /// fails; an empty basket leaves all state untouched.
    pub fn checkout(&mut self) -> Result<Order<'a>, CheckoutError> {
        checkout::place_order(
            &mut self.basket,
            &self.catalog,
            &mut self.store,
            &mut rand::thread_rng(),
        )
    }

    /// Look up the shipment status for an order id.
    #[must_use]
    pub fn track_order(&self, order_id: &str) -> Option<ShipmentStatus> {
        tracking::lookup(order_id)
    }

    /// The most recently placed order id, for prefilling the tracking form.
    #[must_use]
    pub fn last_order_id(&self) -> Option<String> {
        storage::load_last_order(&self.store)
    }

    /// The basket subtotal.
    ///
    /// # Errors
    ///
    /// Returns a `SubtotalError` if there was a money arithmetic or currency
    /// mismatch error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, crate::pricing::SubtotalError> {
        self.basket.subtotal()
    }

    /// Total number of units in the basket, for the cart badge.
    #[must_use]
    pub fn basket_count(&self) -> u32 {
        self.basket.unit_count()
    }

    /// The catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// The current criteria.
    #[must_use]
    pub fn criteria(&self) -> &Criteria<'a> {
        &self.criteria
    }

    /// The basket.
    #[must_use]
    pub fn basket(&self) -> &Basket<'a> {
        &self.basket
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The currency the shop trades in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.catalog.currency().unwrap_or(iso::INR)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        storage::save_cart(&mut self.store, &self.basket, &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::INR};
    use testresult::TestResult;

    use crate::{fixtures::demo_catalog, storage::MemoryStore};

    use super::*;

    fn shop() -> Result<Storefront<'static, MemoryStore>, crate::fixtures::FixtureError> {
        Ok(Storefront::new(demo_catalog()?, MemoryStore::new()))
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() -> TestResult {
        let mut shop = shop()?;

        shop.add_to_basket("not-a-bike", 1)?;
        shop.set_quantity("not-a-bike", 3)?;
        shop.remove_from_basket("not-a-bike")?;

        assert!(shop.basket().is_empty());
        assert_eq!(shop.basket_count(), 0);

        Ok(())
    }

    #[test]
    fn search_text_is_trimmed() -> TestResult {
        let mut shop = shop()?;

        shop.set_search("  pulsar  ");

        assert_eq!(shop.criteria().search, "pulsar");
        assert_eq!(shop.visible_products().len(), 1);

        Ok(())
    }

    #[test]
    fn basket_intents_update_the_derived_views() -> TestResult {
        let mut shop = shop()?;

        shop.add_to_basket("firefox-mtb", 2)?;
        shop.add_to_basket("hercules-roadeo", 1)?;

        assert_eq!(shop.currency(), INR);
        assert_eq!(shop.basket_count(), 3);
        assert_eq!(
            shop.subtotal()?,
            Money::from_minor(1_800_000 * 2 + 1_500_000, INR)
        );

        shop.set_quantity("firefox-mtb", 1)?;
        shop.remove_from_basket("hercules-roadeo")?;

        assert_eq!(shop.basket_count(), 1);
        assert_eq!(shop.subtotal()?, Money::from_minor(1_800_000, INR));

        Ok(())
    }

    #[test]
    fn filters_and_sort_compose() -> TestResult {
        let mut shop = shop()?;

        shop.apply_filters(
            FacetSet::new(),
            FacetSet::from_strs(&["Road"]),
            None,
            Some(Money::from_minor(12_000_000, INR)),
        );
        shop.set_sort(SortOrder::PriceAsc);

        let ids: Vec<&str> = shop
            .visible_products()
            .iter()
            .map(|product| product.id.as_str())
            .collect();

        assert_eq!(ids, ["hero-splendor-plus", "bajaj-pulsar-150", "tvs-apache-160"]);

        shop.clear_filters();

        assert_eq!(shop.visible_products().len(), shop.catalog().len());

        Ok(())
    }

    #[test]
    fn checkout_requires_a_non_empty_basket() -> TestResult {
        let mut shop = shop()?;

        assert!(matches!(shop.checkout(), Err(CheckoutError::EmptyBasket)));
        assert_eq!(shop.last_order_id(), None);

        Ok(())
    }
}
