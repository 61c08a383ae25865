//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    facets::FacetSet,
    products::{Product, ProductKey},
};

/// Errors related to catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product with the same id was already inserted.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// A product's currency differs from the catalog currency (id, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// The fixed list of purchasable products.
///
/// Products live in a slotmap arena; a string-id index provides O(1) lookup
/// and a separate key list preserves insertion order for display.
#[derive(Debug, Default)]
pub struct Catalog<'a: 'static> {
    products: SlotMap<ProductKey, Product<'a>>,
    order: Vec<ProductKey>,
    ids: FxHashMap<String, ProductKey>,
    currency: Option<&'static Currency>,
}

impl<'a: 'static> Catalog<'a> {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: SlotMap::with_key(),
            order: Vec::new(),
            ids: FxHashMap::default(),
            currency: None,
        }
    }

    /// Insert a product, assigning it a key.
    ///
    /// The first inserted product fixes the catalog currency.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the id is already taken or the product's
    /// price or MRP currency differs from the catalog currency.
    pub fn insert(&mut self, product: Product<'a>) -> Result<ProductKey, CatalogError> {
        if self.ids.contains_key(&product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }

        let price_currency = product.price.currency();
        let mrp_currency = product.mrp.currency();

        let currency = self.currency.unwrap_or(price_currency);

        for candidate in [price_currency, mrp_currency] {
            if candidate != currency {
                return Err(CatalogError::CurrencyMismatch(
                    product.id,
                    candidate.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }
        }

        self.currency = Some(currency);

        let id = product.id.clone();
        let key = self.products.insert(product);

        self.order.push(key);
        self.ids.insert(id, key);

        Ok(key)
    }

    /// Get a product by key.
    pub fn get(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Resolve a product id to its key.
    pub fn resolve(&self, id: &str) -> Option<ProductKey> {
        self.ids.get(id).copied()
    }

    /// Look up a product by id.
    pub fn find(&self, id: &str) -> Option<&Product<'a>> {
        self.resolve(id).and_then(|key| self.get(key))
    }

    /// Iterate over the products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.order.iter().filter_map(|key| self.products.get(*key))
    }

    /// Get the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get the currency shared by all products, if any were inserted.
    #[must_use]
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }

    /// The distinct brand values in the catalog.
    #[must_use]
    pub fn brands(&self) -> FacetSet {
        let mut set = FacetSet::new();

        for product in self.iter() {
            set.insert(&product.brand);
        }

        set
    }

    /// The distinct category values in the catalog.
    #[must_use]
    pub fn categories(&self) -> FacetSet {
        let mut set = FacetSet::new();

        for product in self.iter() {
            set.insert(&product.category);
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{INR, USD},
    };
    use testresult::TestResult;

    use super::*;

    fn product<'a>(id: &str, brand: &str, category: &str, price_minor: i64) -> Product<'a> {
        Product {
            id: id.to_string(),
            title: id.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            rating: 4.0,
            price: Money::from_minor(price_minor, INR),
            mrp: Money::from_minor(price_minor, INR),
            thumb: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn insert_and_find_by_id() -> TestResult {
        let mut catalog = Catalog::new();
        let key = catalog.insert(product("hero-splendor-plus", "Hero", "Road", 100))?;

        assert_eq!(catalog.resolve("hero-splendor-plus"), Some(key));
        assert_eq!(
            catalog.find("hero-splendor-plus").map(|p| p.brand.as_str()),
            Some("Hero")
        );
        assert_eq!(catalog.find("unknown"), None);

        Ok(())
    }

    #[test]
    fn insert_rejects_duplicate_id() -> TestResult {
        let mut catalog = Catalog::new();
        catalog.insert(product("a", "Hero", "Road", 100))?;

        let result = catalog.insert(product("a", "Bajaj", "Road", 200));

        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
        assert_eq!(catalog.len(), 1);

        Ok(())
    }

    #[test]
    fn insert_rejects_currency_mismatch() -> TestResult {
        let mut catalog = Catalog::new();
        catalog.insert(product("a", "Hero", "Road", 100))?;

        let mut mismatched = product("b", "Bajaj", "Road", 200);
        mismatched.price = Money::from_minor(200, USD);
        mismatched.mrp = Money::from_minor(200, USD);

        let result = catalog.insert(mismatched);

        match result {
            Err(CatalogError::CurrencyMismatch(id, product_currency, catalog_currency)) => {
                assert_eq!(id, "b");
                assert_eq!(product_currency, USD.iso_alpha_code);
                assert_eq!(catalog_currency, INR.iso_alpha_code);
            }
            other => panic!("expected CurrencyMismatch error, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn iter_preserves_insertion_order() -> TestResult {
        let mut catalog = Catalog::new();
        catalog.insert(product("c", "TVS", "Road", 100))?;
        catalog.insert(product("a", "Hero", "Road", 300))?;
        catalog.insert(product("b", "Bajaj", "Road", 200))?;

        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, ["c", "a", "b"]);

        Ok(())
    }

    #[test]
    fn brands_and_categories_are_distinct_facets() -> TestResult {
        let mut catalog = Catalog::new();
        catalog.insert(product("a", "Hero", "Road", 100))?;
        catalog.insert(product("b", "Hero", "Mountain", 200))?;
        catalog.insert(product("c", "Bajaj", "Road", 300))?;

        assert_eq!(catalog.brands().iter().collect::<Vec<_>>(), ["Bajaj", "Hero"]);
        assert_eq!(
            catalog.categories().iter().collect::<Vec<_>>(),
            ["Mountain", "Road"]
        );

        Ok(())
    }
}
