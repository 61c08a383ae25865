//! Filtering
//!
//! Pure derivation of the visible product list from the catalog and the
//! current criteria.

use std::cmp::Reverse;

use crate::{
    catalog::Catalog,
    criteria::{Criteria, SortOrder},
    products::Product,
};

/// Derive the filtered, sorted product list for the current criteria.
///
/// Filtering is conjunctive: a product must satisfy every active criterion.
/// Criteria with empty values pass unconditionally. Sorting is stable, so
/// ties keep their catalog-relative order, and `Relevance` performs no
/// reordering at all.
pub fn visible_products<'c, 'a>(
    catalog: &'c Catalog<'a>,
    criteria: &Criteria<'a>,
) -> Vec<&'c Product<'a>> {
    let query = criteria.search.trim().to_lowercase();

    let mut visible: Vec<&Product<'_>> = catalog
        .iter()
        .filter(|product| matches(product, criteria, &query))
        .collect();

    match criteria.sort {
        SortOrder::Relevance => {}
        SortOrder::PriceAsc => visible.sort_by_key(|product| product.price.to_minor_units()),
        SortOrder::PriceDesc => {
            visible.sort_by_key(|product| Reverse(product.price.to_minor_units()));
        }
        SortOrder::RatingDesc => {
            visible.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
    }

    visible
}

/// Check a single product against every active criterion.
///
/// `query` is the already-lowercased search text.
fn matches(product: &Product<'_>, criteria: &Criteria<'_>, query: &str) -> bool {
    if !query.is_empty() {
        let haystack = format!(
            "{} {} {}",
            product.title, product.brand, product.category
        )
        .to_lowercase();

        if !haystack.contains(query) {
            return false;
        }
    }

    if !criteria.brands.is_empty() && !criteria.brands.contains(&product.brand) {
        return false;
    }

    if !criteria.categories.is_empty() && !criteria.categories.contains(&product.category) {
        return false;
    }

    let price = product.price.to_minor_units();

    if let Some(min) = criteria.min_price {
        if price < min.to_minor_units() {
            return false;
        }
    }

    if let Some(max) = criteria.max_price {
        if price > max.to_minor_units() {
            return false;
        }
    }

    true
}
