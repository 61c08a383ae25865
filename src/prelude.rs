//! B Mart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::{Basket, BasketError, Line},
    catalog::{Catalog, CatalogError},
    checkout::{CheckoutError, ORDER_PREFIX, Order, order_id, place_order},
    criteria::{Criteria, ParseSortOrderError, SortOrder},
    facets::FacetSet,
    filtering::visible_products,
    fixtures::{CatalogFixture, DEMO_CATALOG, FixtureError, ProductFixture, demo_catalog},
    pricing::{SubtotalError, line_total, subtotal},
    products::{Product, ProductKey},
    storage::{
        CART_KEY, FileStore, KeyValueStore, LAST_ORDER_KEY, MemoryStore, SavedLine, StorageError,
        load_cart, load_last_order, save_cart, save_last_order,
    },
    storefront::{Storefront, StorefrontError},
    summary::SummaryError,
    tracking::{ShipmentStatus, Stage, lookup},
};
