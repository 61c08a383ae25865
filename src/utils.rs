//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Free-text search over title, brand and category
    #[clap(short, long, default_value = "")]
    pub search: String,

    /// Sort order: relevance, price-asc, price-desc or rating-desc
    #[clap(long, default_value = "relevance")]
    pub sort: String,

    /// Restrict results to the given brands
    #[clap(long)]
    pub brand: Vec<String>,

    /// Restrict results to the given categories
    #[clap(long)]
    pub category: Vec<String>,

    /// Minimum price in rupees
    #[clap(long)]
    pub min_price: Option<i64>,

    /// Maximum price in rupees
    #[clap(long)]
    pub max_price: Option<i64>,

    /// Product ids to add to the basket, one unit each
    #[clap(short, long)]
    pub add: Vec<String>,

    /// Place an order for the basket contents
    #[clap(long)]
    pub checkout: bool,

    /// Order id to track
    #[clap(short, long)]
    pub track: Option<String>,
}
