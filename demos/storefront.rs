//! Storefront Demo
//!
//! This demo walks the whole storefront surface from the terminal.
//!
//! Use `-s` to search and `--sort`, `--brand`, `--category`, `--min-price`,
//! `--max-price` to shape the product grid
//! Use `-a` to add product ids to the basket and `--checkout` to place an order
//! Use `-t` to look up an order id

use std::io;

use anyhow::Result;
use clap::Parser;
use rusty_money::{Money, iso::{Currency, INR}};

use bmart::{
    criteria::SortOrder,
    facets::FacetSet,
    fixtures,
    storage::MemoryStore,
    storefront::Storefront,
    summary, tracking,
    utils::DemoArgs,
};

/// Convert a whole-rupee amount to money in paise.
fn rupees(amount: i64) -> Money<'static, Currency> {
    Money::from_minor(amount.saturating_mul(100), INR)
}

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let catalog = fixtures::demo_catalog()?;
    let mut shop = Storefront::new(catalog, MemoryStore::new());

    shop.set_search(&args.search);
    shop.set_sort(args.sort.parse::<SortOrder>()?);

    let brands: Vec<&str> = args.brand.iter().map(String::as_str).collect();
    let categories: Vec<&str> = args.category.iter().map(String::as_str).collect();

    shop.apply_filters(
        FacetSet::from_strs(&brands),
        FacetSet::from_strs(&categories),
        args.min_price.map(rupees),
        args.max_price.map(rupees),
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    summary::write_products(&mut handle, &shop.visible_products())?;

    for id in &args.add {
        shop.add_to_basket(id, 1)?;
    }

    if !args.add.is_empty() {
        summary::write_basket(&mut handle, shop.basket(), shop.catalog())?;
    }

    if args.checkout {
        match shop.checkout() {
            Ok(order) => println!("Order placed: #{} ({} items, {})", order.id, order.items, order.total),
            Err(err) => println!("Checkout failed: {err}"),
        }
    }

    if let Some(order_id) = args.track.as_deref() {
        match tracking::lookup(order_id) {
            Some(status) => {
                println!("Order: {}", order_id.trim().to_uppercase());
                println!("Status: {}", status.stage);
                println!("ETA: {}", status.eta);

                for step in &status.steps {
                    println!("  - {step}");
                }
            }
            None => println!("No order found. Please check the ID."),
        }
    }

    Ok(())
}
