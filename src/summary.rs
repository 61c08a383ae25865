//! Summary
//!
//! Terminal rendering of the product grid and the basket drawer.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::{Columns, Rows}},
};
use thiserror::Error;

use crate::{
    basket::Basket,
    catalog::Catalog,
    pricing::{self, SubtotalError},
    products::Product,
};

/// Errors that can occur while writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Subtotal calculation failed.
    #[error(transparent)]
    Subtotal(#[from] SubtotalError),

    /// IO error
    #[error("IO error")]
    Io,
}

/// Write the visible product list as a table, followed by the result count.
///
/// # Errors
///
/// Returns a `SummaryError` if the table cannot be written.
pub fn write_products(
    mut out: impl io::Write,
    products: &[&Product<'_>],
) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Brand", "Category", "Rating", "Price", "MRP"]);

    for product in products {
        builder.push_record([
            product.title.clone(),
            product.brand.clone(),
            product.category.clone(),
            format!("{:.1}", product.rating),
            format!("{}", product.price),
            format!("{}", product.mrp),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| SummaryError::Io)?;
    writeln!(out, "Showing {} bikes", products.len()).map_err(|_err| SummaryError::Io)
}

/// Write the basket lines, unit count and subtotal.
///
/// # Errors
///
/// Returns a `SummaryError` if the subtotal cannot be calculated or the
/// table cannot be written.
pub fn write_basket(
    mut out: impl io::Write,
    basket: &Basket<'_>,
    catalog: &Catalog<'_>,
) -> Result<(), SummaryError> {
    if basket.is_empty() {
        return writeln!(out, "Your cart is empty.").map_err(|_err| SummaryError::Io);
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Qty", "Price", "Line Total"]);

    for line in basket.iter() {
        let title = catalog
            .get(line.product())
            .map_or("<unknown>", |product| product.title.as_str())
            .to_string();

        builder.push_record([
            title,
            line.quantity().to_string(),
            format!("{}", line.price()),
            format!("{}", pricing::line_total(line)),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..4), Alignment::right());

    let subtotal = basket.subtotal()?;

    writeln!(out, "{table}").map_err(|_err| SummaryError::Io)?;
    writeln!(out, "Items: {}  Subtotal: {subtotal}", basket.unit_count())
        .map_err(|_err| SummaryError::Io)
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::INR};
    use testresult::TestResult;

    use crate::fixtures::demo_catalog;

    use super::*;

    #[test]
    fn product_table_lists_titles_and_count() -> TestResult {
        let catalog = demo_catalog()?;
        let products: Vec<&Product<'_>> = catalog.iter().collect();
        let mut out = Vec::new();

        write_products(&mut out, &products)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Hero Splendor Plus"), "should list titles");
        assert!(rendered.contains("Showing 8 bikes"), "should show the count");

        Ok(())
    }

    #[test]
    fn empty_basket_renders_the_empty_message() -> TestResult {
        let catalog = demo_catalog()?;
        let basket = Basket::new(INR);
        let mut out = Vec::new();

        write_basket(&mut out, &basket, &catalog)?;

        assert_eq!(String::from_utf8(out)?, "Your cart is empty.\n");

        Ok(())
    }

    #[test]
    fn basket_table_lists_lines_and_subtotal() -> TestResult {
        let catalog = demo_catalog()?;
        let mut basket = Basket::new(INR);

        let Some(key) = catalog.resolve("firefox-mtb") else {
            panic!("expected firefox-mtb in the demo catalog");
        };
        basket.add(key, Money::from_minor(1_800_000, INR), 2)?;

        let mut out = Vec::new();
        write_basket(&mut out, &basket, &catalog)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Firefox Bad Attitude MTB"), "should list titles");
        assert!(rendered.contains("Items: 2"), "should show the unit count");

        Ok(())
    }
}
