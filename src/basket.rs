//! Basket

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{SubtotalError, subtotal},
    products::ProductKey,
};

/// Errors related to basket mutation.
#[derive(Debug, Error)]
pub enum BasketError {
    /// A line's currency differs from the basket currency (line currency, basket currency).
    #[error("Line has currency {0}, but basket has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),
}

/// One product selected for purchase, with its quantity.
///
/// The price is a snapshot of the catalog price at the time the line was
/// created. Quantity is always at least 1; mutations that would drop it to
/// zero remove the line instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    product: ProductKey,
    price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> Line<'a> {
    /// Returns the product key of the line.
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Returns the unit price of the line.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns the quantity of the line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// The shopping basket: at most one line per product, in insertion order.
#[derive(Debug)]
pub struct Basket<'a> {
    lines: Vec<Line<'a>>,
    currency: &'static Currency,
}

impl<'a> Basket<'a> {
    /// Create an empty basket trading in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Basket {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line for the product is incremented; otherwise a new line
    /// is appended. Adding zero units changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a `BasketError` if the price currency differs from the basket
    /// currency.
    pub fn add(
        &mut self,
        product: ProductKey,
        price: Money<'a, Currency>,
        quantity: u32,
    ) -> Result<(), BasketError> {
        let price_currency = price.currency();

        if price_currency != self.currency {
            return Err(BasketError::CurrencyMismatch(
                price_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if quantity == 0 {
            return Ok(());
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product == product) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(Line {
                product,
                price,
                quantity,
            });
        }

        Ok(())
    }

    /// Set the quantity of an existing line to exactly `quantity`.
    ///
    /// A quantity of zero removes the line. A product without a line is
    /// ignored.
    pub fn set_quantity(&mut self, product: ProductKey, quantity: u32) {
        if quantity == 0 {
            self.remove(product);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product == product) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for a product, if present.
    pub fn remove(&mut self, product: ProductKey) {
        self.lines.retain(|line| line.product != product);
    }

    /// Returns the quantity held for a product, if it has a line.
    pub fn quantity(&self, product: ProductKey) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product == product)
            .map(Line::quantity)
    }

    /// Calculate the subtotal of the basket.
    ///
    /// # Errors
    ///
    /// Returns a `SubtotalError` if there was a money arithmetic or currency
    /// mismatch error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, SubtotalError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        subtotal(&self.lines)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity))
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Line<'a>> {
        self.lines.iter()
    }

    /// Get the number of lines in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the currency of the basket.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{INR, USD};
    use testresult::TestResult;

    use super::*;

    fn key(index: u64) -> ProductKey {
        slotmap::KeyData::from_ffi(index).into()
    }

    #[test]
    fn add_accumulates_quantity_on_the_same_line() -> TestResult {
        let mut basket = Basket::new(INR);
        let product = key(1);

        basket.add(product, Money::from_minor(100, INR), 1)?;
        basket.add(product, Money::from_minor(100, INR), 2)?;

        assert_eq!(basket.len(), 1);
        assert_eq!(basket.quantity(product), Some(3));

        Ok(())
    }

    #[test]
    fn add_zero_units_changes_nothing() -> TestResult {
        let mut basket = Basket::new(INR);

        basket.add(key(1), Money::from_minor(100, INR), 0)?;

        assert!(basket.is_empty());

        Ok(())
    }

    #[test]
    fn add_rejects_currency_mismatch() {
        let mut basket = Basket::new(INR);

        let result = basket.add(key(1), Money::from_minor(100, USD), 1);

        match result {
            Err(BasketError::CurrencyMismatch(line_currency, basket_currency)) => {
                assert_eq!(line_currency, USD.iso_alpha_code);
                assert_eq!(basket_currency, INR.iso_alpha_code);
            }
            other => panic!("expected CurrencyMismatch error, got {other:?}"),
        }
    }

    #[test]
    fn set_quantity_zero_removes_the_line() -> TestResult {
        let mut basket = Basket::new(INR);
        let product = key(1);

        basket.add(product, Money::from_minor(100, INR), 2)?;
        basket.set_quantity(product, 0);

        assert!(basket.is_empty());
        assert_eq!(basket.quantity(product), None);

        Ok(())
    }

    #[test]
    fn set_quantity_on_an_absent_product_is_a_no_op() -> TestResult {
        let mut basket = Basket::new(INR);
        basket.add(key(1), Money::from_minor(100, INR), 1)?;

        basket.set_quantity(key(2), 5);

        assert_eq!(basket.len(), 1);
        assert_eq!(basket.quantity(key(2)), None);

        Ok(())
    }

    #[test]
    fn set_quantity_replaces_rather_than_increments() -> TestResult {
        let mut basket = Basket::new(INR);
        let product = key(1);

        basket.add(product, Money::from_minor(100, INR), 2)?;
        basket.set_quantity(product, 5);

        assert_eq!(basket.quantity(product), Some(5));

        Ok(())
    }

    #[test]
    fn remove_deletes_the_line_and_tolerates_absent_products() -> TestResult {
        let mut basket = Basket::new(INR);
        let product = key(1);

        basket.add(product, Money::from_minor(100, INR), 1)?;
        basket.remove(product);
        basket.remove(product);

        assert!(basket.is_empty());

        Ok(())
    }

    #[test]
    fn subtotal_sums_price_times_quantity() -> TestResult {
        let mut basket = Basket::new(INR);

        basket.add(key(1), Money::from_minor(100, INR), 2)?;
        basket.add(key(2), Money::from_minor(50, INR), 1)?;

        assert_eq!(basket.subtotal()?, Money::from_minor(250, INR));

        Ok(())
    }

    #[test]
    fn subtotal_of_an_empty_basket_is_zero() -> TestResult {
        let basket = Basket::new(INR);

        assert_eq!(basket.subtotal()?, Money::from_minor(0, INR));

        Ok(())
    }

    #[test]
    fn unit_count_sums_quantities() -> TestResult {
        let mut basket = Basket::new(INR);

        basket.add(key(1), Money::from_minor(100, INR), 2)?;
        basket.add(key(2), Money::from_minor(50, INR), 3)?;

        assert_eq!(basket.unit_count(), 5);

        Ok(())
    }

    #[test]
    fn clear_empties_the_basket() -> TestResult {
        let mut basket = Basket::new(INR);

        basket.add(key(1), Money::from_minor(100, INR), 1)?;
        basket.clear();

        assert!(basket.is_empty());
        assert_eq!(basket.unit_count(), 0);

        Ok(())
    }

    #[test]
    fn iter_returns_lines_in_insertion_order() -> TestResult {
        let mut basket = Basket::new(INR);

        basket.add(key(2), Money::from_minor(200, INR), 1)?;
        basket.add(key(1), Money::from_minor(100, INR), 1)?;

        let prices: Vec<i64> = basket
            .iter()
            .map(|line| line.price().to_minor_units())
            .collect();

        assert_eq!(prices, vec![200, 100]);

        Ok(())
    }
}
