//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::basket::Line;

/// Errors that can occur while calculating a basket subtotal.
#[derive(Debug, Error, PartialEq)]
pub enum SubtotalError {
    /// No lines were provided, so currency could not be determined.
    #[error("no lines provided; cannot determine currency")]
    NoLines,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The total price of a single line: unit price times quantity.
pub fn line_total<'a>(line: &Line<'a>) -> Money<'a, Currency> {
    let minor_units = line
        .price()
        .to_minor_units()
        .saturating_mul(i64::from(line.quantity()));

    Money::from_minor(minor_units, line.price().currency())
}

/// Calculates the subtotal of a list of basket lines.
///
/// # Errors
///
/// - [`SubtotalError::NoLines`]: No lines were provided, so currency could not be determined.
/// - [`SubtotalError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn subtotal<'a>(lines: &[Line<'a>]) -> Result<Money<'a, Currency>, SubtotalError> {
    let first = lines.first().ok_or(SubtotalError::NoLines)?;

    let total = lines.iter().try_fold(
        Money::from_minor(0, first.price().currency()),
        |acc, line| acc.add(line_total(line)),
    )?;

    Ok(total)
}
