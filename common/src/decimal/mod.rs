//! Decimal type utilities for exact price and quantity arithmetic

use std::str::FromStr;

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Price per unit with exact decimal precision
pub type Price = Decimal;

/// Quantity with exact decimal precision
pub type Quantity = Decimal;

/// Parse a plain decimal literal such as `"10"` or `"0.25"`
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(text.trim())?)
}

/// Add two quantities, reporting overflow instead of panicking
pub fn checked_sum(lhs: Quantity, rhs: Quantity) -> Result<Quantity> {
    lhs.checked_add(rhs).ok_or_else(|| {
        Error::DecimalError(format!("Quantity overflow adding {} to {}", rhs, lhs))
    })
}
