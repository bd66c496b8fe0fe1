//! Aggregated price-level views of the board

use serde::{Deserialize, Serialize};

use crate::decimal::{checked_sum, Price, Quantity};
use crate::error::{Error, Result};
use crate::model::order::{Order, Side};

/// Total quantity resting at one price on one side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Sum of the quantities of every order at this level
    pub quantity: Quantity,
    /// Price per unit shared by every order at this level
    pub price: Price,
    /// Side shared by every order at this level
    pub side: Side,
}

impl OrderSummary {
    /// Fold a set of orders into a single summary.
    ///
    /// The orders must be non-empty and agree on both price and side; anything
    /// else fails with `InvalidAggregationInput`. Quantities are added exactly,
    /// so the result does not depend on the order the input arrives in.
    pub fn from_orders<'a, I>(orders: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut orders = orders.into_iter();
        let first = orders.next().ok_or_else(|| {
            Error::InvalidAggregationInput("Cannot summarise an empty set of orders".to_string())
        })?;

        let mut summary = Self {
            quantity: first.quantity,
            price: first.price,
            side: first.side,
        };

        for order in orders {
            if order.price != summary.price {
                return Err(Error::InvalidAggregationInput(format!(
                    "Order {} at price {} does not belong to level {}",
                    order.id, order.price, summary.price
                )));
            }
            if order.side != summary.side {
                return Err(Error::InvalidAggregationInput(format!(
                    "Order {} is a {} order in a {} level",
                    order.id, order.side, summary.side
                )));
            }
            summary.quantity = checked_sum(summary.quantity, order.quantity)?;
        }

        Ok(summary)
    }
}

/// Both sides of the board, each sorted best price first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Bid levels, highest price first
    pub buys: Vec<OrderSummary>,
    /// Ask levels, lowest price first
    pub sells: Vec<OrderSummary>,
}
