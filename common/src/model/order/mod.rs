//! Order models and related types

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Price, Quantity};
use crate::error::{Error, Result};

/// Unique order identifier, assigned by the registry
pub type OrderId = Uuid;

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Compare two prices by market convention for this side.
    ///
    /// Bids rank the highest price first, asks the lowest price first, so
    /// sorting with this comparator always puts the best price at the front.
    pub fn price_priority(self, lhs: &Price, rhs: &Price) -> Ordering {
        match self {
            Side::Buy => rhs.cmp(lhs),
            Side::Sell => lhs.cmp(rhs),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(Error::ValidationError(format!("Unknown order side: {}", other))),
        }
    }
}

/// A validated request to place an order on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Owner of the order
    pub user_id: String,
    /// Requested quantity
    pub quantity: Quantity,
    /// Price per unit
    pub price: Price,
    /// Order side
    pub side: Side,
}

impl OrderRequest {
    /// Create a new order request, rejecting fields no order can carry
    pub fn new(user_id: impl Into<String>, quantity: Quantity, price: Price, side: Side) -> Result<Self> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return Err(Error::ValidationError("Order owner must not be empty".to_string()));
        }
        if quantity <= Quantity::ZERO {
            return Err(Error::ValidationError(format!("Quantity must be positive, got {}", quantity)));
        }
        if price <= Price::ZERO {
            return Err(Error::ValidationError(format!("Price must be positive, got {}", price)));
        }

        Ok(Self { user_id, quantity, price, side })
    }
}

/// A resting order. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID
    pub id: OrderId,
    /// Owner of the order
    pub user_id: String,
    /// Quantity
    pub quantity: Quantity,
    /// Price per unit
    pub price: Price,
    /// Order side
    pub side: Side,
}

impl Order {
    /// Build the stored order for a request under the given id
    pub fn from_request(request: OrderRequest, id: OrderId) -> Self {
        Self {
            id,
            user_id: request.user_id,
            quantity: request.quantity,
            price: request.price,
            side: request.side,
        }
    }
}
