//! Order board service implementation

use std::sync::Arc;

use common::error::{ErrorExt, Result};
use common::model::order::{Order, OrderId, OrderRequest, Side};
use common::model::summary::{BoardSnapshot, OrderSummary};
use tracing::{info, warn};

use crate::registry::{InMemoryOrderRegistry, OrderRegistry};

/// Order board exposing registration, cancellation and aggregated views
pub struct OrderBoardService {
    /// Registry holding the resting orders
    registry: Arc<dyn OrderRegistry>,
}

impl OrderBoardService {
    /// Create a new order board over an in-memory registry
    pub fn new() -> Self {
        Self {
            registry: Arc::new(InMemoryOrderRegistry::new()),
        }
    }

    /// Create a new order board over the given registry
    pub fn with_registry(registry: Arc<dyn OrderRegistry>) -> Self {
        Self { registry }
    }

    /// Register a new order
    pub fn register_order(&self, request: OrderRequest) -> Arc<Order> {
        info!(
            "Registering {} order for {}: {} @ {}",
            request.side, request.user_id, request.quantity, request.price
        );
        self.registry.add(request)
    }

    /// Cancel a resting order
    pub fn cancel_order(&self, order_id: OrderId) -> Result<Arc<Order>> {
        info!("Cancelling order {}", order_id);
        self.registry.remove(order_id).map_err(|e| {
            warn!("Cancel of order {} rejected: {}", order_id, e);
            e
        })
    }

    /// Get a resting order by ID
    pub fn order(&self, order_id: OrderId) -> Option<Arc<Order>> {
        self.registry.get(order_id)
    }

    /// Bid levels, highest price first
    pub fn buy_orders(&self) -> Result<Vec<OrderSummary>> {
        self.summaries(Side::Buy)
    }

    /// Ask levels, lowest price first
    pub fn sell_orders(&self) -> Result<Vec<OrderSummary>> {
        self.summaries(Side::Sell)
    }

    /// Both sides of the board
    pub fn snapshot(&self) -> Result<BoardSnapshot> {
        Ok(BoardSnapshot {
            buys: self.buy_orders()?,
            sells: self.sell_orders()?,
        })
    }

    fn summaries(&self, side: Side) -> Result<Vec<OrderSummary>> {
        let mut summaries = Vec::new();

        for price in self.registry.prices_with_orders() {
            let orders = self.registry.orders_at_price(price, side);
            // A level may hold only the other side, or have emptied since the price listing
            if orders.is_empty() {
                continue;
            }

            let summary = OrderSummary::from_orders(orders.iter().map(Arc::as_ref))
                .with_context(|| format!("Failed to summarise {} level {}", side, price))?;
            summaries.push(summary);
        }

        summaries.sort_by(|a, b| side.price_priority(&a.price, &b.price));
        Ok(summaries)
    }
}

impl Default for OrderBoardService {
    fn default() -> Self {
        Self::new()
    }
}
