//! Registry of resting orders

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use common::decimal::Price;
use common::error::{Error, Result};
use common::model::order::{Order, OrderId, OrderRequest, Side};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Order registry trait defining the interface for order storage
pub trait OrderRegistry: Send + Sync {
    /// Store a new order under a freshly assigned id
    fn add(&self, request: OrderRequest) -> Arc<Order>;

    /// Remove a resting order, returning it
    fn remove(&self, order_id: OrderId) -> Result<Arc<Order>>;

    /// Distinct prices that currently have at least one resting order
    fn prices_with_orders(&self) -> BTreeSet<Price>;

    /// Resting orders at exactly this price on the given side
    fn orders_at_price(&self, price: Price, side: Side) -> Vec<Arc<Order>>;

    /// Get a resting order by ID
    fn get(&self, order_id: OrderId) -> Option<Arc<Order>>;

    /// Number of resting orders
    fn len(&self) -> usize;

    /// Whether no order is resting
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Both indices over the same set of orders.
///
/// An id is in `order_map` iff its order appears exactly once in the level for
/// its price, and every level in `levels` is non-empty.
#[derive(Default)]
struct OrderIndex {
    /// Orders grouped by price, both sides intermixed, in arrival order
    levels: BTreeMap<Price, Vec<Arc<Order>>>,
    /// Index for fast order lookup by ID
    order_map: HashMap<OrderId, Arc<Order>>,
}

impl OrderIndex {
    fn insert(&mut self, order: Arc<Order>) {
        self.levels.entry(order.price).or_default().push(order.clone());
        self.order_map.insert(order.id, order);
    }

    fn remove(&mut self, order_id: OrderId) -> Result<Arc<Order>> {
        let order = self
            .order_map
            .get(&order_id)
            .cloned()
            .ok_or_else(|| Error::OrderNotFound(format!("Order not found: {}", order_id)))?;

        let orders = self.levels.get_mut(&order.price).ok_or_else(|| {
            Error::Internal(format!("Order {} is indexed but price level {} is missing", order_id, order.price))
        })?;
        let position = orders.iter().position(|o| o.id == order_id).ok_or_else(|| {
            Error::Internal(format!("Order {} is indexed but absent from level {}", order_id, order.price))
        })?;

        orders.remove(position);
        let level_is_empty = orders.is_empty();
        self.order_map.remove(&order_id);

        // Prune the level in the same critical section so no reader sees it empty
        if level_is_empty {
            self.levels.remove(&order.price);
            debug!("Price level {} emptied and removed", order.price);
        }

        Ok(order)
    }
}

/// In-memory registry keeping both indices behind a single lock
pub struct InMemoryOrderRegistry {
    index: RwLock<OrderIndex>,
}

impl InMemoryOrderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            index: RwLock::new(OrderIndex::default()),
        }
    }
}

impl Default for InMemoryOrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRegistry for InMemoryOrderRegistry {
    fn add(&self, request: OrderRequest) -> Arc<Order> {
        let order = Arc::new(Order::from_request(request, Uuid::new_v4()));
        self.index.write().insert(order.clone());
        debug!("Added {} order {} at {} for {}", order.side, order.id, order.price, order.quantity);
        order
    }

    fn remove(&self, order_id: OrderId) -> Result<Arc<Order>> {
        let order = self.index.write().remove(order_id)?;
        debug!("Removed {} order {} at {}", order.side, order.id, order.price);
        Ok(order)
    }

    fn prices_with_orders(&self) -> BTreeSet<Price> {
        self.index.read().levels.keys().copied().collect()
    }

    fn orders_at_price(&self, price: Price, side: Side) -> Vec<Arc<Order>> {
        let index = self.index.read();
        match index.levels.get(&price) {
            Some(orders) => orders.iter().filter(|o| o.side == side).cloned().collect(),
            None => Vec::new(),
        }
    }

    fn get(&self, order_id: OrderId) -> Option<Arc<Order>> {
        self.index.read().order_map.get(&order_id).cloned()
    }

    fn len(&self) -> usize {
        self.index.read().order_map.len()
    }
}
