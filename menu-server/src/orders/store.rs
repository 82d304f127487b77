//! In-memory order store with per-order serialization
//!
//! Every order lives behind its own `Mutex`, so the append-then-reprice
//! sequence is applied one request at a time per order id while operations on
//! different orders proceed in parallel. Lost updates under concurrent
//! appends are a correctness bug, not an acceptable race.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use parking_lot::Mutex;
use shared::models::{Order, OrderStatus};

pub struct OrderStore {
    orders: DashMap<u64, Arc<Mutex<Order>>>,
    next_id: AtomicU64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Allocate the next order id (monotonic)
    pub fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Insert a fully assembled order
    pub fn insert(&self, order: Order) {
        self.orders.insert(order.id, Arc::new(Mutex::new(order)));
    }

    /// Handle to one order's lock, for read-modify-write under serialization
    pub fn get(&self, id: u64) -> Option<Arc<Mutex<Order>>> {
        self.orders.get(&id).map(|entry| entry.value().clone())
    }

    /// Clone out all orders, optionally filtered by status, newest first
    pub fn snapshot(&self, filter: Option<OrderStatus>) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .map(|entry| entry.value().lock().clone())
            .filter(|order| filter.is_none_or(|status| order.status == status))
            .collect();
        orders.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
