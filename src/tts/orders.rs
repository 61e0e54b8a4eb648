use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Queued,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: u64,
    pub status: OrderStatus,
    pub voice: String,
    pub speed: f32,
    pub characters: usize,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub payload: String,
}

#[derive(Debug, Default)]
struct Ledger {
    last_id: u64,
    orders: BTreeMap<u64, Order>,
}

/// In-memory record of the most recent `capacity` accepted orders.
#[derive(Debug)]
pub struct OrderBook {
    capacity: usize,
    ledger: Mutex<Ledger>,
}

impl OrderBook {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            ledger: Mutex::new(Ledger::default()),
        }
    }

    /// Store a new queued order. Ids are milliseconds since the epoch, bumped
    /// past the previous id when two orders share a millisecond.
    pub fn create(&self, voice: String, speed: f32, characters: usize, payload: String) -> Order {
        let created_at = Utc::now();
        let mut ledger = self.ledger.lock().unwrap_or_else(|e| e.into_inner());

        let millis = u64::try_from(created_at.timestamp_millis()).unwrap_or(0);
        let order_id = millis.max(ledger.last_id + 1);
        ledger.last_id = order_id;

        let order = Order {
            order_id,
            status: OrderStatus::Queued,
            voice,
            speed,
            characters,
            created_at,
            payload,
        };
        ledger.orders.insert(order_id, order.clone());

        // Ids only increase, so the first key is the oldest order.
        while ledger.orders.len() > self.capacity {
            if let Some((evicted, _)) = ledger.orders.pop_first() {
                tracing::debug!("Evicted order {}", evicted);
            }
        }

        order
    }

    pub fn get(&self, order_id: u64) -> Result<Order, AppError> {
        let ledger = self.ledger.lock().unwrap_or_else(|e| e.into_inner());
        ledger
            .orders
            .get(&order_id)
            .cloned()
            .ok_or(AppError::OrderNotFound(order_id))
    }
}
