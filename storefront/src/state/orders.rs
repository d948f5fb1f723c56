//! Orders placed from this browser.
//!
//! DESIGN
//! ======
//! The whole list lives under one key and is rewritten on every change
//! (last-write-wins). Nothing here talks to fulfilment: an order is only a
//! receipt for the order-success page.

#[cfg(test)]
#[path = "orders_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::{Entry, StorageBackend, StorageKey, Store};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Packed,
    Delivered,
    Cancelled,
    /// Any status this build does not know, such as one written by a newer
    /// release. Saved back as `"unknown"`.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Packed => "Packed",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_cents: u64,
}

impl OrderItem {
    pub fn line_cents(&self) -> u64 {
        u64::from(self.quantity) * self.unit_cents
    }
}

/// A placed order. Only `id` is required so older, sparser records still load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_cents: u64,
    #[serde(default)]
    pub delivery_day: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    /// New confirmed order with a generated id and a total summed from `items`.
    pub fn new(items: Vec<OrderItem>, delivery_day: Option<String>) -> Self {
        let total_cents = items.iter().map(OrderItem::line_cents).sum();
        Self { id: new_order_id(), items, total_cents, delivery_day, status: OrderStatus::Confirmed }
    }

    /// The weekly harvest box used by the customer demo view.
    pub fn sample_box() -> Self {
        let items = vec![
            OrderItem { name: "Heirloom tomatoes (1 lb)".to_owned(), quantity: 2, unit_cents: 450 },
            OrderItem { name: "Pasture-raised eggs (dozen)".to_owned(), quantity: 1, unit_cents: 699 },
            OrderItem { name: "Rainbow carrots (bunch)".to_owned(), quantity: 1, unit_cents: 325 },
            OrderItem { name: "Sourdough loaf".to_owned(), quantity: 1, unit_cents: 800 },
        ];
        Self::new(items, Some("Thursday".to_owned()))
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

fn new_order_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("FB-{}", simple[..8].to_ascii_uppercase())
}

pub struct Orders;

impl Entry for Orders {
    const KEY: StorageKey = StorageKey::Orders;
    type Value = Vec<Order>;
}

/// Every stored order, oldest first. Empty when nothing (or nothing
/// readable) is stored.
pub fn all_orders<B: StorageBackend>(store: &Store<B>) -> Vec<Order> {
    store.load::<Orders>().unwrap_or_default()
}

/// Append `order` to the stored list and report whether it was persisted.
///
/// A stored list that is not JSON is replaced. A list that is JSON but does
/// not decode as orders is left untouched and the new order is dropped.
pub fn record_order<B: StorageBackend>(store: &Store<B>, order: Order) -> bool {
    let mut orders = match store.try_get::<Vec<Order>>(Orders::KEY) {
        Ok(orders) => orders.unwrap_or_default(),
        Err(e) if e.is_unparseable() => {
            log::warn!("replacing unreadable order list: {e}");
            Vec::new()
        }
        Err(e) => {
            log::warn!("not recording order {}: {e}", order.id);
            return false;
        }
    };
    orders.push(order);
    match store.try_set(Orders::KEY, &orders) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to persist orders: {e}");
            false
        }
    }
}

pub fn latest_order<B: StorageBackend>(store: &Store<B>) -> Option<Order> {
    all_orders(store).pop()
}

pub fn find_order<B: StorageBackend>(store: &Store<B>, id: &str) -> Option<Order> {
    all_orders(store).into_iter().find(|order| order.id == id)
}
