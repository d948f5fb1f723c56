use super::*;
use crate::state::orders::OrderItem;

fn order(delivery_day: Option<&str>) -> Order {
    Order::new(
        vec![OrderItem { name: "Kale".to_owned(), quantity: 1, unit_cents: 300 }],
        delivery_day.map(str::to_owned),
    )
}

#[test]
fn delivery_message_names_the_day() {
    assert_eq!(delivery_message(&order(Some("Thursday"))), "Arriving Thursday, harvested the day before.");
}

#[test]
fn delivery_message_falls_back_without_day() {
    assert_eq!(delivery_message(&order(None)), "We'll email your delivery window shortly.");
    assert_eq!(delivery_message(&order(Some("  "))), "We'll email your delivery window shortly.");
}
