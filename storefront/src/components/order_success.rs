//! Order confirmation card shown after checkout.

#[cfg(test)]
#[path = "order_success_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::state::orders::Order;
use crate::util::format::{format_cents, pluralize_items};

#[component]
pub fn OrderSuccess(order: Order, #[prop(default = "/")] continue_href: &'static str) -> impl IntoView {
    let headline = delivery_message(&order);
    let count = pluralize_items(order.item_count());
    let total = format_cents(order.total_cents);

    view! {
        <section class="order-success">
            <div class="order-success__check" aria-hidden="true">"✓"</div>
            <h1>"Thanks! Your box is on its way."</h1>
            <p class="order-success__headline">{headline}</p>
            <dl class="order-success__meta">
                <dt>"Order"</dt>
                <dd>{order.id.clone()}</dd>
                <dt>"Status"</dt>
                <dd>{order.status.label()}</dd>
            </dl>
            <ul class="order-success__items">
                {order
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="order-success__item">
                                <span>{format!("{} × {}", item.quantity, item.name)}</span>
                                <span>{format_cents(item.line_cents())}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="order-success__total">
                <span>{count}</span>
                <strong>{total}</strong>
            </p>
            <a class="button button--primary" href=continue_href>
                "Keep shopping"
            </a>
        </section>
    }
}

fn delivery_message(order: &Order) -> String {
    match order.delivery_day.as_deref().map(str::trim) {
        Some(day) if !day.is_empty() => format!("Arriving {day}, harvested the day before."),
        _ => "We'll email your delivery window shortly.".to_owned(),
    }
}
