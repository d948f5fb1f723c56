//! Order-success route showing the most recent stored order.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::order_success::OrderSuccess;
use crate::state::orders::{self, Order};
use crate::storage::BrowserStore;

#[component]
pub fn OrderSuccessPage() -> impl IntoView {
    let store = expect_context::<BrowserStore>();
    let order = RwSignal::new(None::<Order>);

    Effect::new(move || {
        order.set(orders::latest_order(&store));
    });

    view! {
        <div class="order-success-page">
            {move || match order.get() {
                Some(order) => view! { <OrderSuccess order=order/> }.into_any(),
                None => view! {
                    <section class="order-success order-success--empty">
                        <h1>"No recent order"</h1>
                        <p>"Orders you place from this browser show up here."</p>
                        <a class="button button--primary" href="/">"Back to the farm stand"</a>
                    </section>
                }
                .into_any(),
            }}
        </div>
    }
}
