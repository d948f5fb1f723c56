//! Marketing home page.

use leptos::prelude::*;

use crate::components::farmer_profiles::FarmerProfiles;
use crate::components::how_it_works::{HowItWorks, SECTION_ID as HOW_IT_WORKS_ID};
use crate::components::testimonials::Testimonials;
use crate::components::welcome_banner::WelcomeBanner;
use crate::util::scroll::{scroll_to_section, section_href};

#[component]
pub fn HomePage() -> impl IntoView {
    let on_learn_more = move |ev: leptos::ev::MouseEvent| {
        if scroll_to_section(HOW_IT_WORKS_ID) {
            ev.prevent_default();
        }
    };

    view! {
        <WelcomeBanner/>
        <header class="hero">
            <h1 class="hero__title">"Farm-fresh groceries, harvested to order"</h1>
            <p class="hero__subtitle">
                "Seasonal produce, eggs, and bread from farms within 100 miles, delivered weekly."
            </p>
            <div class="hero__actions">
                <a class="button button--primary" href="/demo/customer">"Start your box"</a>
                <a class="button button--ghost" href=section_href(HOW_IT_WORKS_ID) on:click=on_learn_more>
                    "How it works"
                </a>
            </div>
        </header>
        <HowItWorks/>
        <FarmerProfiles/>
        <Testimonials/>
    }
}
