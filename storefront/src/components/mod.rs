//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketing sections and demo chrome. Anything that
//! persists goes through the `BrowserStore` provided in Leptos context.

pub mod farmer_profiles;
pub mod footer;
pub mod how_it_works;
pub mod order_success;
pub mod role_switcher;
pub mod testimonials;
pub mod welcome_banner;
