//! Internal demo views, one per staff or customer role.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/demo` lists the roles and `/demo/:role` shows a placeholder dashboard for
//! the identity the role switcher stored. Only the customer view (sample
//! order) and the security view (admin check + illustrative fetch) do
//! anything beyond rendering.

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::role_switcher::RoleSwitcher;
use crate::net::api_protection::{AccessError, require_security_admin};
use crate::state::demo_role::DemoRole;
use crate::state::orders::{self, Order};
use crate::state::session::{
    CurrentCorporateAccount, CurrentSecurityAdmin, CurrentSiteAdmin, CurrentUser, CurrentWarehouseManager,
};
use crate::storage::{BrowserStore, StorageBackend, Store};

#[component]
pub fn DemoPage() -> impl IntoView {
    let store = expect_context::<BrowserStore>();
    let params = use_params_map();
    let role = Memo::new(move |_| {
        params
            .with(|p| p.get("role"))
            .and_then(|slug| DemoRole::from_slug(&slug))
    });

    // Filled in after hydration so server and client markup agree.
    let signed_in = RwSignal::new(None::<String>);
    Effect::new(move || {
        let current = role.get();
        signed_in.set(current.and_then(|r| signed_in_as(&store, r)));
    });

    view! {
        <div class="demo-page">
            <RoleSwitcher/>
            {move || match role.get() {
                None => view! { <RoleChooser/> }.into_any(),
                Some(DemoRole::Customer) => view! { <CustomerDemo signed_in=signed_in/> }.into_any(),
                Some(DemoRole::SecurityAdmin) => view! { <SecurityDemo/> }.into_any(),
                Some(other) => view! { <StaffDemo role=other signed_in=signed_in/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn RoleChooser() -> impl IntoView {
    view! {
        <section class="demo-view">
            <h1>"Demo views"</h1>
            <p>"Pick a role to preview its dashboard. Demo sessions live in this browser only."</p>
            <ul class="demo-view__roles">
                {DemoRole::ALL
                    .into_iter()
                    .map(|role| view! { <li><a href=role.view_path()>{role.label()}</a></li> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn CustomerDemo(signed_in: RwSignal<Option<String>>) -> impl IntoView {
    let store = expect_context::<BrowserStore>();
    let navigate = use_navigate();

    let on_place_order = move |_| {
        orders::record_order(&store, Order::sample_box());
        navigate("/order-success", NavigateOptions::default());
    };

    view! {
        <section class="demo-view">
            <h1>"Customer view"</h1>
            <p>{move || greeting(signed_in.get().as_deref())}</p>
            <p>"This week's box: heirloom tomatoes, pasture-raised eggs, rainbow carrots, sourdough."</p>
            <button class="button button--primary" on:click=on_place_order>
                "Place sample order"
            </button>
        </section>
    }
}

#[component]
fn StaffDemo(role: DemoRole, signed_in: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <section class="demo-view">
            <h1>{format!("{} dashboard", role.label())}</h1>
            <p>{move || greeting(signed_in.get().as_deref())}</p>
            <p class="demo-view__note">"This dashboard is a placeholder in the demo build."</p>
        </section>
    }
}

#[component]
fn SecurityDemo() -> impl IntoView {
    let store = expect_context::<BrowserStore>();
    let access = RwSignal::new(None::<Result<String, AccessError>>);
    let audit = RwSignal::new(String::new());

    Effect::new(move || {
        access.set(Some(require_security_admin(&store).map(|admin| admin.email)));
    });

    let on_fetch_audit = move |_| {
        audit.set("Loading audit log...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api_protection::security_admin_fetch::<_, serde_json::Value>(
                &store,
                crate::net::api_protection::AdminRequest::get("/api/security/audit-log"),
            )
            .await;
            audit.set(audit_message(&result));
        });
    };

    view! {
        <section class="demo-view">
            <h1>"Security dashboard"</h1>
            <p class="demo-view__access">{move || access_message(access.get().as_ref())}</p>
            <p class="demo-view__note">
                "Access is decided from browser storage for the demo only. The server must verify real admin credentials."
            </p>
            <button class="button button--ghost" on:click=on_fetch_audit>
                "Fetch audit log"
            </button>
            <Show when=move || !audit.get().is_empty()>
                <p class="demo-view__result">{move || audit.get()}</p>
            </Show>
        </section>
    }
}

/// Short description of the identity stored for `role`.
fn signed_in_as<B: StorageBackend>(store: &Store<B>, role: DemoRole) -> Option<String> {
    match role {
        DemoRole::Customer => store
            .load::<CurrentUser>()
            .map(|c| format!("{} ({})", c.name, c.email)),
        DemoRole::CorporateAccount => store
            .load::<CurrentCorporateAccount>()
            .map(|a| format!("{} ({} seats)", a.company_name, a.seats)),
        DemoRole::SiteAdmin => store.load::<CurrentSiteAdmin>().map(|a| a.name),
        DemoRole::WarehouseManager => store
            .load::<CurrentWarehouseManager>()
            .map(|m| format!("{} · {}", m.name, m.warehouse)),
        DemoRole::SecurityAdmin => store
            .load::<CurrentSecurityAdmin>()
            .map(|a| if a.name.is_empty() { a.email } else { a.name }),
    }
}

fn greeting(signed_in: Option<&str>) -> String {
    match signed_in {
        Some(who) => format!("Signed in as {who}."),
        None => "Not signed in. Pick a role above to load a demo identity.".to_owned(),
    }
}

fn access_message(access: Option<&Result<String, AccessError>>) -> String {
    match access {
        None => "Checking access...".to_owned(),
        Some(Ok(email)) => format!("Access granted for {email}."),
        Some(Err(e)) => e.to_string(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn audit_message(result: &Result<serde_json::Value, AccessError>) -> String {
    match result {
        Ok(serde_json::Value::Array(entries)) => format!("{} audit entries loaded.", entries.len()),
        Ok(_) => "Audit log loaded.".to_owned(),
        Err(e) => e.to_string(),
    }
}
