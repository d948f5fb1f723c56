//! Role switcher for internal demo views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Staff use this during demos to hop between the customer view and the
//! staff dashboards. It writes demo identities to client storage only and
//! does not authenticate anyone.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::demo_role::{self, DemoRole};
use crate::storage::BrowserStore;

#[component]
pub fn RoleSwitcher() -> impl IntoView {
    let store = expect_context::<BrowserStore>();
    let navigate = use_navigate();
    let active = RwSignal::new(None::<DemoRole>);

    Effect::new(move || {
        active.set(demo_role::active_role(&store));
    });

    let buttons = DemoRole::ALL
        .into_iter()
        .map(|role| {
            let navigate = navigate.clone();
            let on_click = move |_| {
                let path = demo_role::switch_role(&store, role);
                active.set(Some(role));
                navigate(&path, NavigateOptions::default());
            };
            view! {
                <button
                    class=move || role_button_class(role, active.get())
                    aria-pressed=move || (active.get() == Some(role)).to_string()
                    on:click=on_click
                >
                    {role.label()}
                </button>
            }
        })
        .collect_view();

    let navigate_home = navigate.clone();
    let on_sign_out = move |_| {
        demo_role::sign_out(&store);
        active.set(None);
        navigate_home("/demo", NavigateOptions::default());
    };

    view! {
        <div class="role-switcher">
            <span class="role-switcher__label">"View as"</span>
            {buttons}
            <button class="role-switcher__button role-switcher__button--ghost" on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}

fn role_button_class(role: DemoRole, active: Option<DemoRole>) -> &'static str {
    if active == Some(role) {
        "role-switcher__button role-switcher__button--active"
    } else {
        "role-switcher__button"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_role_gets_active_class() {
        assert_eq!(
            role_button_class(DemoRole::SiteAdmin, Some(DemoRole::SiteAdmin)),
            "role-switcher__button role-switcher__button--active"
        );
    }

    #[test]
    fn inactive_roles_get_plain_class() {
        assert_eq!(role_button_class(DemoRole::SiteAdmin, None), "role-switcher__button");
        assert_eq!(
            role_button_class(DemoRole::SiteAdmin, Some(DemoRole::Customer)),
            "role-switcher__button"
        );
    }
}
