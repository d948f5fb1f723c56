//! First-visit welcome banner, dismissed once per browser.

use leptos::prelude::*;

use crate::state::session::SeenWelcome;
use crate::storage::BrowserStore;

#[component]
pub fn WelcomeBanner() -> impl IntoView {
    let store = expect_context::<BrowserStore>();
    // Hidden until the effect reads storage, so SSR and hydrate markup agree.
    let visible = RwSignal::new(false);

    Effect::new(move || {
        visible.set(!store.load::<SeenWelcome>().unwrap_or(false));
    });

    let on_dismiss = move |_| {
        store.save::<SeenWelcome>(&true);
        visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div class="welcome-banner" role="status">
                <p>
                    <strong>"Welcome to Farmbox!"</strong>
                    " Your first box ships free. Pick a plan and we'll handle the rest."
                </p>
                <button class="welcome-banner__close" on:click=on_dismiss title="Dismiss">
                    "✕"
                </button>
            </div>
        </Show>
    }
}
