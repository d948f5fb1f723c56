//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::pages::{demo::DemoPage, home::HomePage, order_success::OrderSuccessPage};
use crate::storage::browser_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the browser store to every page and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(browser_store());

    view! {
        <Stylesheet id="leptos" href="/pkg/farmbox.css"/>
        <Title text="Farmbox · Farm-fresh groceries delivered"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("order-success") view=OrderSuccessPage/>
                    <Route path=StaticSegment("demo") view=DemoPage/>
                    <Route path=(StaticSegment("demo"), ParamSegment("role")) view=DemoPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
