use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::{DEFAULT_WAITLIST_ENDPOINT, ENDPOINT_META_NAME};
use crate::core::{Config, WaitlistConfig};
use crate::ui::{LandingPage, NotFoundPage};

/// HTML document around the app.
///
/// The server provides its `Config` as context; the waitlist endpoint is
/// rendered into a `<meta>` tag for the hydrated client to pick up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let endpoint = use_context::<Config>()
        .map(|config| WaitlistConfig::from(&config).endpoint)
        .unwrap_or_else(|| DEFAULT_WAITLIST_ENDPOINT.to_string());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=ENDPOINT_META_NAME content=endpoint/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/st4ck-landing.css"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
