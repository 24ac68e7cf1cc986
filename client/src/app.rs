//! App root: session store ownership, bootstrap synchronization, routes.
//!
//! ARCHITECTURE
//! ============
//! The root component constructs the session store and the bootstrap
//! signal and provides both via context — no module-level singletons.
//! Identity reaches the store by one of two paths, never both doing work:
//! the SSR render seeds it from the request context the server middleware
//! already verified, and the hydrated client reconciles once over HTTP.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::pages;
use crate::state::auth::{AuthState, SessionReady};

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

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ready = SessionReady::new();
    provide_context(auth);
    provide_context(ready.clone());

    // Server render path: the identity middleware already verified the
    // session cookie for this request, so seed the store from the request
    // context instead of issuing a redundant who-am-I call.
    #[cfg(feature = "ssr")]
    if let Some(parts) = use_context::<http::request::Parts>() {
        if let Some(identity::RequestIdentity(Some(user))) = parts.extensions.get::<identity::RequestIdentity>() {
            auth.update(|s| s.user = Some(user.clone()));
        }
    }

    // Client path: reconcile with the server's view exactly once after
    // hydration. Covers navigations the server path never saw.
    #[cfg(feature = "hydrate")]
    {
        let ready = ready.clone();
        leptos::task::spawn_local(async move {
            crate::state::auth::bootstrap(auth, ready).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/authstack.css"/>
        <Title text="Authstack"/>
        <Router>
            <Routes fallback=|| "Not found.">
                <Route path=StaticSegment("") view=pages::home::HomePage/>
                <Route path=StaticSegment("login") view=pages::login::LoginPage/>
                <Route path=StaticSegment("register") view=pages::register::RegisterPage/>
                <Route path=StaticSegment("dashboard") view=pages::dashboard::DashboardPage/>
            </Routes>
        </Router>
    }
}
