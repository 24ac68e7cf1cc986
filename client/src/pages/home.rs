//! Public landing page.

use leptos::prelude::*;

use crate::components::nav::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <NavBar/>
            <main class="home-hero">
                <h1>"Ship your next app on Authstack"</h1>
                <p>"Cookie sessions, SSR-aware auth state, and a dashboard skeleton out of the box."</p>
            </main>
            <section id="features" class="home-section">
                <h2>"Features"</h2>
                <p>"Signed session cookies, protected routes, and a reactive session store."</p>
            </section>
            <section id="pricing" class="home-section">
                <h2>"Pricing"</h2>
                <p>"Free while you build."</p>
            </section>
            <section id="faq" class="home-section">
                <h2>"FAQ"</h2>
                <p>"Questions? The dashboard answers most of them."</p>
            </section>
        </div>
    }
}
