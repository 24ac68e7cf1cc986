//! Top navigation bar.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

/// Public navigation link shown on the landing page.
pub struct NavLink {
    pub label: &'static str,
    pub to: &'static str,
}

/// Marketing links for the public landing sections.
pub const PUBLIC_NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", to: "/#features" },
    NavLink { label: "Pricing", to: "/#pricing" },
    NavLink { label: "FAQ", to: "/#faq" },
];

/// Navigation bar — public links plus a session-aware corner: login and
/// register while anonymous, dashboard link once signed in.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <nav class="nav-bar">
            <A href="/">
                <span class="nav-bar__brand">"Authstack"</span>
            </A>
            <div class="nav-bar__links">
                {PUBLIC_NAV_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.to class="nav-bar__link">{link.label}</a> })
                    .collect_view()}
            </div>
            <div class="nav-bar__session">
                <Show
                    when=move || auth.get().user.is_some()
                    fallback=|| {
                        view! {
                            <A href="/login">"Log in"</A>
                            <A href="/register">"Sign up"</A>
                        }
                    }
                >
                    <A href="/dashboard">"Dashboard"</A>
                </Show>
            </div>
        </nav>
    }
}
