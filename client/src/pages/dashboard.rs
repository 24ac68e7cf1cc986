//! Dashboard page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected route. It installs the unauthenticated-redirect
//! guard, then fetches the full profile once an identity is confirmed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use identity::UserProfile;

use crate::components::nav::NavBar;
use crate::state::auth::{AuthState, SessionReady};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ready = expect_context::<SessionReady>();
    let navigate = use_navigate();

    // Protected route: redirect to /login once the bounded bootstrap wait
    // settles without a confirmed session.
    install_unauth_redirect(auth, ready, navigate);

    let profile = RwSignal::new(None::<UserProfile>);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if auth.get().user.is_none() || profile.get_untracked().is_some() {
            return;
        }
        leptos::task::spawn_local(async move {
            if let Some(fetched) = crate::net::api::fetch_profile().await {
                profile.set(Some(fetched));
            }
        });
    });

    let on_logout = move |_| {
        // The guard effect handles the redirect once identity clears.
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::auth::logout(auth).await;
        });
    };

    let email = move || {
        auth.get()
            .user
            .map(|user| user.email)
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <header class="dashboard-header">
                <h1>"Dashboard"</h1>
                <div class="dashboard-header__session">
                    <span class="dashboard-header__email">{email}</span>
                    <button class="dashboard-header__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </header>
            <section class="dashboard-profile">
                <h2>"Profile"</h2>
                <Show
                    when=move || profile.get().is_some()
                    fallback=|| view! { <p class="dashboard-profile__empty">"Loading profile..."</p> }
                >
                    {move || {
                        profile
                            .get()
                            .map(|p| {
                                view! {
                                    <dl class="dashboard-profile__facts">
                                        <dt>"Email"</dt>
                                        <dd>{p.email}</dd>
                                        <dt>"Member since"</dt>
                                        <dd>{p.created_at}</dd>
                                        <dt>"Last updated"</dt>
                                        <dd>{p.updated_at}</dd>
                                    </dl>
                                }
                            })
                    }}
                </Show>
            </section>
        </div>
    }
}
