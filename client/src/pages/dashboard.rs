//! Dashboard page, the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests only reach this page after the server gate has accepted the
//! cookie copy of the access token. The page itself reads session state from
//! the auth context and owns the logout button.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_provider::use_auth;
use crate::state::session::SessionState;

/// Status line for the current session snapshot.
pub(crate) fn status_text(state: SessionState) -> &'static str {
    match (state.loading, state.is_authenticated) {
        (true, _) => "Checking your session...",
        (false, true) => "You're signed in.",
        (false, false) => "You're signed out.",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| auth.logout(&navigate);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Your Notes"</h1>
                <button class="logout-button" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <p class="dashboard-status">{move || status_text(auth.state.get())}</p>
        </div>
    }
}
