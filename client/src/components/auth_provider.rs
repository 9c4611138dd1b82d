//! Auth context provider for the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside the router so it can observe the pathname. It owns one
//! `AuthSession` over browser storage, runs `sync` on mount and on every
//! route change, and mirrors the result into a signal for rendering. The
//! provider effect and `AuthContext::logout` are the only writers.

#[cfg(test)]
#[path = "auth_provider_test.rs"]
mod auth_provider_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{AuthSession, SessionState};
use crate::state::tokens::{BrowserStorage, TokenStore};

/// Capabilities exposed to consumers: the reactive session state and
/// `logout`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<SessionState>,
    session: StoredValue<AuthSession<BrowserStorage>>,
}

impl AuthContext {
    /// Fresh context over browser storage, still loading.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            session: StoredValue::new(AuthSession::new(TokenStore::browser())),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated
    }

    pub fn loading(&self) -> bool {
        self.state.get().loading
    }

    /// Re-derive session state for `pathname` and mirror it into the
    /// signal. Runs on mount and on every route change.
    pub fn sync_route<F>(&self, pathname: &str, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        let go = |target: &str| navigate(target, NavigateOptions::default());
        if let Some(next) = self.session.try_update_value(|session| session.sync(pathname, go)) {
            self.state.set(next);
        }
    }

    /// Clear stored tokens, flip to signed-out and navigate to login.
    ///
    /// Still clears browser storage and navigates if the provider's session
    /// has already been disposed.
    pub fn logout<F>(&self, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        let go = |target: &str| navigate(target, NavigateOptions::default());
        let next = self
            .session
            .try_update_value(|session| session.logout(go))
            .unwrap_or_else(|| AuthSession::new(TokenStore::browser()).logout(go));
        self.state.set(next);
        #[cfg(feature = "hydrate")]
        log::info!("logged out");
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Access the auth context installed by [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Provides [`AuthContext`] to `children`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);

    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move || {
        let pathname = location.pathname.get();
        auth.sync_route(&pathname, &navigate);
    });

    children()
}
