//! Client-rendered session state and its transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthSession` is the framework-free core of the auth provider: it owns the
//! token store and the `SessionState` snapshot, and is mutated only by
//! `sync` (mount and route changes) and `logout`. Navigation is injected so
//! the transitions can be driven without a router.
//!
//! TRADE-OFFS
//! ==========
//! Only local storage is consulted. A stale cookie on the server side and a
//! populated store here can disagree; the server gate redirects to the login
//! route and `sync` then sends the user back to the dashboard. Storage
//! changes from other tabs are never observed.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::tokens::{KeyValueStore, TokenStore};

/// Route of the login screen.
pub const LOGIN_ROUTE: &str = "/login";
/// Landing route for an authenticated user.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Snapshot exposed to the component tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    /// True only until the first `sync` completes.
    pub loading: bool,
}

/// State right after logout.
pub const SIGNED_OUT: SessionState = SessionState { is_authenticated: false, loading: false };

impl Default for SessionState {
    fn default() -> Self {
        Self { is_authenticated: false, loading: true }
    }
}

/// Session state for `pathname` given what is stored, plus the redirect the
/// provider should issue, if any.
pub fn reconcile<S: KeyValueStore>(store: &TokenStore<S>, pathname: &str) -> (SessionState, Option<&'static str>) {
    let has_token = store.access_token().is_some();
    let state = SessionState { is_authenticated: has_token, loading: false };
    let redirect = (has_token && pathname == LOGIN_ROUTE).then_some(DASHBOARD_ROUTE);
    (state, redirect)
}

/// Explicit session container. One per mounted provider.
#[derive(Debug)]
pub struct AuthSession<S> {
    store: TokenStore<S>,
    state: SessionState,
}

impl<S: KeyValueStore> AuthSession<S> {
    pub fn new(store: TokenStore<S>) -> Self {
        Self { store, state: SessionState::default() }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// Re-derive state from the store for the current route. Called once on
    /// mount and again on every route change.
    pub fn sync<N: Fn(&str)>(&mut self, pathname: &str, navigate: N) -> SessionState {
        let (state, redirect) = reconcile(&self.store, pathname);
        self.state = state;
        if let Some(target) = redirect {
            navigate(target);
        }
        self.state
    }

    /// Drop both tokens, mark the session unauthenticated and go to login.
    pub fn logout<N: Fn(&str)>(&mut self, navigate: N) -> SessionState {
        self.store.clear_tokens();
        self.state = SIGNED_OUT;
        navigate(LOGIN_ROUTE);
        self.state
    }
}
