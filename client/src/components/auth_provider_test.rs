use std::cell::RefCell;

use leptos::reactive::owner::Owner;

use super::*;
use crate::state::session::{LOGIN_ROUTE, SIGNED_OUT};

fn with_owner(f: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn new_context_starts_loading() {
    with_owner(|| {
        let auth = AuthContext::new();
        assert!(auth.loading());
        assert!(!auth.is_authenticated());
    });
}

#[test]
fn sync_route_mirrors_session_into_signal() {
    with_owner(|| {
        let visits = RefCell::new(Vec::<String>::new());
        let navigate = |path: &str, _: NavigateOptions| visits.borrow_mut().push(path.to_owned());
        let auth = AuthContext::new();

        auth.sync_route(LOGIN_ROUTE, &navigate);

        assert_eq!(auth.state.get_untracked(), SessionState { is_authenticated: false, loading: false });
        assert!(visits.borrow().is_empty(), "no token means no redirect away from login");
    });
}

#[test]
fn logout_signs_out_and_navigates_to_login_once() {
    with_owner(|| {
        let visits = RefCell::new(Vec::<String>::new());
        let navigate = |path: &str, _: NavigateOptions| visits.borrow_mut().push(path.to_owned());
        let auth = AuthContext::new();
        auth.sync_route("/dashboard", &navigate);

        auth.logout(&navigate);

        assert_eq!(auth.state.get_untracked(), SIGNED_OUT);
        assert_eq!(*visits.borrow(), vec![LOGIN_ROUTE.to_owned()]);
    });
}

#[test]
fn logout_after_session_disposed_still_navigates() {
    with_owner(|| {
        let visits = RefCell::new(Vec::<String>::new());
        let navigate = |path: &str, _: NavigateOptions| visits.borrow_mut().push(path.to_owned());
        let auth = AuthContext::new();
        auth.session.dispose();

        auth.logout(&navigate);

        assert_eq!(auth.state.get_untracked(), SIGNED_OUT);
        assert_eq!(*visits.borrow(), vec![LOGIN_ROUTE.to_owned()]);
    });
}
