//! Login page: exchanges email + password for a token pair.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::net::api::AuthFlow;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <AuthForm
            flow=AuthFlow::Login
            title="Yay, You're Back!"
            submit_label="Login"
            alt_href="/register"
            alt_label="Oops! I've never been here before"
        />
    }
}
