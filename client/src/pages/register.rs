//! Registration page. A successful sign-up is also a login: the backend
//! issues a token pair alongside the new account.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::net::api::AuthFlow;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AuthForm
            flow=AuthFlow::Register
            title="Yay, New Friend!"
            submit_label="Sign Up"
            alt_href="/login"
            alt_label="We're already friends!"
        />
    }
}
