//! Email + password form shared by the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the issued pair is written to the token store and the user is
//! sent to the dashboard; the auth provider picks up the new token on that
//! route change.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::AuthFlow;
use crate::net::types::{Credentials, FormErrors, GENERAL_ERROR_KEY};

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// Trim the email and require both fields.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<Credentials, FormErrors> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FormErrors::general(MISSING_FIELDS_MESSAGE));
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
fn FieldErrors(errors: RwSignal<FormErrors>, field: &'static str) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| !e.for_field(field).is_empty())>
            <div class="auth-form__errors">
                <p class="auth-form__errors-title">{format!("{field}:")}</p>
                <ul>
                    {move || {
                        errors
                            .with(|e| {
                                e.for_field(field)
                                    .iter()
                                    .map(|message| view! { <li>{message.clone()}</li> })
                                    .collect_view()
                            })
                    }}
                </ul>
            </div>
        </Show>
    }
}

#[component]
pub fn AuthForm(
    flow: AuthFlow,
    title: &'static str,
    submit_label: &'static str,
    alt_href: &'static str,
    alt_label: &'static str,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);
        errors.set(FormErrors::default());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::authenticate(flow, &credentials).await {
                    Ok(pair) => {
                        crate::state::tokens::TokenStore::browser().save_tokens(&pair.access, &pair.refresh);
                        navigate(crate::state::session::DASHBOARD_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => errors.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, credentials, flow);
        }
    };

    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">{title}</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email address"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <FieldErrors errors=errors field="email"/>
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <FieldErrors errors=errors field="password"/>
                <FieldErrors errors=errors field=GENERAL_ERROR_KEY/>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Processing..." } else { submit_label }}
                </button>
                <a class="auth-form__alt" href=alt_href>
                    {alt_label}
                </a>
            </form>
        </div>
    }
}
