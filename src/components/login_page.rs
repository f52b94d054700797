//! Login Page Component
//!
//! Sign-in and registration forms. A successful response stores the token in
//! the session and moves on to the goals page.

use fittrack_client::auth::{self, Credentials, Registration};
use fittrack_client::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorBanner;
use crate::context::{use_app_context, View};

fn failure_message(err: &ApiError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_string()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (registering, set_registering) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let (firstname, set_firstname) = signal(String::new());
    let (lastname, set_lastname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let client = ctx.client();

        if registering.get() {
            let registration = Registration {
                firstname: firstname.get(),
                lastname: lastname.get(),
                email: email.get(),
                password: password.get(),
                confirm_password: confirm_password.get(),
            };
            if let Err(message) = registration.validate() {
                set_error.set(Some(message));
                return;
            }
            set_submitting.set(true);
            spawn_local(async move {
                match auth::register(&client, &registration).await {
                    Ok(()) => ctx.navigate(View::Goals),
                    Err(err) => set_error.set(Some(failure_message(&err, "Registration failed"))),
                }
                set_submitting.set(false);
            });
        } else {
            set_submitting.set(true);
            let credentials = Credentials {
                email: email.get(),
                password: password.get(),
            };
            spawn_local(async move {
                match auth::login(&client, &credentials).await {
                    Ok(()) => ctx.navigate(View::Goals),
                    Err(err) => set_error.set(Some(failure_message(&err, "Login failed"))),
                }
                set_submitting.set(false);
            });
        }
    };

    view! {
        <section class="page login-page">
            <h1>{move || if registering.get() { "Create account" } else { "Sign in" }}</h1>

            <ErrorBanner message=error />

            <form class="login-form" on:submit=on_submit>
                <Show when=move || registering.get()>
                    <input
                        type="text"
                        placeholder="First name"
                        prop:value=move || firstname.get()
                        on:input=move |ev| set_firstname.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Last name"
                        prop:value=move || lastname.get()
                        on:input=move |ev| set_lastname.set(event_target_value(&ev))
                    />
                </Show>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <Show when=move || registering.get()>
                    <input
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    />
                </Show>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if registering.get() { "Register" } else { "Sign in" }}
                </button>
            </form>

            <button
                class="link-btn"
                on:click=move |_| {
                    set_error.set(None);
                    set_registering.update(|v| *v = !*v);
                }
            >
                {move || if registering.get() { "Have an account? Sign in" } else { "New here? Register" }}
            </button>
        </section>
    }
}
