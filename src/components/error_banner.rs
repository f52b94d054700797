//! Error Banner Component

use leptos::prelude::*;

/// Shows the hook's error string, if any
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! { <div class="error-banner" role="alert">{text}</div> }
        })
    }
}
