//! FitTrack Frontend App
//!
//! Builds the API client, provides the app context and switches between the
//! top-level pages.

use fittrack_client::{ApiClient, ClientConfig, Session};
use leptos::prelude::*;

use crate::components::{GoalsPage, HabitsPage, LoginPage, NavBar, WorkoutsPage};
use crate::context::{AppContext, View};
use crate::storage::LocalStorageStore;

fn build_client() -> ApiClient {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    let config = ClientConfig::from_env().with_origin(&origin);
    tracing::info!(base_url = %config.base_url, "api client configured");
    ApiClient::with_reqwest(config, Session::new(LocalStorageStore))
}

#[component]
pub fn App() -> impl IntoView {
    let client = build_client();
    let initial = if client.session().is_authenticated() {
        View::Goals
    } else {
        View::Login
    };
    let (current_view, set_current_view) = signal(initial);

    // Provide context to all children
    provide_context(AppContext::new((current_view, set_current_view), client));

    view! {
        <div class="app-layout">
            <Show when=move || current_view.get() != View::Login>
                <NavBar />
            </Show>
            <main class="main-content">
                {move || match current_view.get() {
                    View::Login => view! { <LoginPage /> }.into_any(),
                    View::Goals => view! { <GoalsPage /> }.into_any(),
                    View::Workouts => view! { <WorkoutsPage /> }.into_any(),
                    View::Habits => view! { <HabitsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
