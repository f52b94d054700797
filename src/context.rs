//! Application Context
//!
//! Shared state provided via Leptos Context API.

use fittrack_client::{auth, ApiClient};
use leptos::prelude::*;

/// Top-level views; `Login` doubles as the redirect target on 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Goals,
    Workouts,
    Habits,
}

impl View {
    /// Views reachable from the navigation bar
    pub const PAGES: [View; 3] = [View::Goals, View::Workouts, View::Habits];

    pub fn label(&self) -> &'static str {
        match self {
            View::Login => "Sign in",
            View::Goals => "Goals",
            View::Workouts => "Workouts",
            View::Habits => "Habits",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub view: ReadSignal<View>,
    /// Current view - write
    set_view: WriteSignal<View>,
    /// API client; not `Send`, so it stays in local storage
    client: StoredValue<ApiClient, LocalStorage>,
}

impl AppContext {
    pub fn new(view: (ReadSignal<View>, WriteSignal<View>), client: ApiClient) -> Self {
        Self {
            view: view.0,
            set_view: view.1,
            client: StoredValue::new_local(client),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
    }

    pub fn redirect_to_login(&self) {
        web_sys::console::log_1(&"[APP] redirecting to login".into());
        self.navigate(View::Login);
    }

    pub fn logout(&self) {
        self.client.with_value(|client| auth::logout(client.session()));
        self.redirect_to_login();
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
