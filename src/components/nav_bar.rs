//! Navigation Bar Component
//!
//! Tab bar for switching between the resource pages, plus sign-out.

use leptos::prelude::*;

use crate::context::{use_app_context, View};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"FitTrack"</span>
            {View::PAGES.into_iter().map(|page| {
                let is_active = move || ctx.view.get() == page;
                view! {
                    <button
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        on:click=move |_| ctx.navigate(page)
                    >
                        {page.label()}
                    </button>
                }
            }).collect_view()}
            <button class="nav-logout" on:click=move |_| ctx.logout()>"Sign out"</button>
        </nav>
    }
}
