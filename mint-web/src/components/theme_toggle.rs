//! Color scheme toggle button

use leptos::prelude::*;

use crate::state::theme::{ColorScheme, ThemeController};

#[component]
pub fn ThemeToggle(theme: ThemeController) -> impl IntoView {
    let label = move || match theme.scheme() {
        ColorScheme::Light => "Dark mode",
        ColorScheme::Dark => "Light mode",
    };

    view! {
        <button class="btn btn-ghost" on:click=move |_| theme.toggle()>
            {label}
        </button>
    }
}
