//! Busy indicator shown while a page waits on the risk API.

use leptos::prelude::*;

/// Centered spinner above a status line, announced to screen readers.
#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite" aria-busy="true">
            <div class="spinner" aria-hidden="true"></div>
            <p class="muted">{message}</p>
        </div>
    }
}
