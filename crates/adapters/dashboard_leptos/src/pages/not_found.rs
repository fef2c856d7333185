use catalyst_app::routes::Route;
use leptos::prelude::*;
use leptos_router::components::A;

/// Shown inside the shell when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"Page Not Found"</h1>
            <p class="muted">"The page you are looking for does not exist."</p>
            <p><A href=Route::Dashboard.href()>"\u{2190} Back to Dashboard"</A></p>
        </div>
    }
}
