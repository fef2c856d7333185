//! Login page.
//!
//! Sign-in is simulated: any input is accepted after a short wait and the
//! user lands on the dashboard.

use catalyst_app::routes::Route;
use catalyst_app::services::login_service::{LoginForm, LoginService, SimulatedAuthenticator};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::config::use_config;
use crate::timer::GlooDelay;

#[component]
pub fn Login() -> impl IntoView {
    let config = use_config();
    let form = RwSignal::new(LoginForm::from_config(&config.login));
    let service = LoginService::new(SimulatedAuthenticator::new(GlooDelay, config.login_delay()));
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        let service = service.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = service.sign_in(credentials).await;
            form.update(LoginForm::finish);
            match result {
                Ok(_) => navigate(&Route::Dashboard.href(), Default::default()),
                Err(err) => log::warn!("sign-in failed: {err}"),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="card login-card">
                <div class="login-brand">
                    <span class="brand-mark">"\u{1F6E1}"</span>
                    <h1>"CATALYST"</h1>
                    <p class="muted">"Proactive Risk Management Dashboard"</p>
                </div>

                <form on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />

                    <div class="login-options">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.remember_me)
                                on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <a href="#" class="muted">"Forgot password?"</a>
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || form.with(LoginForm::is_submitting)
                    >
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                </form>

                <p class="muted illustrative">"Sign-in is simulated. No credentials are checked."</p>
                <p class="muted copyright">"\u{00A9} 2026 Cosmic Codex. All rights reserved."</p>
            </div>
        </div>
    }
}
