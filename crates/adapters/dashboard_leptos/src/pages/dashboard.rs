//! Dashboard page: headline stats, weekly trend and critical alerts.

use catalyst_app::lifecycle::ViewScope;
use catalyst_app::routes::Route;
use catalyst_app::services::dashboard_service::{DashboardService, DashboardView};
use catalyst_domain::customer::Customer;
use catalyst_domain::demo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::HttpRiskApi;
use crate::components::{Loading, StatCard, TrendChart};
use crate::config::use_config;

#[component]
fn AlertRow(customer: Customer) -> impl IntoView {
    let href = Route::Customer(customer.id.clone()).href();
    let badge_class = format!("badge tone-{}", customer.risk_level.tone().as_str());

    view! {
        <li>
            <A href=href>
                <div class="alert-row">
                    <div>
                        <span class="alert-name">{customer.name}</span>
                        <span class="muted">{format!("Stress Score: {}", customer.stress_score)}</span>
                    </div>
                    <span class=badge_class>{customer.risk_level.to_string()}</span>
                </div>
            </A>
        </li>
    }
}

#[component]
fn CriticalAlerts(customers: Vec<Customer>) -> impl IntoView {
    let body = if customers.is_empty() {
        view! { <p class="muted">"No high risk customers found."</p> }.into_any()
    } else {
        view! {
            <ul class="alert-list">
                {customers
                    .into_iter()
                    .map(|customer| view! { <AlertRow customer=customer/> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="card alerts">
            <div class="card-header">
                <h3>"Critical Alerts"</h3>
                <A href=Route::Customers.href()>"View All"</A>
            </div>
            {body}
        </div>
    }
}

/// Dashboard page.
///
/// Loads once on mount and again on every "Retry". A response that arrives
/// after the page is gone is dropped.
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_config();
    let service = DashboardService::new(HttpRiskApi::new(config.clone()))
        .with_alert_limit(config.dashboard.critical_alert_limit);
    let scope = ViewScope::new();
    let (state, set_state) = signal(DashboardView::loading());
    let (reload, set_reload) = signal(0_u32);

    on_cleanup({
        let scope = scope.clone();
        move || scope.close()
    });

    Effect::new(move |_| {
        reload.track();
        set_state.set(DashboardView::loading());
        let scope = scope.clone();
        let service = service.clone();
        spawn_local(async move {
            if let Some(loaded) = scope.run(service.load()).await {
                set_state.set(loaded);
            }
        });
    });

    let retry = move |_| set_reload.update(|n| *n += 1);

    view! {
        <div class="dashboard">
            {move || {
                let current = state.get();
                if current.loading {
                    return view! { <Loading message="Loading dashboard data..."/> }.into_any();
                }
                let banner = current.error.map(|message| view! {
                    <div class="error-banner">
                        <p>{message}</p>
                        <button type="button" class="btn btn-secondary" on:click=retry>"Retry"</button>
                    </div>
                });
                view! {
                    {banner}
                    <div class="stat-grid">
                        {current.stats.into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
                    </div>
                    <div class="dashboard-grid">
                        <TrendChart title="Portfolio Stress Trend" points=demo::weekly_trend()>
                            <select class="range-select">
                                <option>"Last 7 Days"</option>
                                <option>"Last 30 Days"</option>
                            </select>
                        </TrendChart>
                        <CriticalAlerts customers=current.critical_customers/>
                    </div>
                    <p class="muted illustrative">"Weekly trend is illustrative."</p>
                }
                .into_any()
            }}
        </div>
    }
}
