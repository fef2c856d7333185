//! Customer detail page: profile, stress trend, risk factors and interventions.

use catalyst_app::lifecycle::ViewScope;
use catalyst_app::routes::Route;
use catalyst_app::services::customer_service::{CustomerDetailService, CustomerView};
use catalyst_domain::customer::{CreditDetails, Customer};
use catalyst_domain::demo::RISK_FACTORS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api::HttpRiskApi;
use crate::components::{InterventionPanel, Loading, TrendChart};
use crate::config::use_config;

#[component]
fn MetricTile(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] danger: bool,
) -> impl IntoView {
    let value_class = if danger { "metric-value tone-danger" } else { "metric-value" };
    view! {
        <div class="card metric-tile">
            <span class="stat-label">{label}</span>
            <span class=value_class>{value}</span>
        </div>
    }
}

fn figure(value: Option<f64>) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v:.0}"))
}

#[component]
fn CreditProfile(details: CreditDetails) -> impl IntoView {
    view! {
        <div class="card credit-profile">
            <h3>"Credit Profile"</h3>
            <dl>
                <dt>"Credit Score"</dt>
                <dd>{figure(details.credit_score)}</dd>
                <dt>"Monthly Income"</dt>
                <dd>{figure(details.monthly_income)}</dd>
                <dt>"EMI Amount"</dt>
                <dd>{figure(details.emi_amount)}</dd>
            </dl>
        </div>
    }
}

#[component]
fn RiskFactors() -> impl IntoView {
    view! {
        <div class="card risk-factors">
            <div class="card-header">
                <h3>"Risk Contributing Factors"</h3>
                <span class="muted illustrative">"Illustrative"</span>
            </div>
            <ul>
                {RISK_FACTORS
                    .iter()
                    .map(|factor| {
                        let class = format!("badge tone-{}", factor.tone.as_str());
                        view! {
                            <li class="risk-factor">
                                <span>{factor.label}</span>
                                <span class=class>{factor.assessment}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn CustomerProfile(customer: Customer) -> impl IntoView {
    let badge_class = format!("badge tone-{}", customer.risk_level.tone().as_str());
    let trend = customer.stress_trend();

    view! {
        <div class="customer-detail">
            <p><A href=Route::Dashboard.href()>"\u{2190} Back to Dashboard"</A></p>
            <div class="customer-header">
                <div>
                    <h1>{customer.name.clone()}</h1>
                    <span class="muted">{format!("ID: {}", customer.id)}</span>
                </div>
                <span class=badge_class>{format!("{} Risk", customer.risk_level)}</span>
            </div>

            <div class="metric-grid">
                <MetricTile
                    label="Stress Score"
                    value=format!("{}/100", customer.stress_score)
                    danger=customer.stress_score.is_critical()
                />
                <MetricTile label="Total Exposure" value=customer.total_exposure.clone()/>
                <MetricTile label="Active Loans" value=customer.loans.to_string()/>
            </div>

            {customer.details.clone().map(|details| view! { <CreditProfile details=details/> })}

            <div class="detail-grid">
                <TrendChart title="Stress Score Trend (7 Days)" points=trend/>
                <RiskFactors/>
            </div>

            <InterventionPanel customer_id=customer.id.clone()/>
        </div>
    }
}

/// Customer detail page.
///
/// Reloads whenever the `:id` route parameter changes. Only the response to
/// the latest request is shown.
#[component]
pub fn CustomerDetail() -> impl IntoView {
    let params = use_params_map();
    let raw_id = move || params.read().get("id").unwrap_or_default();

    let service = CustomerDetailService::new(HttpRiskApi::new(use_config()));
    let scope = ViewScope::new();
    let (state, set_state) = signal(CustomerView::Loading);

    on_cleanup({
        let scope = scope.clone();
        move || scope.close()
    });

    Effect::new(move |_| {
        let id = raw_id();
        set_state.set(CustomerView::Loading);
        let scope = scope.clone();
        let service = service.clone();
        spawn_local(async move {
            if let Some(loaded) = scope.run(service.load(&id)).await {
                set_state.set(loaded);
            }
        });
    });

    view! {
        {move || match state.get() {
            CustomerView::Loading => {
                view! { <Loading message="Loading customer details..."/> }.into_any()
            }
            CustomerView::Failed(message) => view! {
                <div class="card error-panel">
                    <p class="error">{message}</p>
                    <A href=Route::Dashboard.href()>"\u{2190} Back to Dashboard"</A>
                </div>
            }
            .into_any(),
            CustomerView::Ready(customer) => view! { <CustomerProfile customer=*customer/> }.into_any(),
        }}
    }
}
