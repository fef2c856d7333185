//! Intervention engine panel: pick a catalog action, apply it, list history.

use catalyst_app::services::intervention_service::{
    InterventionEngine, InterventionService, LocalInterventionSink, acknowledgment,
};
use catalyst_domain::id::CustomerId;
use catalyst_domain::intervention::{AppliedIntervention, Intervention, catalog};
use catalyst_domain::time::format_date;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        log::warn!("could not show alert: {message}");
    }
}

#[component]
fn CatalogEntry(entry: &'static Intervention, engine: RwSignal<InterventionEngine>) -> impl IntoView {
    let id = entry.id;
    let class = move || {
        if engine.with(|e| e.is_selected(id)) {
            "intervention selected"
        } else {
            "intervention"
        }
    };
    let badge_class = format!("badge tone-{}", entry.effectiveness.tone().as_str());

    view! {
        <button type="button" class=class on:click=move |_| engine.update(|e| e.select(entry))>
            <div class="intervention-head">
                <span class="intervention-type">{entry.kind.clone()}</span>
                <span class=badge_class>{format!("{} Impact", entry.effectiveness)}</span>
            </div>
            <p class="muted">{entry.description.clone()}</p>
        </button>
    }
}

#[component]
fn ActionRecord(record: AppliedIntervention) -> impl IntoView {
    view! {
        <li class="action-record">
            <span class="intervention-type">{record.intervention.kind}</span>
            <span class="muted">{format!("{} - {}", format_date(record.date), record.status)}</span>
        </li>
    }
}

/// Intervention engine for one customer.
///
/// Records are kept for as long as the panel is mounted.
#[component]
pub fn InterventionPanel(customer_id: CustomerId) -> impl IntoView {
    let engine = RwSignal::new(InterventionEngine::new());
    let service = InterventionService::new(LocalInterventionSink);
    let customer_id = StoredValue::new(customer_id);

    let on_apply = move |_| {
        if !engine.with_untracked(InterventionEngine::can_apply) {
            return;
        }
        let service = service.clone();
        let customer_id = customer_id.get_value();
        spawn_local(async move {
            let mut next = engine.get_untracked();
            let result = service.apply_selected(&mut next, &customer_id).await;
            engine.set(next);
            match result {
                Ok(Some(applied)) => alert(&acknowledgment(&applied)),
                Ok(None) => {}
                Err(err) => alert(&format!("Could not apply intervention: {err}")),
            }
        });
    };

    view! {
        <div class="card intervention-panel">
            <div class="card-header">
                <h3>"Intervention Engine"</h3>
            </div>

            <h4>"Recommended Actions"</h4>
            <div class="intervention-list">
                {catalog()
                    .iter()
                    .map(|entry| view! { <CatalogEntry entry=entry engine=engine/> })
                    .collect_view()}
            </div>

            <button
                type="button"
                class="btn btn-primary"
                disabled=move || !engine.with(InterventionEngine::can_apply)
                on:click=on_apply
            >
                "Apply Selected Action"
            </button>

            <h4>"Action History"</h4>
            <Show
                when=move || engine.with(|e| !e.history().is_empty())
                fallback=|| view! { <p class="muted">"No interventions applied yet."</p> }
            >
                <ul class="action-history">
                    <For
                        each=move || engine.with(|e| e.history().to_vec())
                        key=|record| record.record_id
                        let(record)
                    >
                        <ActionRecord record=record/>
                    </For>
                </ul>
            </Show>
        </div>
    }
}
