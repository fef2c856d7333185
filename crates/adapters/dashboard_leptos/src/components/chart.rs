//! Line chart component using `leptos-chartistry` with SVG rendering.
//!
//! Points are plotted against their 1-based position; the categorical labels
//! (`Mon`, `Day 3`, ...) are printed in a row beneath the plot.

use catalyst_domain::trend::TrendPoint;
use leptos::prelude::*;
use leptos_chartistry::*;

/// A titled line chart of `{label, value}` points.
#[component]
pub fn TrendChart(
    #[prop(into)] title: String,
    points: Vec<TrendPoint>,
    /// Name shown in the tooltip.
    #[prop(default = "Stress".into(), into)]
    series_name: String,
    /// Extra controls rendered next to the title.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let header = view! {
        <div class="card-header">
            <h3>{title}</h3>
            {children.map(|c| c())}
        </div>
    };

    if points.is_empty() {
        return view! {
            <div class="card chart-card">
                {header}
                <p class="muted">"No history available."</p>
            </div>
        }
        .into_any();
    }

    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    let series = Series::new(|p: &TrendPoint| p.position)
        .line(Line::new(|p: &TrendPoint| p.value).with_name(series_name));
    let inner = vec![
        AxisMarker::left_edge().into_inner(),
        AxisMarker::bottom_edge().into_inner(),
        YGridLine::default().into_inner(),
        XGuideLine::over_data().into_inner(),
    ];
    let data = Signal::derive(move || points.clone());

    view! {
        <div class="card chart-card">
            {header}
            <Chart
                aspect_ratio=AspectRatio::from_env_width_apply_ratio(2.5)
                left=TickLabels::aligned_floats()
                inner=inner
                tooltip=Tooltip::left_cursor()
                series=series
                data=data
            />
            <div class="chart-labels">
                {labels.into_iter().map(|label| view! { <span>{label}</span> }).collect_view()}
            </div>
        </div>
    }
    .into_any()
}
