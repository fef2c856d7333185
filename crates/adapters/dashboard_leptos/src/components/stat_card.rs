//! Stat card component for one dashboard metric.

use catalyst_domain::stat::{DashboardStat, TrendIcon};
use leptos::prelude::*;

fn icon_glyph(icon: TrendIcon) -> &'static str {
    match icon {
        TrendIcon::ArrowUpRight => "\u{2197}",
        TrendIcon::Dash => "\u{2013}",
    }
}

/// A card showing a label, a value and a coloured change badge.
#[component]
pub fn StatCard(stat: DashboardStat) -> impl IntoView {
    let badge_class = format!("badge tone-{}", stat.status.tone().as_str());
    let glyph = icon_glyph(stat.status.icon());

    view! {
        <div class="card stat-card">
            <span class="stat-label">{stat.label}</span>
            <div class="stat-row">
                <span class="stat-value">{stat.value}</span>
                <span class=badge_class>
                    <span class="stat-icon">{glyph}</span>
                    {stat.change}
                </span>
            </div>
        </div>
    }
}
