mod chart;
mod intervention_panel;
mod layout;
mod loading;
mod stat_card;

pub use chart::TrendChart;
pub use intervention_panel::InterventionPanel;
pub use layout::{Layout, Shell};
pub use loading::Loading;
pub use stat_card::StatCard;
