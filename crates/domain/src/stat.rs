//! Dashboard statistics: display-ready metrics computed by the backend.

use serde::{Deserialize, Serialize};

use crate::tone::Tone;

/// Labels of the four headline stats, in display order.
pub const STAT_LABELS: [&str; 4] = [
    "Total Active Loans",
    "High Risk Customers",
    "Defaults Prevented",
    "Est. Savings",
];

/// Value and change shown when real figures are unavailable.
pub const PLACEHOLDER_VALUE: &str = "-";

/// Cosmetic direction of a stat's change badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatStatus {
    Positive,
    Negative,
    #[default]
    #[serde(other)]
    Neutral,
}

/// Glyph shown next to a stat's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendIcon {
    ArrowUpRight,
    Dash,
}

impl StatStatus {
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Positive => Tone::Success,
            Self::Negative => Tone::Danger,
            Self::Neutral => Tone::Neutral,
        }
    }

    /// Both directions use the up-arrow: a negative change such as rising
    /// risk still points up.
    #[must_use]
    pub fn icon(self) -> TrendIcon {
        match self {
            Self::Positive | Self::Negative => TrendIcon::ArrowUpRight,
            Self::Neutral => TrendIcon::Dash,
        }
    }
}

/// A single labelled metric on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStat {
    pub label: String,
    pub value: String,
    pub change: String,
    #[serde(default)]
    pub status: StatStatus,
}

impl DashboardStat {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        status: StatStatus,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            change: change.into(),
            status,
        }
    }

    /// A neutral entry with `-` for value and change.
    #[must_use]
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new(label, PLACEHOLDER_VALUE, PLACEHOLDER_VALUE, StatStatus::Neutral)
    }
}

/// The four neutral stats shown when the dashboard fetch fails.
#[must_use]
pub fn placeholder_stats() -> Vec<DashboardStat> {
    STAT_LABELS.iter().copied().map(DashboardStat::placeholder).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_four_neutral_placeholders() {
        let stats = placeholder_stats();
        assert_eq!(stats.len(), 4);
        assert!(stats.iter().all(|s| s.value == "-" && s.change == "-"));
        assert!(stats.iter().all(|s| s.status == StatStatus::Neutral));
        assert_eq!(stats[0].label, "Total Active Loans");
        assert_eq!(stats[3].label, "Est. Savings");
    }

    #[test]
    fn should_map_status_to_tone() {
        assert_eq!(StatStatus::Positive.tone(), Tone::Success);
        assert_eq!(StatStatus::Negative.tone(), Tone::Danger);
        assert_eq!(StatStatus::Neutral.tone(), Tone::Neutral);
    }

    #[test]
    fn should_use_up_arrow_for_negative_as_well_as_positive() {
        assert_eq!(StatStatus::Positive.icon(), TrendIcon::ArrowUpRight);
        assert_eq!(StatStatus::Negative.icon(), TrendIcon::ArrowUpRight);
        assert_eq!(StatStatus::Neutral.icon(), TrendIcon::Dash);
    }

    #[test]
    fn should_decode_lowercase_status() {
        let stat: DashboardStat = serde_json::from_str(
            r#"{"label":"High Risk Customers","value":"85","change":"+5%","status":"negative"}"#,
        )
        .unwrap();
        assert_eq!(stat.status, StatStatus::Negative);
    }

    #[test]
    fn should_decode_unknown_status_as_neutral() {
        let stat: DashboardStat = serde_json::from_str(
            r#"{"label":"Est. Savings","value":"0","change":"N/A","status":"sideways"}"#,
        )
        .unwrap();
        assert_eq!(stat.status, StatStatus::Neutral);
    }
}
