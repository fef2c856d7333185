//! Demo and stub data.
//!
//! Nothing here is telemetry. The seed customers and stats feed the local
//! fixture API; the weekly trend and risk factors stand in for figures the
//! backend does not serve yet and are labelled as illustrative wherever they
//! are shown.

use crate::customer::{Customer, RiskLevel, StressScore};
use crate::id::CustomerId;
use crate::stat::{DashboardStat, StatStatus};
use crate::tone::Tone;
use crate::trend::{TrendPoint, labelled_series};

/// Portfolio stress for the last seven days, Monday first.
pub const WEEKLY_TREND: [(&str, u32); 7] = [
    ("Mon", 62),
    ("Tue", 64),
    ("Wed", 63),
    ("Thu", 66),
    ("Fri", 68),
    ("Sat", 70),
    ("Sun", 72),
];

/// A qualitative factor contributing to a customer's risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFactor {
    pub label: &'static str,
    pub assessment: &'static str,
    pub tone: Tone,
}

/// Risk factors shown for every customer until the backend explains scores.
pub const RISK_FACTORS: [RiskFactor; 3] = [
    RiskFactor {
        label: "Late Repayment Frequency",
        assessment: "High",
        tone: Tone::Danger,
    },
    RiskFactor {
        label: "Market Volatility Impact",
        assessment: "Medium",
        tone: Tone::Warning,
    },
    RiskFactor {
        label: "Operational Cash Flow",
        assessment: "Negative",
        tone: Tone::Danger,
    },
];

/// Weekly trend as chart points.
#[must_use]
pub fn weekly_trend() -> Vec<TrendPoint> {
    labelled_series(&WEEKLY_TREND)
}

/// The four headline stats of the demo portfolio.
#[must_use]
pub fn stats() -> Vec<DashboardStat> {
    vec![
        DashboardStat::new("Total Active Loans", "1,245", "+12%", StatStatus::Positive),
        DashboardStat::new("High Risk Customers", "85", "+5%", StatStatus::Negative),
        DashboardStat::new("Defaults Prevented", "32", "Last 30 days", StatStatus::Neutral),
        DashboardStat::new("Est. Savings", "₹4.5Cr", "+18%", StatStatus::Positive),
    ]
}

struct Seed {
    id: &'static str,
    name: &'static str,
    stress_score: u32,
    risk_level: RiskLevel,
    trend: &'static str,
    loans: u32,
    total_exposure: &'static str,
    history: [u32; 7],
    last_updated: &'static str,
}

impl Seed {
    fn into_customer(self) -> Customer {
        Customer {
            id: CustomerId::from_static(self.id),
            name: self.name.to_string(),
            stress_score: StressScore::new(self.stress_score),
            risk_level: self.risk_level,
            trend: self.trend.to_string(),
            loans: self.loans,
            total_exposure: self.total_exposure.to_string(),
            history: Some(self.history.to_vec()),
            last_updated: self.last_updated.to_string(),
            details: None,
        }
    }
}

/// Five demo customers spanning all risk levels.
#[must_use]
pub fn customers() -> Vec<Customer> {
    [
        Seed {
            id: "CUST-001",
            name: "Acme Corp",
            stress_score: 85,
            risk_level: RiskLevel::High,
            trend: "Increasing",
            loans: 3,
            total_exposure: "₹1.2Cr",
            history: [65, 68, 72, 75, 78, 82, 85],
            last_updated: "2023-10-27",
        },
        Seed {
            id: "CUST-002",
            name: "Globex Inc",
            stress_score: 45,
            risk_level: RiskLevel::Medium,
            trend: "Stable",
            loans: 1,
            total_exposure: "₹50L",
            history: [42, 43, 45, 44, 45, 45, 45],
            last_updated: "2023-10-26",
        },
        Seed {
            id: "CUST-003",
            name: "Soylent Corp",
            stress_score: 12,
            risk_level: RiskLevel::Low,
            trend: "Decreasing",
            loans: 2,
            total_exposure: "₹3.5Cr",
            history: [20, 18, 15, 14, 13, 12, 12],
            last_updated: "2023-10-25",
        },
        Seed {
            id: "CUST-004",
            name: "Initech",
            stress_score: 92,
            risk_level: RiskLevel::High,
            trend: "Rapid Increase",
            loans: 5,
            total_exposure: "₹8.0Cr",
            history: [70, 75, 80, 85, 88, 90, 92],
            last_updated: "2023-10-27",
        },
        Seed {
            id: "CUST-005",
            name: "Umbrella Corp",
            stress_score: 25,
            risk_level: RiskLevel::Low,
            trend: "Stable",
            loans: 10,
            total_exposure: "₹150Cr",
            history: [28, 27, 26, 25, 25, 25, 25],
            last_updated: "2023-10-27",
        },
    ]
    .into_iter()
    .map(Seed::into_customer)
    .collect()
}
