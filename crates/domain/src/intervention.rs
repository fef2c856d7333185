//! Interventions: predefined remediation actions and their applied records.

use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::id::{InterventionId, RecordId};
use crate::time::LocalDate;
use crate::tone::Tone;

/// Expected impact of an intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    High,
    Medium,
    Low,
}

impl Effectiveness {
    /// High is green, Medium yellow, Low gray.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::High => Tone::Success,
            Self::Medium => Tone::Warning,
            Self::Low => Tone::Neutral,
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// An entry of the intervention catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: InterventionId,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub effectiveness: Effectiveness,
}

impl Intervention {
    fn new(id: u32, kind: &str, description: &str, effectiveness: Effectiveness) -> Self {
        Self {
            id: InterventionId(id),
            kind: kind.to_string(),
            description: description.to_string(),
            effectiveness,
        }
    }
}

static CATALOG: LazyLock<Vec<Intervention>> = LazyLock::new(|| {
    vec![
        Intervention::new(
            1,
            "Email Reminder",
            "Send automated payment reminder",
            Effectiveness::High,
        ),
        Intervention::new(2, "SMS Alert", "Send urgent SMS alert", Effectiveness::Medium),
        Intervention::new(
            3,
            "Call Adjustment",
            "Schedule call with relationship manager",
            Effectiveness::High,
        ),
        Intervention::new(
            4,
            "Restructure Offer",
            "Propose loan restructuring plan",
            Effectiveness::Medium,
        ),
        Intervention::new(5, "Legal Notice", "Send formal legal notice", Effectiveness::Low),
    ]
});

/// The fixed intervention catalog, identical for every customer.
#[must_use]
pub fn catalog() -> &'static [Intervention] {
    &CATALOG
}

/// Lifecycle status of an applied intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterventionStatus {
    Applied,
}

impl fmt::Display for InterventionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("Applied"),
        }
    }
}

/// A catalog entry that was applied to a customer on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedIntervention {
    pub record_id: RecordId,
    pub intervention: Intervention,
    pub date: LocalDate,
    pub status: InterventionStatus,
}

impl AppliedIntervention {
    /// Record `intervention` as applied on `date`.
    #[must_use]
    pub fn new(intervention: Intervention, date: LocalDate) -> Self {
        Self {
            record_id: RecordId::new(),
            intervention,
            date,
            status: InterventionStatus::Applied,
        }
    }
}
