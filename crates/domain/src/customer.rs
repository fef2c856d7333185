//! Customer: a backend-owned risk record the dashboard displays read-only.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CatalystError, ValidationError};
use crate::id::CustomerId;
use crate::tone::Tone;
use crate::trend::{TrendPoint, day_series};

/// Scores strictly above this value are emphasised as critical.
pub const CRITICAL_STRESS_THRESHOLD: u32 = 75;

/// Backend-computed financial distress indicator, nominally `0..=100`.
///
/// Decodes from any non-negative JSON number; fractional values are rounded
/// to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StressScore(u32);

impl StressScore {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether the score is high enough to be highlighted.
    #[must_use]
    pub fn is_critical(self) -> bool {
        self.0 > CRITICAL_STRESS_THRESHOLD
    }
}

impl fmt::Display for StressScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for StressScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for StressScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        if !raw.is_finite() || raw < 0.0 || raw > f64::from(u32::MAX) {
            return Err(serde::de::Error::custom(format!(
                "stress score out of range: {raw}"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(Self(raw.round() as u32))
    }
}

fn deserialize_history<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<u32>>, D::Error> {
    let scores = Option::<Vec<StressScore>>::deserialize(deserializer)?;
    Ok(scores.map(|scores| scores.into_iter().map(StressScore::value).collect()))
}

/// Coarse risk banding assigned by the backend.
///
/// Values outside the known bands are preserved so they can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Other(String),
}

impl RiskLevel {
    /// Badge tone: High is red, Medium yellow, Low green, anything else gray.
    #[must_use]
    pub fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Danger,
            Self::Medium => Tone::Warning,
            Self::Low => Tone::Success,
            Self::Other(_) => Tone::Neutral,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Self::Low,
            "Medium" => Self::Medium,
            "High" => Self::High,
            _ => Self::Other(value),
        }
    }
}

impl From<RiskLevel> for String {
    fn from(value: RiskLevel) -> Self {
        value.to_string()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("Low"),
            Self::Medium => f.write_str("Medium"),
            Self::High => f.write_str("High"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Extra credit figures the detail endpoint may attach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditDetails {
    #[serde(default)]
    pub credit_score: Option<f64>,
    #[serde(default)]
    pub monthly_income: Option<f64>,
    #[serde(default)]
    pub emi_amount: Option<f64>,
}

/// A loan customer as returned by the risk backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub stress_score: StressScore,
    pub risk_level: RiskLevel,
    pub trend: String,
    /// Number of active loans.
    pub loans: u32,
    /// Pre-formatted currency string (e.g. `₹8.0Cr`).
    pub total_exposure: String,
    /// Chronological stress scores. `None` when the backend omits it.
    /// Entries decode like [`StressScore`].
    #[serde(
        default,
        deserialize_with = "deserialize_history",
        skip_serializing_if = "Option::is_none"
    )]
    pub history: Option<Vec<u32>>,
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<CreditDetails>,
}

impl Customer {
    /// Create a builder for constructing a [`Customer`].
    #[must_use]
    pub fn builder() -> CustomerBuilder {
        CustomerBuilder::default()
    }

    /// Stress history as `Day 1..Day N` chart points. Empty when absent.
    #[must_use]
    pub fn stress_trend(&self) -> Vec<TrendPoint> {
        self.history.as_deref().map(day_series).unwrap_or_default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalystError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CatalystError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Customer`].
#[derive(Debug, Default)]
pub struct CustomerBuilder {
    id: Option<String>,
    name: Option<String>,
    stress_score: u32,
    risk_level: Option<RiskLevel>,
    trend: Option<String>,
    loans: u32,
    total_exposure: Option<String>,
    history: Option<Vec<u32>>,
    last_updated: Option<String>,
    details: Option<CreditDetails>,
}

impl CustomerBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn stress_score(mut self, score: u32) -> Self {
        self.stress_score = score;
        self
    }

    #[must_use]
    pub fn risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = Some(level);
        self
    }

    #[must_use]
    pub fn trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    #[must_use]
    pub fn loans(mut self, loans: u32) -> Self {
        self.loans = loans;
        self
    }

    #[must_use]
    pub fn total_exposure(mut self, exposure: impl Into<String>) -> Self {
        self.total_exposure = Some(exposure.into());
        self
    }

    #[must_use]
    pub fn history(mut self, history: impl Into<Vec<u32>>) -> Self {
        self.history = Some(history.into());
        self
    }

    #[must_use]
    pub fn last_updated(mut self, date: impl Into<String>) -> Self {
        self.last_updated = Some(date.into());
        self
    }

    #[must_use]
    pub fn details(mut self, details: CreditDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Consume the builder, validate, and return a [`Customer`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalystError::Validation`] if `id` or `name` is missing or blank.
    pub fn build(self) -> Result<Customer, CatalystError> {
        let customer = Customer {
            id: CustomerId::new(self.id.unwrap_or_default())?,
            name: self.name.unwrap_or_default(),
            stress_score: StressScore::new(self.stress_score),
            risk_level: self.risk_level.unwrap_or(RiskLevel::Low),
            trend: self.trend.unwrap_or_default(),
            loans: self.loans,
            total_exposure: self.total_exposure.unwrap_or_default(),
            history: self.history,
            last_updated: self.last_updated.unwrap_or_default(),
            details: self.details,
        };
        customer.validate()?;
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initech_json() -> &'static str {
        r#"{
            "id": "CUST-004",
            "name": "Initech",
            "stressScore": 92,
            "riskLevel": "High",
            "trend": "Rapid Increase",
            "loans": 5,
            "totalExposure": "₹8.0Cr",
            "history": [70, 75, 80, 85, 88, 90, 92],
            "lastUpdated": "2023-10-27"
        }"#
    }

    #[test]
    fn should_decode_camel_case_wire_shape() {
        let customer: Customer = serde_json::from_str(initech_json()).unwrap();
        assert_eq!(customer.id.as_str(), "CUST-004");
        assert_eq!(customer.stress_score.value(), 92);
        assert_eq!(customer.risk_level, RiskLevel::High);
        assert_eq!(customer.total_exposure, "₹8.0Cr");
        assert_eq!(customer.history.as_deref().map(<[u32]>::len), Some(7));
        assert!(customer.details.is_none());
    }

    #[test]
    fn should_round_fractional_stress_scores() {
        let json = initech_json().replace("\"stressScore\": 92", "\"stressScore\": 84.6");
        let customer: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer.stress_score.value(), 85);
    }

    #[test]
    fn should_round_fractional_history_entries() {
        let json = initech_json()
            .replace("\"stressScore\": 92", "\"stressScore\": 84.6")
            .replace("[70, 75, 80, 85, 88, 90, 92]", "[84.6, 85.0, 91.2]");
        let customer: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(customer.stress_score.value(), 85);
        assert_eq!(customer.history.as_deref(), Some([85, 85, 91].as_slice()));
        let values: Vec<f64> = customer.stress_trend().iter().map(|p| p.value).collect();
        assert_eq!(values, [85.0, 85.0, 91.0]);
    }

    #[test]
    fn should_reject_negative_history_entries() {
        let json = initech_json().replace("[70, 75, 80, 85, 88, 90, 92]", "[70, -3]");
        assert!(serde_json::from_str::<Customer>(&json).is_err());
    }

    #[test]
    fn should_reject_negative_stress_scores() {
        let json = initech_json().replace("\"stressScore\": 92", "\"stressScore\": -1");
        assert!(serde_json::from_str::<Customer>(&json).is_err());
    }

    #[test]
    fn should_treat_missing_or_null_history_as_absent() {
        let missing = initech_json().replace("\"history\": [70, 75, 80, 85, 88, 90, 92],", "");
        let customer: Customer = serde_json::from_str(&missing).unwrap();
        assert!(customer.history.is_none());
        assert!(customer.stress_trend().is_empty());

        let null = initech_json().replace("[70, 75, 80, 85, 88, 90, 92]", "null");
        let customer: Customer = serde_json::from_str(&null).unwrap();
        assert!(customer.stress_trend().is_empty());
    }

    #[test]
    fn should_decode_optional_credit_details() {
        let json = initech_json().replace(
            "\"lastUpdated\": \"2023-10-27\"",
            "\"lastUpdated\": \"Today\", \"details\": {\"credit_score\": 612, \"monthly_income\": 54000.5, \"emi_amount\": 12000}",
        );
        let customer: Customer = serde_json::from_str(&json).unwrap();
        let details = customer.details.unwrap();
        assert_eq!(details.credit_score, Some(612.0));
        assert_eq!(details.emi_amount, Some(12000.0));
    }

    #[test]
    fn should_preserve_unknown_risk_levels_with_neutral_tone() {
        let level = RiskLevel::from("Severe".to_string());
        assert_eq!(level, RiskLevel::Other("Severe".to_string()));
        assert_eq!(level.to_string(), "Severe");
        assert_eq!(level.tone(), Tone::Neutral);
    }

    #[test]
    fn should_map_known_risk_levels_to_tones() {
        assert_eq!(RiskLevel::High.tone(), Tone::Danger);
        assert_eq!(RiskLevel::Medium.tone(), Tone::Warning);
        assert_eq!(RiskLevel::Low.tone(), Tone::Success);
    }

    #[test]
    fn should_flag_scores_above_threshold_as_critical() {
        assert!(!StressScore::new(75).is_critical());
        assert!(StressScore::new(76).is_critical());
    }

    #[test]
    fn should_build_trend_from_history() {
        let customer: Customer = serde_json::from_str(initech_json()).unwrap();
        let trend = customer.stress_trend();
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].label, "Day 1");
        assert_eq!(trend[6].label, "Day 7");
    }

    #[test]
    fn should_reject_builder_without_name() {
        let result = Customer::builder().id("CUST-9").build();
        assert!(matches!(
            result,
            Err(CatalystError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_reject_builder_without_id() {
        let result = Customer::builder().name("Nameless").build();
        assert!(matches!(
            result,
            Err(CatalystError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let customer = Customer::builder()
            .id("CUST-002")
            .name("Globex Inc")
            .stress_score(45)
            .risk_level(RiskLevel::Medium)
            .history(vec![42, 43, 45])
            .build()
            .unwrap();
        let json = serde_json::to_string(&customer).unwrap();
        assert!(json.contains("\"riskLevel\":\"Medium\""));
        let parsed: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, customer);
    }
}
