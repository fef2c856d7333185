//! Typed identifier newtypes.
//!
//! Customer identifiers are opaque strings assigned by the risk backend
//! (e.g. `CUST-004`). Catalog entries use small integers. Applied-intervention
//! records get a random UUID so repeated applications stay distinct.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Backend-assigned identifier of a [`Customer`](crate::customer::Customer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Wrap a raw identifier, rejecting empty or blank values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] when `raw` is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(raw))
    }

    /// Wrap a compile-time literal known to be non-blank.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        debug_assert!(!raw.trim().is_empty());
        Self(raw.to_string())
    }

    /// Borrow the identifier as it was received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CustomerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of an entry in the intervention catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterventionId(pub u32);

impl fmt::Display for InterventionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier of an applied-intervention record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(uuid::Uuid);

impl Default for RecordId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl RecordId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_customer_id_verbatim() {
        let id = CustomerId::new("CUST-004").unwrap();
        assert_eq!(id.as_str(), "CUST-004");
        assert_eq!(id.to_string(), "CUST-004");
    }

    #[test]
    fn should_reject_blank_customer_id() {
        assert_eq!(CustomerId::new("   "), Err(ValidationError::EmptyId));
        assert!("".parse::<CustomerId>().is_err());
    }

    #[test]
    fn should_serialize_customer_id_as_plain_string() {
        let id = CustomerId::new("CUST-001").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"CUST-001\"");
    }

    #[test]
    fn should_deserialize_intervention_id_from_integer() {
        let id: InterventionId = serde_json::from_str("3").unwrap();
        assert_eq!(id, InterventionId(3));
    }

    #[test]
    fn should_generate_unique_record_ids_when_called_twice() {
        assert_ne!(RecordId::new(), RecordId::new());
    }
}
