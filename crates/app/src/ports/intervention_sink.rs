//! Intervention sink port: where applied interventions are acknowledged.

use std::future::Future;

use catalyst_domain::id::CustomerId;
use catalyst_domain::intervention::{AppliedIntervention, Intervention};

use crate::error::InterventionError;

/// Accepts an "apply intervention" command and returns the acknowledged record.
///
/// The client keeps acknowledged records as a local cache; the sink is the
/// source of truth.
pub trait InterventionSink {
    fn apply(
        &self,
        customer: &CustomerId,
        intervention: Intervention,
    ) -> impl Future<Output = Result<AppliedIntervention, InterventionError>>;
}
