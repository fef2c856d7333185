//! Intervention service: select a catalog entry, apply it, keep the record.
//!
//! [`InterventionEngine`] is the per-page state: at most one selected entry
//! and the list of acknowledged records, most recent first. Nothing here is
//! persisted; records live as long as the page.

use catalyst_domain::id::{CustomerId, InterventionId};
use catalyst_domain::intervention::{AppliedIntervention, Intervention};
use catalyst_domain::time::today;

use crate::error::InterventionError;
use crate::ports::InterventionSink;

/// Selection and action history of the intervention panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterventionEngine {
    selected: Option<Intervention>,
    history: Vec<AppliedIntervention>,
}

impl InterventionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `intervention`, replacing any previous selection.
    pub fn select(&mut self, intervention: &Intervention) {
        self.selected = Some(intervention.clone());
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Intervention> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_selected(&self, id: InterventionId) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id == id)
    }

    /// The apply control is enabled only with a selection.
    #[must_use]
    pub fn can_apply(&self) -> bool {
        self.selected.is_some()
    }

    /// Clear and return the selection.
    pub fn take_selection(&mut self) -> Option<Intervention> {
        self.selected.take()
    }

    /// Put a selection back after a failed apply.
    pub fn restore(&mut self, intervention: Intervention) {
        self.selected.get_or_insert(intervention);
    }

    /// Prepend an acknowledged record.
    pub fn record(&mut self, applied: AppliedIntervention) {
        self.history.insert(0, applied);
    }

    /// Records, most recent first.
    #[must_use]
    pub fn history(&self) -> &[AppliedIntervention] {
        &self.history
    }
}

/// Message of the blocking acknowledgment shown after an apply.
#[must_use]
pub fn acknowledgment(applied: &AppliedIntervention) -> String {
    format!("Applied intervention: {}", applied.intervention.kind)
}

/// Routes apply commands through an [`InterventionSink`].
#[derive(Debug, Clone)]
pub struct InterventionService<S> {
    sink: S,
}

impl<S: InterventionSink> InterventionService<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Send one apply command to the sink.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`InterventionError`].
    pub async fn submit(
        &self,
        customer: &CustomerId,
        intervention: Intervention,
    ) -> Result<AppliedIntervention, InterventionError> {
        self.sink.apply(customer, intervention).await
    }

    /// Apply the engine's selection and record the acknowledgment.
    ///
    /// Returns `Ok(None)` with nothing selected. On failure the selection is
    /// restored and nothing is recorded.
    ///
    /// # Errors
    ///
    /// Propagates the sink's [`InterventionError`].
    pub async fn apply_selected(
        &self,
        engine: &mut InterventionEngine,
        customer: &CustomerId,
    ) -> Result<Option<AppliedIntervention>, InterventionError> {
        let Some(intervention) = engine.take_selection() else {
            return Ok(None);
        };
        match self.submit(customer, intervention.clone()).await {
            Ok(applied) => {
                engine.record(applied.clone());
                Ok(Some(applied))
            }
            Err(err) => {
                tracing::warn!(
                    customer_id = %customer,
                    error = %err,
                    "intervention was not applied"
                );
                engine.restore(intervention);
                Err(err)
            }
        }
    }
}

/// Acknowledges every command immediately, stamped with today's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalInterventionSink;

impl InterventionSink for LocalInterventionSink {
    async fn apply(
        &self,
        customer: &CustomerId,
        intervention: Intervention,
    ) -> Result<AppliedIntervention, InterventionError> {
        let applied = AppliedIntervention::new(intervention, today());
        tracing::info!(
            customer_id = %customer,
            intervention = %applied.intervention.kind,
            record_id = %applied.record_id,
            "intervention applied"
        );
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_domain::intervention::{InterventionStatus, catalog};
    use catalyst_domain::time::LocalDate;
    use chrono::NaiveDate;

    struct RejectingSink;

    impl InterventionSink for RejectingSink {
        async fn apply(
            &self,
            _customer: &CustomerId,
            intervention: Intervention,
        ) -> Result<AppliedIntervention, InterventionError> {
            Err(InterventionError::NotAcknowledged(intervention.kind))
        }
    }

    fn entry(id: u32) -> &'static Intervention {
        catalog().iter().find(|e| e.id == InterventionId(id)).unwrap()
    }

    fn customer() -> CustomerId {
        CustomerId::new("CUST-004").unwrap()
    }

    fn day() -> LocalDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn should_start_without_selection_or_history() {
        let engine = InterventionEngine::new();
        assert!(engine.selected().is_none());
        assert!(!engine.can_apply());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn should_keep_selection_when_reselecting() {
        let mut engine = InterventionEngine::new();
        engine.select(entry(2));
        engine.select(entry(2));
        assert!(engine.is_selected(InterventionId(2)));
        assert!(engine.can_apply());
    }

    #[test]
    fn should_replace_selection() {
        let mut engine = InterventionEngine::new();
        engine.select(entry(1));
        engine.select(entry(5));
        assert!(!engine.is_selected(InterventionId(1)));
        assert!(engine.is_selected(InterventionId(5)));
    }

    #[test]
    fn should_prepend_records_without_deduplication() {
        let mut engine = InterventionEngine::new();
        for id in [1, 3, 1] {
            engine.record(AppliedIntervention::new(entry(id).clone(), day()));
        }

        let kinds: Vec<_> = engine
            .history()
            .iter()
            .map(|r| r.intervention.kind.as_str())
            .collect();
        assert_eq!(kinds, ["Email Reminder", "Call Adjustment", "Email Reminder"]);
        assert_ne!(engine.history()[0].record_id, engine.history()[2].record_id);
    }

    #[test]
    fn should_format_acknowledgment_with_type() {
        let applied = AppliedIntervention::new(entry(2).clone(), day());
        assert_eq!(acknowledgment(&applied), "Applied intervention: SMS Alert");
    }

    #[tokio::test]
    async fn should_apply_selection_through_local_sink() {
        let svc = InterventionService::new(LocalInterventionSink);
        let mut engine = InterventionEngine::new();
        engine.select(entry(2));

        let applied = svc
            .apply_selected(&mut engine, &customer())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(applied.intervention.kind, "SMS Alert");
        assert_eq!(applied.status, InterventionStatus::Applied);
        assert_eq!(applied.date, today());
        assert_eq!(engine.history().len(), 1);
        assert!(engine.selected().is_none());
    }

    #[tokio::test]
    async fn should_record_each_reapplication_as_new_entry() {
        let svc = InterventionService::new(LocalInterventionSink);
        let mut engine = InterventionEngine::new();

        engine.select(entry(3));
        let first = svc
            .apply_selected(&mut engine, &customer())
            .await
            .unwrap()
            .unwrap();
        assert!(engine.selected().is_none());
        assert!(!engine.can_apply());

        engine.select(entry(3));
        let second = svc
            .apply_selected(&mut engine, &customer())
            .await
            .unwrap()
            .unwrap();
        assert!(engine.selected().is_none());

        let history = engine.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].record_id, second.record_id);
        assert_eq!(history[1].record_id, first.record_id);
        assert_ne!(history[0].record_id, history[1].record_id);
        for record in history {
            assert_eq!(record.intervention.kind, "Call Adjustment");
            assert_eq!(record.status, InterventionStatus::Applied);
            assert_eq!(record.status.to_string(), "Applied");
            assert_eq!(record.date, today());
        }
    }

    #[tokio::test]
    async fn should_skip_sink_without_selection() {
        let svc = InterventionService::new(RejectingSink);
        let mut engine = InterventionEngine::new();
        let result = svc.apply_selected(&mut engine, &customer()).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn should_restore_selection_when_sink_rejects() {
        let svc = InterventionService::new(RejectingSink);
        let mut engine = InterventionEngine::new();
        engine.select(entry(4));

        let result = svc.apply_selected(&mut engine, &customer()).await;
        assert_eq!(
            result,
            Err(InterventionError::NotAcknowledged("Restructure Offer".to_string()))
        );
        assert!(engine.is_selected(InterventionId(4)));
        assert!(engine.history().is_empty());
    }

    #[tokio::test]
    async fn should_accept_every_catalog_entry() {
        let svc = InterventionService::new(LocalInterventionSink);
        for intervention in catalog() {
            let applied = svc.submit(&customer(), intervention.clone()).await.unwrap();
            assert_eq!(&applied.intervention, intervention);
        }
    }
}
