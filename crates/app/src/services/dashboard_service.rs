//! Dashboard service: headline stats and critical alerts.

use catalyst_domain::customer::Customer;
use catalyst_domain::dashboard::{CRITICAL_ALERT_LIMIT, DashboardOverview};
use catalyst_domain::stat::{DashboardStat, placeholder_stats};

use crate::error::FetchError;
use crate::ports::RiskApi;

/// Banner shown when the dashboard cannot be loaded.
pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard data. Ensure API is running.";

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub loading: bool,
    pub error: Option<String>,
    pub stats: Vec<DashboardStat>,
    /// First customers of the backend list, in backend order.
    pub critical_customers: Vec<Customer>,
}

impl DashboardView {
    /// Initial state, before the first response.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
            stats: Vec::new(),
            critical_customers: Vec::new(),
        }
    }

    /// Fold a fetch result into view state.
    ///
    /// Any failure yields the fixed banner, four neutral placeholder stats and
    /// no alerts.
    #[must_use]
    pub fn from_result(result: Result<DashboardOverview, FetchError>, limit: usize) -> Self {
        match result {
            Ok(overview) => {
                let (stats, critical_customers) = overview.into_alerts(limit);
                Self {
                    loading: false,
                    error: None,
                    stats,
                    critical_customers,
                }
            }
            Err(_) => Self {
                loading: false,
                error: Some(DASHBOARD_LOAD_FAILED.to_string()),
                stats: placeholder_stats(),
                critical_customers: Vec::new(),
            },
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::loading()
    }
}

/// Loads the dashboard through a [`RiskApi`].
#[derive(Debug, Clone)]
pub struct DashboardService<A> {
    api: A,
    alert_limit: usize,
}

impl<A: RiskApi> DashboardService<A> {
    /// Create a new service with the default alert limit.
    pub fn new(api: A) -> Self {
        Self {
            api,
            alert_limit: CRITICAL_ALERT_LIMIT,
        }
    }

    /// Override how many customers are listed as critical alerts.
    #[must_use]
    pub fn with_alert_limit(mut self, limit: usize) -> Self {
        self.alert_limit = limit;
        self
    }

    /// Fetch stats and customers. Never fails: errors become view state.
    pub async fn load(&self) -> DashboardView {
        let result = self.api.dashboard_overview().await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "failed to fetch dashboard data");
        }
        DashboardView::from_result(result, self.alert_limit)
    }
}
