//! Dashboard overview: the body of `GET /dashboard-stats`.

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::stat::DashboardStat;

/// Default number of customers surfaced as critical alerts.
pub const CRITICAL_ALERT_LIMIT: usize = 5;

/// Aggregate stats plus the backend's customer list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub stats: Vec<DashboardStat>,
    pub customers: Vec<Customer>,
}

impl DashboardOverview {
    /// Split into stats and the first `limit` customers, in backend order.
    #[must_use]
    pub fn into_alerts(self, limit: usize) -> (Vec<DashboardStat>, Vec<Customer>) {
        let mut customers = self.customers;
        customers.truncate(limit);
        (self.stats, customers)
    }
}
