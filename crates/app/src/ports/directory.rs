//! Customer directory port: the data behind the demo fixture API.

use std::future::Future;

use catalyst_domain::customer::Customer;
use catalyst_domain::error::CatalystError;
use catalyst_domain::id::CustomerId;
use catalyst_domain::stat::DashboardStat;

/// Read access to a set of customers and their headline stats.
pub trait CustomerDirectory {
    /// Headline stats for the whole portfolio.
    fn stats(&self) -> impl Future<Output = Result<Vec<DashboardStat>, CatalystError>> + Send;

    /// Every known customer, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Customer>, CatalystError>> + Send;

    /// One customer by id, or `None`.
    fn get_by_id(
        &self,
        id: &CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, CatalystError>> + Send;
}

