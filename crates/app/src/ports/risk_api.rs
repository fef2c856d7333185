//! Risk API port: read-only access to the external risk backend.

use std::future::Future;

use catalyst_domain::customer::Customer;
use catalyst_domain::dashboard::DashboardOverview;
use catalyst_domain::id::CustomerId;

use crate::error::FetchError;

/// The two GET endpoints of the risk backend.
///
/// Implementations send no body, headers or credentials.
pub trait RiskApi {
    /// `GET /dashboard-stats`.
    fn dashboard_overview(&self) -> impl Future<Output = Result<DashboardOverview, FetchError>>;

    /// `GET /customer/{id}`. A `404` maps to [`FetchError::NotFound`].
    fn customer(&self, id: &CustomerId) -> impl Future<Output = Result<Customer, FetchError>>;
}

