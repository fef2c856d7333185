//! Customer detail service: loads one customer for the detail page.

use catalyst_domain::customer::Customer;
use catalyst_domain::id::CustomerId;

use crate::error::FetchError;
use crate::ports::RiskApi;

/// Shown when the backend answers `404` or the id is unusable.
pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";

/// Shown for every other failure.
pub const CUSTOMER_LOAD_FAILED: &str = "Failed to fetch customer details";

/// What the customer detail page renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CustomerView {
    #[default]
    Loading,
    Failed(String),
    Ready(Box<Customer>),
}

impl CustomerView {
    #[must_use]
    pub fn from_result(result: Result<Customer, FetchError>) -> Self {
        match result {
            Ok(customer) => Self::Ready(Box::new(customer)),
            Err(FetchError::NotFound) => Self::Failed(CUSTOMER_NOT_FOUND.to_string()),
            Err(_) => Self::Failed(CUSTOMER_LOAD_FAILED.to_string()),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn customer(&self) -> Option<&Customer> {
        match self {
            Self::Ready(customer) => Some(customer),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Loads customers through a [`RiskApi`].
#[derive(Debug, Clone)]
pub struct CustomerDetailService<A> {
    api: A,
}

impl<A: RiskApi> CustomerDetailService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch the customer named by a raw route parameter.
    ///
    /// A blank identifier is reported as not found without a request.
    pub async fn load(&self, raw_id: &str) -> CustomerView {
        let Ok(id) = CustomerId::new(raw_id) else {
            tracing::debug!(raw_id, "blank customer id in route");
            return CustomerView::from_result(Err(FetchError::NotFound));
        };
        let result = self.api.customer(&id).await;
        if let Err(err) = &result {
            tracing::warn!(customer_id = %id, error = %err, "failed to fetch customer");
        }
        CustomerView::from_result(result)
    }
}
