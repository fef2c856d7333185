//! Portfolio service: the data behind the demo fixture API.

use std::cmp::Reverse;

use catalyst_domain::customer::Customer;
use catalyst_domain::dashboard::DashboardOverview;
use catalyst_domain::error::{CatalystError, NotFoundError};
use catalyst_domain::id::CustomerId;

use crate::ports::CustomerDirectory;

/// Read-only use-cases over a [`CustomerDirectory`].
pub struct PortfolioService<D> {
    directory: D,
}

impl<D: CustomerDirectory> PortfolioService<D> {
    /// Create a new service backed by the given directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Headline stats plus every customer, highest stress first.
    ///
    /// Ties keep directory order.
    ///
    /// # Errors
    ///
    /// Propagates directory errors.
    pub async fn overview(&self) -> Result<DashboardOverview, CatalystError> {
        let stats = self.directory.stats().await?;
        let mut customers = self.directory.get_all().await?;
        customers.sort_by_key(|c| Reverse(c.stress_score.value()));
        Ok(DashboardOverview { stats, customers })
    }

    /// Look up a customer by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalystError::NotFound`] when no customer with `id` exists,
    /// or an error propagated from the directory.
    pub async fn get_customer(&self, id: &CustomerId) -> Result<Customer, CatalystError> {
        self.directory.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Customer",
                id: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_domain::demo;
    use catalyst_domain::stat::DashboardStat;
    use std::future::Future;

    struct InMemoryDirectory {
        customers: Vec<Customer>,
    }

    impl CustomerDirectory for InMemoryDirectory {
        fn stats(&self) -> impl Future<Output = Result<Vec<DashboardStat>, CatalystError>> + Send {
            async { Ok(demo::stats()) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Customer>, CatalystError>> + Send {
            let result = self.customers.clone();
            async { Ok(result) }
        }

        fn get_by_id(
            &self,
            id: &CustomerId,
        ) -> impl Future<Output = Result<Option<Customer>, CatalystError>> + Send {
            let result = self.customers.iter().find(|c| &c.id == id).cloned();
            async { Ok(result) }
        }
    }

    fn make_service() -> PortfolioService<InMemoryDirectory> {
        PortfolioService::new(InMemoryDirectory {
            customers: demo::customers(),
        })
    }

    #[tokio::test]
    async fn should_order_customers_by_stress_descending() {
        let overview = make_service().overview().await.unwrap();
        let scores: Vec<u32> = overview
            .customers
            .iter()
            .map(|c| c.stress_score.value())
            .collect();
        assert_eq!(scores, [92, 85, 45, 25, 12]);
        assert_eq!(overview.stats.len(), 4);
    }

    #[tokio::test]
    async fn should_keep_directory_order_on_ties() {
        let mut twin = demo::customers().remove(1);
        twin.id = CustomerId::new("CUST-102").unwrap();
        let mut customers = demo::customers();
        customers.push(twin);
        let svc = PortfolioService::new(InMemoryDirectory { customers });

        let overview = svc.overview().await.unwrap();
        let ids: Vec<&str> = overview.customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids[2], "CUST-002");
        assert_eq!(ids[3], "CUST-102");
    }

    #[tokio::test]
    async fn should_get_customer_by_id() {
        let id = CustomerId::new("CUST-003").unwrap();
        let customer = make_service().get_customer(&id).await.unwrap();
        assert_eq!(customer.name, "Soylent Corp");
    }

    #[tokio::test]
    async fn should_return_not_found_when_customer_missing() {
        let id = CustomerId::new("CUST-999").unwrap();
        let result = make_service().get_customer(&id).await;
        assert!(matches!(result, Err(CatalystError::NotFound(_))));
    }
}
