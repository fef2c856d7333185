//! # catalyst-adapter-seed
//!
//! In-memory customer directory seeded with the demo portfolio.
//!
//! | Customer | Id | Stress | Risk |
//! |----------|----|--------|------|
//! | Acme Corp | `CUST-001` | 85 | High |
//! | Globex Inc | `CUST-002` | 45 | Medium |
//! | Soylent Corp | `CUST-003` | 12 | Low |
//! | Initech | `CUST-004` | 92 | High |
//! | Umbrella Corp | `CUST-005` | 25 | Low |
//!
//! ## Dependency rule
//!
//! Depends on `catalyst-app` (port traits) and `catalyst-domain` only.

use std::collections::HashMap;
use std::future::Future;

use catalyst_app::ports::CustomerDirectory;
use catalyst_domain::customer::Customer;
use catalyst_domain::demo;
use catalyst_domain::error::CatalystError;
use catalyst_domain::id::CustomerId;
use catalyst_domain::stat::DashboardStat;

/// Read-only directory over a fixed customer list.
#[derive(Debug, Clone)]
pub struct SeedDirectory {
    stats: Vec<DashboardStat>,
    customers: Vec<Customer>,
    index: HashMap<CustomerId, usize>,
}

impl Default for SeedDirectory {
    fn default() -> Self {
        Self::new(demo::stats(), demo::customers())
    }
}

impl SeedDirectory {
    /// Build a directory from explicit data. Later duplicates of an id win lookups.
    #[must_use]
    pub fn new(stats: Vec<DashboardStat>, customers: Vec<Customer>) -> Self {
        let index = customers
            .iter()
            .enumerate()
            .map(|(pos, customer)| (customer.id.clone(), pos))
            .collect();
        tracing::debug!(customers = customers.len(), "seed directory loaded");
        Self {
            stats,
            customers,
            index,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl CustomerDirectory for SeedDirectory {
    fn stats(&self) -> impl Future<Output = Result<Vec<DashboardStat>, CatalystError>> + Send {
        let stats = self.stats.clone();
        async { Ok(stats) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Customer>, CatalystError>> + Send {
        let customers = self.customers.clone();
        async { Ok(customers) }
    }

    fn get_by_id(
        &self,
        id: &CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, CatalystError>> + Send {
        let found = self
            .index
            .get(id)
            .and_then(|pos| self.customers.get(*pos))
            .cloned();
        async { Ok(found) }
    }
}
