//! Shared application state for axum handlers.

use std::sync::Arc;

use catalyst_app::ports::CustomerDirectory;
use catalyst_app::services::portfolio_service::PortfolioService;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the directory type does not need to be
/// `Clone`; only the `Arc` is cloned.
pub struct AppState<D> {
    /// Portfolio read use-cases.
    pub portfolio: Arc<PortfolioService<D>>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            portfolio: Arc::clone(&self.portfolio),
        }
    }
}

impl<D> AppState<D>
where
    D: CustomerDirectory + Send + Sync + 'static,
{
    /// Create a new application state over a directory.
    pub fn new(directory: D) -> Self {
        Self {
            portfolio: Arc::new(PortfolioService::new(directory)),
        }
    }
}
