//! JSON handler modules of the fixture API.

#[allow(clippy::missing_errors_doc)]
pub mod customers;
#[allow(clippy::missing_errors_doc)]
pub mod dashboard;

use axum::Router;
use axum::routing::get;

use catalyst_app::ports::CustomerDirectory;

use crate::state::AppState;

/// Build the fixture API routes, at the paths the dashboard client requests.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: CustomerDirectory + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(dashboard::root))
        .route("/dashboard-stats", get(dashboard::stats::<D>))
        .route("/customer/{id}", get(customers::get::<D>))
}
