//! Dashboard handlers.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catalyst_app::ports::CustomerDirectory;
use catalyst_domain::dashboard::DashboardOverview;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /`.
#[derive(Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

/// Possible responses from the stats endpoint.
pub enum StatsResponse {
    Ok(Json<DashboardOverview>),
}

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /`
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "API is working",
    })
}

/// `GET /dashboard-stats`
pub async fn stats<D>(State(state): State<AppState<D>>) -> Result<StatsResponse, ApiError>
where
    D: CustomerDirectory + Send + Sync + 'static,
{
    let overview = state.portfolio.overview().await?;
    Ok(StatsResponse::Ok(Json(overview)))
}
