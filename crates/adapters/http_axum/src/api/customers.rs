//! Customer handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use catalyst_app::ports::CustomerDirectory;
use catalyst_domain::customer::Customer;
use catalyst_domain::error::CatalystError;
use catalyst_domain::id::CustomerId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Customer>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /customer/{id}`
pub async fn get<D>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    D: CustomerDirectory + Send + Sync + 'static,
{
    let id = CustomerId::new(id).map_err(CatalystError::from)?;
    let customer = state.portfolio.get_customer(&id).await?;
    Ok(GetResponse::Ok(Json(customer)))
}
