//! Risk API client wrapping `gloo-net`.
//!
//! Plain GET requests with no body, headers or credentials. Non-success
//! statuses, transport failures and malformed bodies are kept apart so the
//! pages can tell "not found" from everything else.

use catalyst_app::config::ClientConfig;
use catalyst_app::error::FetchError;
use catalyst_app::ports::RiskApi;
use catalyst_app::routes::encode_path_segment;
use catalyst_domain::customer::Customer;
use catalyst_domain::dashboard::DashboardOverview;
use catalyst_domain::id::CustomerId;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// [`RiskApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRiskApi {
    config: ClientConfig,
}

impl HttpRiskApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl RiskApi for HttpRiskApi {
    async fn dashboard_overview(&self) -> Result<DashboardOverview, FetchError> {
        get_json(&self.config.endpoint("dashboard-stats")).await
    }

    async fn customer(&self, id: &CustomerId) -> Result<Customer, FetchError> {
        let path = format!("customer/{}", encode_path_segment(id.as_str()));
        get_json(&self.config.endpoint(&path)).await
    }
}

/// GET `url` and decode the JSON body.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    if !resp.ok() {
        log::debug!("GET {url} answered {}", resp.status());
        return Err(FetchError::from_status(resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))
}
