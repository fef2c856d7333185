//! Client configuration, embedded at build time.

use catalyst_app::config::ClientConfig;
use leptos::prelude::*;

const EMBEDDED: &str = include_str!("../catalyst.toml");

/// Parse the embedded `catalyst.toml`, then apply `CATALYST_API_BASE` if it
/// was set at build time. Falls back to defaults when the file is invalid.
#[must_use]
pub fn load() -> ClientConfig {
    let config = ClientConfig::from_toml(EMBEDDED).unwrap_or_else(|err| {
        log::error!("invalid embedded catalyst.toml, using defaults: {err}");
        ClientConfig::default()
    });
    let config = config.with_api_base(option_env!("CATALYST_API_BASE"));
    log::debug!("risk API at {}", config.api.base_url);
    config
}

/// Access the client configuration from Leptos context.
///
/// Must be called within the component tree of [`App`](crate::App).
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig not found in context")
}
