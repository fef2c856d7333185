//! Port definitions: traits that adapters implement.
//!
//! Client-side ports (`RiskApi`, `Authenticator`, `Delay`, `InterventionSink`)
//! return plain futures: the browser adapter's futures are not `Send`.
//! `CustomerDirectory` backs the multi-threaded fixture server and requires
//! `Send` futures.

pub mod auth;
pub mod directory;
pub mod intervention_sink;
pub mod risk_api;

pub use auth::{Authenticator, Delay};
pub use directory::CustomerDirectory;
pub use intervention_sink::InterventionSink;
pub use risk_api::RiskApi;
