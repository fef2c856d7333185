//! # catalyst-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **demo fixture API** the browser dashboard reads from:
//!   `GET /dashboard-stats` and `GET /customer/{id}`, plus `GET /` and
//!   `GET /health` for liveness checks
//! - Map HTTP requests into `PortfolioService` calls (driving adapter)
//! - Map domain errors into JSON `{"detail": ...}` responses
//! - Allow cross-origin reads so the client can be served from another port
//!
//! The fixture API hands out seed data. It computes no scores.
//!
//! ## Dependency rule
//! Depends on `catalyst-app` (for port traits and services) and
//! `catalyst-domain` (for the JSON shapes). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
