//! # catalyst-app
//!
//! Application layer: view-state use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `RiskApi`: fetch dashboard stats and customer records
//!   - `Authenticator` / `Delay`: sign-in (simulated in this build)
//!   - `InterventionSink`: acknowledge applied interventions
//!   - `CustomerDirectory`: customer source behind the demo fixture API
//! - Define **use-case services** that turn port results into view state:
//!   - `DashboardService`: stats, placeholder fallback, critical alerts
//!   - `CustomerDetailService`: one customer, not-found vs generic failure
//!   - `InterventionService`: select/apply flow over an `InterventionEngine`
//!   - `LoginService`: guarded submit over an `Authenticator`
//!   - `PortfolioService`: overview and lookup for the fixture API
//! - Scope asynchronous loads to the lifetime of the view that started them
//! - Describe the client routes and load client configuration
//!
//! ## Dependency rule
//! Depends on `catalyst-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod ports;
pub mod routes;
pub mod services;
