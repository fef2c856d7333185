//! # catalyst-domain
//!
//! Pure domain model for the catalyst financial-stress dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, dates
//! - Define **Customers** (backend-owned risk records, read-only on the client)
//! - Define **Dashboard stats** (display-ready metrics with a cosmetic status)
//! - Define the **Intervention catalog** and applied-intervention records
//! - Map risk levels, stat statuses and effectiveness tiers to display tones
//! - Hold the clearly-marked demo/stub data the dashboard shows in place of
//!   telemetry the backend does not provide yet
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;
pub mod tone;

pub mod customer;
pub mod dashboard;
pub mod demo;
pub mod intervention;
pub mod stat;
pub mod trend;
