//! Application services: use-case orchestration over port traits.

pub mod customer_service;
pub mod dashboard_service;
pub mod intervention_service;
pub mod login_service;
pub mod portfolio_service;
