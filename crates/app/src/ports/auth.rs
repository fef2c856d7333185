//! Authentication port.
//!
//! No identity service exists yet; the shipped implementation is
//! [`SimulatedAuthenticator`](crate::services::login_service::SimulatedAuthenticator).

use std::future::Future;
use std::time::Duration;

use crate::error::AuthError;

/// What the sign-in form collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An established session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// `true` when no identity service verified anything.
    pub simulated: bool,
}

/// Turns credentials into a session.
pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<Session, AuthError>>;
}

/// Timer abstraction so the simulated sign-in works on any executor.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
