//! Login service: the sign-in form and its (simulated) authenticator.
//!
//! There is no identity service yet. [`SimulatedAuthenticator`] waits a fixed
//! delay and succeeds for any input; the returned [`Session`] says so.

use std::time::Duration;

use crate::config::LoginConfig;
use crate::error::AuthError;
use crate::ports::auth::{Credentials, Session};
use crate::ports::{Authenticator, Delay};

/// Sign-in form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    submitting: bool,
}

impl LoginForm {
    /// Form prefilled with the configured demo credentials.
    #[must_use]
    pub fn from_config(config: &LoginConfig) -> Self {
        Self {
            email: config.email.clone(),
            password: config.password.clone(),
            remember_me: false,
            submitting: false,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Enter the submitting state. `None` if a submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn finish(&mut self) {
        self.submitting = false;
    }

    /// Label of the submit button.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Authenticating..."
        } else {
            "Sign In"
        }
    }
}

/// Signs in through an [`Authenticator`].
#[derive(Debug, Clone)]
pub struct LoginService<A> {
    authenticator: A,
}

impl<A: Authenticator> LoginService<A> {
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }

    /// Exchange credentials taken from [`LoginForm::begin_submit`] for a session.
    ///
    /// # Errors
    ///
    /// Propagates the authenticator's [`AuthError`].
    pub async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthError> {
        let result = self.authenticator.authenticate(credentials).await;
        match &result {
            Ok(session) => tracing::info!(simulated = session.simulated, "signed in"),
            Err(err) => tracing::warn!(error = %err, "sign-in failed"),
        }
        result
    }
}

/// Stand-in authenticator: waits, then accepts anything.
///
/// Credentials are neither checked nor transmitted.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator<D> {
    delay: D,
    wait: Duration,
}

impl<D: Delay> SimulatedAuthenticator<D> {
    pub fn new(delay: D, wait: Duration) -> Self {
        Self { delay, wait }
    }
}

impl<D: Delay> Authenticator for SimulatedAuthenticator<D> {
    async fn authenticate(&self, _credentials: Credentials) -> Result<Session, AuthError> {
        self.delay.sleep(self.wait).await;
        Ok(Session { simulated: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDelay {
        waits: RefCell<Vec<Duration>>,
    }

    impl Delay for &RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }

    struct RejectingAuthenticator;

    impl Authenticator for RejectingAuthenticator {
        async fn authenticate(&self, _credentials: Credentials) -> Result<Session, AuthError> {
            Err(AuthError::Rejected)
        }
    }

    #[test]
    fn should_prefill_demo_credentials() {
        let form = LoginForm::from_config(&LoginConfig::default());
        assert_eq!(form.email, "risk.officer@barclays.com");
        assert_eq!(form.password, "securepassword");
        assert!(!form.remember_me);
        assert_eq!(form.submit_label(), "Sign In");
    }

    #[test]
    fn should_ignore_second_submit_while_in_flight() {
        let mut form = LoginForm::default();
        assert!(form.begin_submit().is_some());
        assert_eq!(form.submit_label(), "Authenticating...");
        assert!(form.begin_submit().is_none());
        form.finish();
        assert!(form.begin_submit().is_some());
    }

    #[tokio::test]
    async fn should_wait_configured_delay_and_succeed() {
        let delay = RecordingDelay::default();
        let svc = LoginService::new(SimulatedAuthenticator::new(
            &delay,
            Duration::from_millis(1000),
        ));
        let mut form = LoginForm::from_config(&LoginConfig::default());
        let credentials = form.begin_submit().unwrap();

        let session = svc.sign_in(credentials).await.unwrap();
        form.finish();
        assert!(session.simulated);
        assert!(!form.is_submitting());
        assert_eq!(delay.waits.borrow().as_slice(), [Duration::from_secs(1)]);
    }

    #[tokio::test]
    async fn should_succeed_for_any_input() {
        let delay = RecordingDelay::default();
        let svc = LoginService::new(SimulatedAuthenticator::new(&delay, Duration::ZERO));
        let credentials = Credentials {
            email: "not an email".to_string(),
            password: String::new(),
        };

        assert!(svc.sign_in(credentials).await.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_rejection() {
        let svc = LoginService::new(RejectingAuthenticator);
        let mut form = LoginForm::default();
        let credentials = form.begin_submit().unwrap();
        assert_eq!(svc.sign_in(credentials).await, Err(AuthError::Rejected));
    }
}
