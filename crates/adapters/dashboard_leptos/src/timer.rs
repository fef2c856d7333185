//! Browser timer adapter.

use std::time::Duration;

use catalyst_app::ports::Delay;
use gloo_timers::future::TimeoutFuture;

/// [`Delay`] backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

impl Delay for GlooDelay {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
