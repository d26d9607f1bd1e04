use std::time::Duration;

/// Injectable artificial latency
///
/// Models the asynchronous backend the engine will eventually sit behind:
/// every service operation awaits the latency before its effect becomes
/// observable. Tests use [`Latency::none`] to stay deterministic and fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    delay: Duration,
}

impl Latency {
    /// No artificial delay (test default)
    pub fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// Fixed delay before every operation
    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Await the configured delay
    pub(crate) async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
