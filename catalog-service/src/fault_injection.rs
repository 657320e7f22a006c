use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

/// Simulated server-side contention applied before a catalog response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultInjection {
    /// How long the request-handling thread is kept busy
    pub blocking_delay: Duration,
    /// Probability in `[0, 1]` that a request fails with a 500
    pub error_rate: f64,
}

impl FaultInjection {
    /// No delay, no injected errors
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            blocking_delay: Duration::ZERO,
            error_rate: 0.0,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.blocking_delay.is_zero() || self.error_rate > 0.0
    }

    /// Spins on the current thread for `blocking_delay`
    ///
    /// This deliberately does not yield to the runtime: on a single-threaded
    /// runtime every other request waits until the spin completes.
    pub fn block_thread(&self) {
        if self.blocking_delay.is_zero() {
            return;
        }

        let start = Instant::now();
        while start.elapsed() < self.blocking_delay {
            std::hint::spin_loop();
        }

        debug!(blocked_for = ?self.blocking_delay, "Thread was blocked");
    }

    /// Rolls the dice for an injected failure
    #[must_use]
    pub fn should_fail(&self) -> bool {
        if self.error_rate <= 0.0 {
            return false;
        }
        rand::thread_rng().gen_bool(self.error_rate.min(1.0))
    }
}

impl Default for FaultInjection {
    fn default() -> Self {
        Self::disabled()
    }
}
