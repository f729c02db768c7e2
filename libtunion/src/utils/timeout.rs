//! Timeout helpers. Every transport exchange receives its deadline
//! explicitly; these constants are only the defaults `PollerConfig` starts
//! from.

use std::time::Duration;

/// Default per-exchange timeout in milliseconds.
pub const DEFAULT_EXCHANGE_TIMEOUT_MS: u64 = 1000;

/// Delay after card detection before the first command is sent.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;

/// Delay after a terminal state.
pub const DEFAULT_IDLE_DELAY_MS: u64 = 100;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

pub fn default_exchange_timeout() -> Duration {
    ms(DEFAULT_EXCHANGE_TIMEOUT_MS)
}

/// Sleep for `delay`; zero returns immediately.
pub(crate) fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
