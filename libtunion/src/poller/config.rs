// tunion-rs/libtunion/src/poller/config.rs

use std::time::Duration;

use crate::constants::{PPSE_AID, T_UNION_APPL_LABEL, TRANSACTIONS_MAX, TRAVELS_MAX};
use crate::utils::{DEFAULT_IDLE_DELAY_MS, DEFAULT_SETTLE_DELAY_MS, default_exchange_timeout, ms};

/// Tunables for a [`super::Poller`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// Deadline handed to every transport exchange
    pub exchange_timeout: Duration,
    /// Wait between card detection and the first command
    pub settle_delay: Duration,
    /// Wait after a terminal state
    pub idle_delay: Duration,
    pub ppse_aid: Vec<u8>,
    /// Label the PPSE response must advertise
    pub expected_label: String,
    /// Transaction records to read, clamped to the log capacity
    pub transactions_max: usize,
    /// Travel records to read, clamped to the log capacity
    pub travels_max: usize,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            exchange_timeout: default_exchange_timeout(),
            settle_delay: ms(DEFAULT_SETTLE_DELAY_MS),
            idle_delay: ms(DEFAULT_IDLE_DELAY_MS),
            ppse_aid: PPSE_AID.to_vec(),
            expected_label: T_UNION_APPL_LABEL.to_string(),
            transactions_max: TRANSACTIONS_MAX,
            travels_max: TRAVELS_MAX,
        }
    }
}

impl PollerConfig {
    /// Zero delays; for tests and replaying captured sessions.
    pub fn immediate() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            idle_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
