// tunion-rs/libtunion/src/poller/builder.rs

use std::time::Duration;

use crate::transport::Transport;
use crate::{Error, Result};

use super::config::PollerConfig;
use super::handle::Poller;

/// Helper to construct a Poller with optional configuration.
pub struct PollerBuilder<T: Transport> {
    transport: Option<T>,
    config: PollerConfig,
}

impl<T: Transport> PollerBuilder<T> {
    pub fn new() -> Self {
        Self {
            transport: None,
            config: PollerConfig::default(),
        }
    }

    /// Provide the transport (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: PollerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn exchange_timeout(mut self, timeout: Duration) -> Self {
        self.config.exchange_timeout = timeout;
        self
    }

    pub fn delays(mut self, settle: Duration, idle: Duration) -> Self {
        self.config.settle_delay = settle;
        self.config.idle_delay = idle;
        self
    }

    pub fn expected_label(mut self, label: impl Into<String>) -> Self {
        self.config.expected_label = label.into();
        self
    }

    pub fn record_limits(mut self, transactions: usize, travels: usize) -> Self {
        self.config.transactions_max = transactions;
        self.config.travels_max = travels;
        self
    }

    /// Consume the builder. Requires a transport.
    pub fn build(self) -> Result<Poller<T>> {
        match self.transport {
            Some(t) => Ok(Poller::new(t, self.config)),
            None => Err(Error::TransportMissing),
        }
    }
}

impl<T: Transport> Default for PollerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
