// tunion-rs/libtunion/src/poller/session.rs

use crate::constants::SCRATCH_CAPACITY;
use crate::types::Application;
use crate::{Error, ErrorKind};

use super::state::PollerState;

/// Mutable state of one polling session.
///
/// The two scratch buffers are allocated once and reused by every command;
/// they are cleared before each exchange and never shrunk.
#[derive(Debug)]
pub struct Session {
    pub(crate) state: PollerState,
    pub(crate) last_error: ErrorKind,
    pub(crate) last_failure: Option<Error>,
    pub(crate) application: Application,
    pub(crate) tx: Vec<u8>,
    pub(crate) rx: Vec<u8>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: PollerState::Idle,
            last_error: ErrorKind::None,
            last_failure: None,
            application: Application::default(),
            tx: Vec::with_capacity(SCRATCH_CAPACITY),
            rx: Vec::with_capacity(SCRATCH_CAPACITY),
        }
    }

    pub fn state(&self) -> PollerState {
        self.state
    }

    pub fn last_error(&self) -> ErrorKind {
        self.last_error
    }

    /// Detailed cause of the most recent failure, if any.
    pub fn last_failure(&self) -> Option<&Error> {
        self.last_failure.as_ref()
    }

    pub fn application(&self) -> &Application {
        &self.application
    }

    pub(crate) fn clear_buffers(&mut self) {
        self.tx.clear();
        self.rx.clear();
    }

    /// Prepare for a new card: buffers, descriptor and error are cleared.
    pub(crate) fn begin(&mut self) {
        self.clear_buffers();
        self.application.reset();
        self.last_error = ErrorKind::None;
        self.last_failure = None;
    }

    pub(crate) fn record_failure(&mut self, err: Error) {
        self.last_error = err.kind();
        self.last_failure = Some(err);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
