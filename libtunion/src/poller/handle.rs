// tunion-rs/libtunion/src/poller/handle.rs

use log::{debug, info};

use crate::card::Message;
use crate::transport::Transport;
use crate::types::Application;
use crate::utils::pause;
use crate::{Error, ErrorKind, Result};

use super::config::PollerConfig;
use super::session::Session;
use super::state::{PollerCommand, PollerEvent, PollerState, StepContext, transition};

/// Cooperative T-Union card poller.
///
/// Each call to [`Poller::step`] runs one state of the session. The caller's
/// message is borrowed per call, so it stays readable between steps.
pub struct Poller<T: Transport> {
    transport: T,
    config: PollerConfig,
    session: Session,
}

impl<T: Transport> Poller<T> {
    pub fn new(transport: T, config: PollerConfig) -> Self {
        Self {
            transport,
            config,
            session: Session::new(),
        }
    }

    /// Run the current state once.
    ///
    /// After a terminal state, `Continue` from the callback re-arms the
    /// machine at `Idle` for the next card; `Stop` leaves it where it is.
    pub fn step<F>(&mut self, message: &mut Message, mut callback: F) -> PollerCommand
    where
        F: FnMut(PollerEvent, &Message) -> PollerCommand,
    {
        let state = self.session.state;
        let mut ctx = StepContext {
            transport: &mut self.transport,
            session: &mut self.session,
            message: &mut *message,
            config: &self.config,
        };
        let t = transition(state, &mut ctx);

        let command = match t.event {
            Some(event) => {
                debug!("{} reports {:?}", state, event);
                callback(event, message)
            }
            None => PollerCommand::Continue,
        };
        pause(t.delay);

        self.session.state = match command {
            PollerCommand::Stop => state,
            PollerCommand::Continue if state.is_terminal() => PollerState::Idle,
            PollerCommand::Continue => t.next,
        };
        if self.session.state != state {
            debug!("{} -> {}", state, self.session.state);
        }
        command
    }

    /// Step until the callback answers `Stop`; returns the state the machine
    /// parked in.
    pub fn run<F>(&mut self, message: &mut Message, mut callback: F) -> PollerState
    where
        F: FnMut(PollerEvent, &Message) -> PollerCommand,
    {
        while self.step(message, &mut callback) == PollerCommand::Continue {}
        self.session.state
    }

    /// One complete read attempt from `Idle`. Returns the failure that ended
    /// the session, if any.
    pub fn read_card(&mut self, message: &mut Message) -> Result<()> {
        self.restart();
        let state = self.run(message, |event, _| match event {
            PollerEvent::Detected => PollerCommand::Continue,
            PollerEvent::Success | PollerEvent::Fail(_) => PollerCommand::Stop,
        });

        match state {
            PollerState::Success => {
                info!(
                    "Read card: balance {}, {} transactions, {} travels",
                    message.balance,
                    message.transaction_count(),
                    message.travel_count()
                );
                Ok(())
            }
            _ => Err(self
                .session
                .last_failure
                .clone()
                .unwrap_or(Error::Link)),
        }
    }

    /// Park the machine at `Idle`.
    pub fn restart(&mut self) {
        self.session.state = PollerState::Idle;
    }

    pub fn state(&self) -> PollerState {
        self.session.state
    }

    pub fn last_error(&self) -> ErrorKind {
        self.session.last_error
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn application(&self) -> &Application {
        &self.session.application
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
