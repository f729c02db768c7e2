// tunion-rs/libtunion/src/poller/state.rs

//! Forward-only session state machine.
//!
//! `Idle → SelectPpse → SelectApplication → ReadBalance → ReadTransactions →
//! ReadTravels → Success`, with every state able to drop to `Fail`.

use std::time::Duration;

use derive_more::Display;
use log::{debug, error};

use crate::card::{Message, operations};
use crate::transport::Transport;
use crate::{Error, ErrorKind, Result};

use super::config::PollerConfig;
use super::session::Session;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollerState {
    Idle,
    SelectPpse,
    SelectApplication,
    ReadBalance,
    ReadTransactions,
    ReadTravels,
    Success,
    Fail,
}

impl PollerState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PollerState::Success | PollerState::Fail)
    }
}

/// Milestones reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerEvent {
    Detected,
    Success,
    Fail(ErrorKind),
}

/// Caller's answer to a [`PollerEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollerCommand {
    #[default]
    Continue,
    Stop,
}

/// Outcome of running one state's handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: PollerState,
    /// Event to hand to the caller, if this state reports one
    pub event: Option<PollerEvent>,
    /// Wait applied after the event has been delivered
    pub delay: Duration,
}

impl Transition {
    fn to(next: PollerState) -> Self {
        Self {
            next,
            event: None,
            delay: Duration::ZERO,
        }
    }
}

/// Everything a handler may touch during one transition.
pub(crate) struct StepContext<'a, T: Transport + ?Sized> {
    pub transport: &'a mut T,
    pub session: &'a mut Session,
    pub message: &'a mut Message,
    pub config: &'a PollerConfig,
}

/// Run the handler for `state` and report where the machine goes next.
pub(crate) fn transition<T: Transport + ?Sized>(
    state: PollerState,
    ctx: &mut StepContext<'_, T>,
) -> Transition {
    let outcome = match state {
        PollerState::Idle => return idle(ctx),
        PollerState::SelectPpse => select_ppse(ctx),
        PollerState::SelectApplication => select_application(ctx),
        PollerState::ReadBalance => read_balance(ctx),
        PollerState::ReadTransactions => read_transactions(ctx),
        PollerState::ReadTravels => read_travels(ctx),
        PollerState::Success => {
            return Transition {
                next: PollerState::Success,
                event: Some(PollerEvent::Success),
                delay: ctx.config.idle_delay,
            };
        }
        PollerState::Fail => {
            return Transition {
                next: PollerState::Fail,
                event: Some(PollerEvent::Fail(ctx.session.last_error)),
                delay: ctx.config.idle_delay,
            };
        }
    };

    match outcome {
        Ok(next) => Transition::to(next),
        Err(e) => {
            error!("{} failed: {}", state, e);
            ctx.session.record_failure(e);
            Transition::to(PollerState::Fail)
        }
    }
}

fn idle<T: Transport + ?Sized>(ctx: &mut StepContext<'_, T>) -> Transition {
    ctx.session.begin();
    ctx.message.reset();
    Transition {
        next: PollerState::SelectPpse,
        event: Some(PollerEvent::Detected),
        delay: ctx.config.settle_delay,
    }
}

fn select_ppse<T: Transport + ?Sized>(ctx: &mut StepContext<'_, T>) -> Result<PollerState> {
    operations::select_application(
        ctx.transport,
        ctx.session,
        ctx.message,
        &ctx.config.ppse_aid,
        ctx.config.exchange_timeout,
    )?;

    let application = &ctx.session.application;
    if !application.label_matches(&ctx.config.expected_label) {
        let label = application.label.clone().unwrap_or_default();
        return Err(Error::UnsupportedApplication(label));
    }
    debug!("PPSE advertises {}", application.aid.to_hex());
    Ok(PollerState::SelectApplication)
}

fn select_application<T: Transport + ?Sized>(
    ctx: &mut StepContext<'_, T>,
) -> Result<PollerState> {
    let aid = ctx.session.application.aid;
    operations::select_application(
        ctx.transport,
        ctx.session,
        ctx.message,
        aid.as_bytes(),
        ctx.config.exchange_timeout,
    )?;
    Ok(PollerState::ReadBalance)
}

fn read_balance<T: Transport + ?Sized>(ctx: &mut StepContext<'_, T>) -> Result<PollerState> {
    operations::read_balance(
        ctx.transport,
        ctx.session,
        ctx.message,
        ctx.config.exchange_timeout,
    )?;
    Ok(PollerState::ReadTransactions)
}

fn read_transactions<T: Transport + ?Sized>(
    ctx: &mut StepContext<'_, T>,
) -> Result<PollerState> {
    operations::read_transactions(
        ctx.transport,
        ctx.session,
        ctx.message,
        ctx.config.transactions_max,
        ctx.config.exchange_timeout,
    )?;
    Ok(PollerState::ReadTravels)
}

fn read_travels<T: Transport + ?Sized>(ctx: &mut StepContext<'_, T>) -> Result<PollerState> {
    operations::read_travels(
        ctx.transport,
        ctx.session,
        ctx.message,
        ctx.config.travels_max,
        ctx.config.exchange_timeout,
    )?;
    Ok(PollerState::Success)
}
