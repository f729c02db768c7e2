// tunion-rs/libtunion/src/transport/pcsc.rs

//! PC/SC reader transport (`--features pcsc`).
//!
//! PC/SC has no per-call deadline; the reader driver's own timeout applies
//! and a driver timeout is reported as [`LinkError::Timeout`].

use std::time::Duration;

use log::{debug, error};
use pcsc::{Card, Context, Error as PcscError, Protocols, Scope, ShareMode};

use crate::transport::traits::Transport;
use crate::{Error, LinkError, Result};

/// Transport over a card connected through a PC/SC reader.
pub struct PcscTransport {
    card: Card,
}

impl PcscTransport {
    /// Connect to a card on the first reader that has one.
    pub fn open() -> Result<Self> {
        let context = Context::establish(Scope::User).map_err(map_open_error)?;
        let readers = context.list_readers_owned().map_err(map_open_error)?;

        for reader in readers {
            match context.connect(&reader, ShareMode::Shared, Protocols::ANY) {
                Ok(card) => {
                    debug!("Connected to card on {:?}", reader);
                    return Ok(Self { card });
                }
                Err(e) => debug!("No card on {:?}: {}", reader, e),
            }
        }
        Err(Error::NotPresent)
    }

    pub fn from_card(card: Card) -> Self {
        Self { card }
    }
}

fn map_open_error(err: PcscError) -> Error {
    error!("PC/SC setup failed: {}", err);
    Error::from(map_link_error(err))
}

fn map_link_error(err: PcscError) -> LinkError {
    match err {
        PcscError::NoSmartcard | PcscError::RemovedCard | PcscError::ResetCard => {
            LinkError::NotPresent
        }
        PcscError::Timeout => LinkError::Timeout,
        _ => LinkError::Protocol,
    }
}

impl Transport for PcscTransport {
    fn exchange(
        &mut self,
        command: &[u8],
        response: &mut Vec<u8>,
        _timeout: Duration,
    ) -> std::result::Result<(), LinkError> {
        let mut rbuf = [0u8; pcsc::MAX_BUFFER_SIZE];
        let rapdu = self.card.transmit(command, &mut rbuf).map_err(map_link_error)?;
        response.extend_from_slice(rapdu);
        Ok(())
    }
}
