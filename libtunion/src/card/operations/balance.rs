use std::time::Duration;

use log::{debug, error};

use crate::Result;
use crate::card::Message;
use crate::poller::Session;
use crate::protocol::{Command, responses};
use crate::transport::Transport;

use super::transceive;

/// Read the purse balance into `message.balance`.
pub fn read_balance<T: Transport + ?Sized>(
    transport: &mut T,
    session: &mut Session,
    message: &mut Message,
    timeout: Duration,
) -> Result<()> {
    debug!("Send Read Balance Cmd");
    transceive(transport, session, &Command::ReadBalance, timeout)?;

    message.balance = responses::decode_balance(&session.rx).inspect_err(|e| {
        error!("Failed to Read Balance: {}", e);
    })?;
    Ok(())
}
