use std::time::Duration;

use log::{debug, error};

use crate::Result;
use crate::card::Message;
use crate::constants::{TRANSACTIONS_MAX, TRANSACTIONS_SFI, TRAVELS_MAX, TRAVELS_SFI};
use crate::poller::Session;
use crate::protocol::{Command, parser, responses};
use crate::transport::Transport;

use super::transceive;

/// READ RECORD `record` (1-based) of `sfi`, leaving the raw record in
/// `session.rx`. A bare error status word fails the read.
pub fn read_sfi_record<T: Transport + ?Sized>(
    transport: &mut T,
    session: &mut Session,
    sfi: u8,
    record: u8,
    timeout: Duration,
) -> Result<()> {
    debug!("Read SFI={:02X} record {}", sfi, record);
    transceive(transport, session, &Command::ReadRecord { sfi, record }, timeout)?;
    parser::check_status(&session.rx).inspect_err(|_| {
        error!("Failed to read SFI 0x{:X} record {}", sfi, record);
    })
}

/// Read up to `max` transaction records (clamped to the log capacity),
/// stopping at the first failure. Returns the number of records stored.
pub fn read_transactions<T: Transport + ?Sized>(
    transport: &mut T,
    session: &mut Session,
    message: &mut Message,
    max: usize,
    timeout: Duration,
) -> Result<usize> {
    let max = max.min(TRANSACTIONS_MAX);
    for index in 0..max {
        read_sfi_record(transport, session, TRANSACTIONS_SFI, index as u8 + 1, timeout)?;
        let transaction = responses::decode_transaction(&session.rx).inspect_err(|e| {
            error!("Bad transaction record {}: {}", index + 1, e);
        })?;
        message.store_transaction(index, transaction)?;
    }
    Ok(max)
}

/// Read up to `max` travel records (clamped to the log capacity), stopping
/// at the first failure. Returns the number of records stored.
pub fn read_travels<T: Transport + ?Sized>(
    transport: &mut T,
    session: &mut Session,
    message: &mut Message,
    max: usize,
    timeout: Duration,
) -> Result<usize> {
    let max = max.min(TRAVELS_MAX);
    for index in 0..max {
        read_sfi_record(transport, session, TRAVELS_SFI, index as u8 + 1, timeout)?;
        let travel = responses::decode_travel(&session.rx).inspect_err(|e| {
            error!("Bad travel record {}: {}", index + 1, e);
        })?;
        message.store_travel(index, travel)?;
    }
    Ok(max)
}
