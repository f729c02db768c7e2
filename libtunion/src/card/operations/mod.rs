//! Command execution: each operation clears the session's scratch buffers,
//! encodes one command, exchanges it over the transport with an explicit
//! timeout and hands the response to the matching decoder. Link errors are
//! translated into [`crate::Error`] here and nowhere else, and a response
//! longer than [`SCRATCH_CAPACITY`] is rejected before any decoder sees it.

pub mod balance;
pub mod records;
pub mod select;

pub use balance::read_balance;
pub use records::{read_sfi_record, read_transactions, read_travels};
pub use select::select_application;

use std::time::Duration;

use log::{error, trace};

use crate::constants::SCRATCH_CAPACITY;
use crate::poller::Session;
use crate::protocol::Command;
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Send `cmd` and leave the response in `session.rx`.
pub(crate) fn transceive<T: Transport + ?Sized>(
    transport: &mut T,
    session: &mut Session,
    cmd: &Command,
    timeout: Duration,
) -> Result<()> {
    session.clear_buffers();
    cmd.encode_into(&mut session.tx);

    let outcome = transport.exchange(&session.tx, &mut session.rx, timeout);

    trace!("TX: {}", bytes_to_hex_spaced(&session.tx));
    trace!("RX: {}", bytes_to_hex_spaced(&session.rx));

    outcome.map_err(|e| {
        error!("Exchange failed for INS {:02X}: {}", cmd.instruction(), e);
        Error::from(e)
    })?;

    let actual = session.rx.len();
    if actual > SCRATCH_CAPACITY {
        error!(
            "Response to INS {:02X} overflows scratch buffer: {} bytes",
            cmd.instruction(),
            actual
        );
        session.clear_buffers();
        session.rx.shrink_to(SCRATCH_CAPACITY);
        return Err(Error::InvalidLength {
            expected: SCRATCH_CAPACITY,
            actual,
        });
    }
    Ok(())
}
