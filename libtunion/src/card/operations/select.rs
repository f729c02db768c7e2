use std::time::Duration;

use log::{debug, error};

use crate::card::Message;
use crate::constants::TAG_APPL_LABEL;
use crate::poller::Session;
use crate::protocol::Command;
use crate::protocol::tlv::{self, DecodeTarget};
use crate::transport::Transport;
use crate::types::Aid;
use crate::{Error, Result};

use super::transceive;

/// SELECT `aid` and decode the TLV response into the session's application
/// descriptor and `message`. The decoded tree must leave an application label
/// on the descriptor.
pub fn select_application<T: Transport + ?Sized>(
    transport: &mut T,
    session: &mut Session,
    message: &mut Message,
    aid: &[u8],
    timeout: Duration,
) -> Result<()> {
    let cmd = Command::Select {
        aid: Aid::try_from(aid)?,
    };
    debug!("Send Select Cmd");
    transceive(transport, session, &cmd, timeout)?;

    let mut target = DecodeTarget {
        application: &mut session.application,
        message,
    };
    if let Err(e) = tlv::decode_tlv(&session.rx, &mut target) {
        error!("Failed to parse application: {}", e);
        return Err(e);
    }

    if session.application.label.is_none() {
        error!("Select response carried no application label");
        return Err(Error::MissingTag(TAG_APPL_LABEL));
    }
    Ok(())
}
