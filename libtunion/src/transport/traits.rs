// tunion-rs/libtunion/src/transport/traits.rs

use std::time::Duration;

use crate::LinkError;

/// Transport trait abstracts the ISO14443-4A link away from the protocol.
///
/// Framing below the APDU layer is the implementation's concern. The
/// response buffer is cleared by the caller and must receive the complete
/// response, status trailer included.
pub trait Transport {
    /// Send one command and block until the response arrives or `timeout`
    /// elapses.
    fn exchange(
        &mut self,
        command: &[u8],
        response: &mut Vec<u8>,
        timeout: Duration,
    ) -> Result<(), LinkError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn exchange(
        &mut self,
        command: &[u8],
        response: &mut Vec<u8>,
        timeout: Duration,
    ) -> Result<(), LinkError> {
        (**self).exchange(command, response, timeout)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn exchange(
        &mut self,
        command: &[u8],
        response: &mut Vec<u8>,
        timeout: Duration,
    ) -> Result<(), LinkError> {
        (**self).exchange(command, response, timeout)
    }
}
