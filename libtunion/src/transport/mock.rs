// tunion-rs/libtunion/src/transport/mock.rs

use std::collections::VecDeque;
use std::time::Duration;

use crate::LinkError;
use crate::transport::traits::Transport;

/// Mock transport for unit tests. It records sent commands and returns
/// queued outcomes in order; an empty queue behaves like a silent card.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Result<Vec<u8>, LinkError>>,
    /// Timeout passed with each exchange, in call order
    pub timeouts: Vec<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue a link-level failure for the next exchange.
    pub fn push_error(&mut self, err: LinkError) {
        self.responses.push_back(Err(err));
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Number of commands whose instruction byte equals `ins`.
    pub fn count_instruction(&self, ins: u8) -> usize {
        self.sent.iter().filter(|c| c.get(1) == Some(&ins)).count()
    }
}

impl Transport for MockTransport {
    fn exchange(
        &mut self,
        command: &[u8],
        response: &mut Vec<u8>,
        timeout: Duration,
    ) -> Result<(), LinkError> {
        self.sent.push(command.to_vec());
        self.timeouts.push(timeout);
        match self.responses.pop_front() {
            Some(Ok(bytes)) => {
                response.extend_from_slice(&bytes);
                Ok(())
            }
            Some(Err(e)) => Err(e),
            None => Err(LinkError::Timeout),
        }
    }
}
