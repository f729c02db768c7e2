// tunion-rs/libtunion/src/error.rs

use derive_more::Display;
use thiserror::Error;

/// Link-layer failures reported by a [`crate::transport::Transport`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("card left the field")]
    NotPresent,

    #[error("exchange timed out")]
    Timeout,

    #[error("link protocol error")]
    Protocol,
}

/// Coarse error taxonomy surfaced to the presentation layer.
///
/// `None` is the resting value of a session that has not failed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    #[default]
    None,
    NotPresent,
    Timeout,
    Protocol,
    UnsupportedApplication,
}

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("card not present")]
    NotPresent,

    #[error("operation timed out")]
    Timeout,

    #[error("transport protocol error")]
    Link,

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("card status: sw1={sw1:#04x} sw2={sw2:#04x}")]
    CardStatus { sw1: u8, sw2: u8 },

    #[error("malformed tlv: {0}")]
    MalformedTlv(String),

    #[error("tlv nesting exceeds {0} levels")]
    TlvTooDeep(usize),

    #[error("response contained no recognized tag")]
    NoRecognizedTags,

    #[error("missing tag {0:#06x}")]
    MissingTag(u16),

    #[error("unsupported application: {0:?}")]
    UnsupportedApplication(String),

    #[error("no transport configured")]
    TransportMissing,
}

impl Error {
    /// Map a detailed error onto the taxonomy reported through callbacks.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotPresent => ErrorKind::NotPresent,
            Error::Timeout => ErrorKind::Timeout,
            Error::UnsupportedApplication(_) => ErrorKind::UnsupportedApplication,
            _ => ErrorKind::Protocol,
        }
    }
}

impl From<LinkError> for Error {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::NotPresent => Error::NotPresent,
            LinkError::Timeout => Error::Timeout,
            LinkError::Protocol => Error::Link,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
