// tunion-rs/libtunion/src/types.rs

use crate::constants::{AID_MAX_LEN, APPL_LABEL_MAX_LEN};
use crate::{Error, Result};
use std::fmt;

/// AID - Newtype Pattern (最大 16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Aid {
    bytes: [u8; AID_MAX_LEN],
    len: u8,
}

impl Aid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::protocol::codec::bytes_to_str_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > AID_MAX_LEN {
            return Err(Error::InvalidLength {
                expected: AID_MAX_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; AID_MAX_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// Application descriptor gathered while decoding a select response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Application {
    pub aid: Aid,
    pub label: Option<String>,
    pub priority: u8,
}

impl Application {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Store a label, rejecting values longer than the card format allows.
    /// Non-ASCII bytes are replaced rather than rejected.
    pub fn set_label(&mut self, raw: &[u8]) -> Result<()> {
        if raw.len() > APPL_LABEL_MAX_LEN {
            return Err(Error::InvalidLength {
                expected: APPL_LABEL_MAX_LEN,
                actual: raw.len(),
            });
        }
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        self.label = Some(String::from_utf8_lossy(&raw[..end]).into_owned());
        Ok(())
    }

    pub fn label_matches(&self, expected: &str) -> bool {
        self.label.as_deref() == Some(expected)
    }
}

/// Card type code from the application metadata (one BCD byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardType(u8);

impl CardType {
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn code(&self) -> u8 {
        self.0
    }
}

/// Calendar date decoded from BCD (`YYYY MM DD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl fmt::Display for CardDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Date and time decoded from a 7-byte BCD run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    pub date: CardDate,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

/// Signed amount in minor currency units (fen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amount(i64);

impl Amount {
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
