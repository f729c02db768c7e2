// tunion-rs/libtunion/src/prelude.rs

pub use crate::card::{Message, Transaction, TransactionKind, Travel, TravelKind};
pub use crate::poller::{
    Poller, PollerBuilder, PollerCommand, PollerConfig, PollerEvent, PollerState,
};
pub use crate::transport::Transport;
pub use crate::{
    Aid, Amount, Application, CardDate, CardType, Error, ErrorKind, LinkError, Result, Timestamp,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_spaced, default_exchange_timeout, ms, parse_hex};
