// tunion-rs/libtunion/src/lib.rs

//! libtunion
//!
//! Protocol core for reading China T-Union transit cards over ISO14443-4A:
//! PPSE and application selection, balance, transaction log and travel log.

pub mod card;
pub mod constants;
pub mod error;
pub mod poller;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
