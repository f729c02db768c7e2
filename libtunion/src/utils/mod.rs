//! Small helpers shared across the crate: hex dumps for trace output and
//! timeout conversions.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
