// tunion-rs/libtunion/src/poller/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod session;
pub mod state;

pub use builder::PollerBuilder;
pub use config::PollerConfig;
pub use handle::Poller;
pub use session::Session;
pub use state::{PollerCommand, PollerEvent, PollerState, Transition};
