// tunion-rs/libtunion/src/constants.rs
//! Protocol constants for T-Union cards

/// PPSE discovery name: "2PAY.SYS.DDF01"
pub const PPSE_AID: &[u8] = b"2PAY.SYS.DDF01";

/// Application label the PPSE response must advertise
pub const T_UNION_APPL_LABEL: &str = "MOT.T.UNION";

/// EMV tags recognized in select-application responses
pub const TAG_AID: u16 = 0x4F;
pub const TAG_APPL_LABEL: u16 = 0x50;
pub const TAG_DF_NAME: u16 = 0x84;
pub const TAG_PRIORITY: u16 = 0x87;
pub const TAG_APP_VERSION: u16 = 0x9F08;
pub const TAG_APP_META: u16 = 0x9F0C;

/// Maximum AID length accepted from a card
pub const AID_MAX_LEN: usize = 16;

/// Maximum application label length (visible characters)
pub const APPL_LABEL_MAX_LEN: usize = 16;

/// Maximum TLV nesting depth before the response is rejected
pub const MAX_TLV_DEPTH: usize = 8;

/// Minimum length of the 9F0C application metadata value
pub const APP_META_MIN_LEN: usize = 0x1C;

/// Read balance response: 6 bytes
pub const BALANCE_RESP_LEN: usize = 6;

/// Transaction log file
pub const TRANSACTIONS_SFI: u8 = 0x18;
pub const TRANSACTIONS_MAX: usize = 10;
pub const TRANSACTION_RESP_LEN: usize = 25;

/// Travel log file
pub const TRAVELS_SFI: u8 = 0x1E;
pub const TRAVELS_MAX: usize = 30;
pub const TRAVEL_RESP_LEN: usize = 50;

/// Scratch buffer capacity shared by every command/response
pub const SCRATCH_CAPACITY: usize = 256;
