use crate::types::{Amount, Timestamp};

/// Meaning of a travel entry's primary type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelKind {
    /// 3: tap in
    Enter,
    /// 4: tap out
    Exit,
    /// 6: flat fare, single tap
    SingleSwipe,
    Other(u8),
}

impl From<u8> for TravelKind {
    fn from(value: u8) -> Self {
        match value {
            3 => TravelKind::Enter,
            4 => TravelKind::Exit,
            6 => TravelKind::SingleSwipe,
            o => TravelKind::Other(o),
        }
    }
}

/// One entry of the travel log (SFI 0x1E).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Travel {
    pub travel_type: u8,
    pub sub_type: u8,
    /// 14 hex digits
    pub station_id: String,
    /// 16 hex digits
    pub terminal_id: String,
    pub amount: u32,
    /// Balance after this entry
    pub balance: u32,
    pub timestamp: Timestamp,
    /// City code, 4 hex digits
    pub area_id: String,
    /// 16 hex digits
    pub institution_id: String,
}

impl Travel {
    pub fn is_populated(&self) -> bool {
        self.travel_type != 0
    }

    pub fn kind(&self) -> TravelKind {
        TravelKind::from(self.travel_type)
    }

    /// Fares are always debits.
    pub fn fare(&self) -> Amount {
        Amount::new(-i64::from(self.amount))
    }
}
