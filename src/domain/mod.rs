use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CountdownError;

pub mod clock;
pub mod duration;
pub mod plural;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::{format_remaining, Breakdown};
pub use plural::{PluralForm, TimeUnit, LESS_THAN_A_MINUTE};
pub use time::{parse_instant, time_remaining, time_remaining_with};

// ==================================================
// AUCTION
// ==================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: String,
    pub title: String,
    #[serde(rename = "endDateIso", default)]
    pub end_date_iso: Option<String>,
    #[serde(rename = "currentBid", default)]
    pub current_bid: Option<Decimal>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Auction {
    /// Listed as active and not yet past its end date.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.active && matches!(self.remaining(now), Ok(Some(_)))
    }

    /// Localized remaining time, see [`time_remaining`].
    pub fn remaining(&self, now: DateTime<Utc>) -> Result<Option<String>, CountdownError> {
        time_remaining(self.end_date_iso.as_deref(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_catalog_fields() {
        let raw = r#"{
            "id": "lot-7",
            "title": "ساعة يد كلاسيكية",
            "endDateIso": "2026-01-01T13:00:00",
            "currentBid": "125.50"
        }"#;

        let auction: Auction = serde_json::from_str(raw).unwrap();
        assert_eq!(auction.id, "lot-7");
        assert_eq!(auction.end_date_iso.as_deref(), Some("2026-01-01T13:00:00"));
        assert_eq!(auction.current_bid, Some(dec!(125.50)));
        assert!(auction.active);
    }

    #[test]
    fn open_only_before_end() {
        let auction = Auction {
            id: "lot-1".to_string(),
            title: "Lot".to_string(),
            end_date_iso: Some("2026-01-01T13:00:00Z".to_string()),
            current_bid: None,
            active: true,
        };

        let before = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 1, 1, 13, 0, 1).unwrap();
        assert!(auction.is_open(before));
        assert!(!auction.is_open(after));
        assert_eq!(auction.remaining(before).unwrap().as_deref(), Some("1 ساعة"));

        let withdrawn = Auction {
            active: false,
            ..auction
        };
        assert!(!withdrawn.is_open(before));
    }
}
