//! Static event records as they appear in the data file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::group::Group;

/// Whether an event is still being promoted or already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
}

/// One public event.
///
/// The collection is immutable input, loaded whole; records are never
/// created, mutated, or deleted at runtime. `date` stays a string here so
/// a malformed value is handled by the schedule's ordering policy instead
/// of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub group: Group,
    pub title: String,
    /// Calendar date, nominally `YYYY-MM-DD`.
    pub date: String,
    /// Free-form time of day, e.g. "7:00 PM".
    pub time: String,
    pub venue: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "ticketLink")]
    pub ticket_link: String,
    /// Currency string, or the sentinel "Free".
    pub price: String,
    pub status: EventStatus,
}

impl EventRecord {
    /// Parsed calendar date, if `date` is a valid `YYYY-MM-DD` string.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn is_free(&self) -> bool {
        self.price == "Free"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, price: &str) -> EventRecord {
        EventRecord {
            id: "test-event".to_string(),
            group: Group::Yashika,
            title: "Test Event".to_string(),
            date: date.to_string(),
            time: "7:00 PM".to_string(),
            venue: "Test Hall".to_string(),
            location: "Testville, WA".to_string(),
            description: String::new(),
            ticket_link: "https://tickets.example.com".to_string(),
            price: price.to_string(),
            status: EventStatus::Upcoming,
        }
    }

    // --- calendar_date ---

    #[test]
    fn calendar_date_parses_iso_dates() {
        let parsed = record("2025-06-14", "$25").calendar_date().unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
    }

    #[test]
    fn calendar_date_rejects_malformed_dates() {
        assert!(record("June 14th", "$25").calendar_date().is_none());
        assert!(record("2025-13-40", "$25").calendar_date().is_none());
        assert!(record("", "$25").calendar_date().is_none());
    }

    // --- is_free ---

    #[test]
    fn free_sentinel_is_exact() {
        assert!(record("2025-06-14", "Free").is_free());
        assert!(!record("2025-06-14", "free").is_free());
        assert!(!record("2025-06-14", "$0").is_free());
    }
}
