//! Rendering-ready projections of event records.

use chrono::NaiveDate;

use crate::event::EventRecord;

/// Call-to-action caption for free events.
pub const CTA_FREE: &str = "Register Now";

/// Call-to-action caption for ticketed events.
pub const CTA_TICKETED: &str = "Get Tickets";

/// A read-only projection of an [`EventRecord`] for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEvent {
    pub id: String,
    pub title: String,
    /// Long-form en-US date, e.g. "Saturday, June 14, 2025". Falls back to
    /// the raw date string when it does not parse.
    pub date_label: String,
    pub time: String,
    pub venue: String,
    pub location: String,
    pub description: String,
    pub ticket_link: String,
    pub price: String,
    /// Action-button caption derived from the price label.
    pub cta: &'static str,
}

impl DisplayEvent {
    /// Project a record for rendering. Pure; the record is not modified.
    pub fn from_record(record: &EventRecord) -> Self {
        let date_label = match record.calendar_date() {
            Some(date) => format_long_date(date),
            None => record.date.clone(),
        };

        DisplayEvent {
            id: record.id.clone(),
            title: record.title.clone(),
            date_label,
            time: record.time.clone(),
            venue: record.venue.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
            ticket_link: record.ticket_link.clone(),
            price: record.price.clone(),
            cta: if record.is_free() { CTA_FREE } else { CTA_TICKETED },
        }
    }
}

/// Format a date the way the site does: "Saturday, June 14, 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventStatus;
    use crate::group::Group;

    fn record(date: &str, price: &str) -> EventRecord {
        EventRecord {
            id: "yashika-summer-2025".to_string(),
            group: Group::Yashika,
            title: "Summer Festival Performance".to_string(),
            date: date.to_string(),
            time: "7:00 PM".to_string(),
            venue: "Riverside Amphitheater".to_string(),
            location: "Portland, OR".to_string(),
            description: "An evening of taiko under the open sky.".to_string(),
            ticket_link: "https://tickets.example.com/summer".to_string(),
            price: price.to_string(),
            status: EventStatus::Upcoming,
        }
    }

    // --- format_long_date ---

    #[test]
    fn long_date_matches_site_format() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(format_long_date(date), "Saturday, June 14, 2025");
    }

    #[test]
    fn long_date_does_not_pad_single_digit_days() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(format_long_date(date), "Tuesday, July 1, 2025");
    }

    // --- from_record ---

    #[test]
    fn projects_all_fields() {
        let display = DisplayEvent::from_record(&record("2025-06-14", "$25"));
        assert_eq!(display.id, "yashika-summer-2025");
        assert_eq!(display.date_label, "Saturday, June 14, 2025");
        assert_eq!(display.time, "7:00 PM");
        assert_eq!(display.venue, "Riverside Amphitheater");
        assert_eq!(display.price, "$25");
    }

    #[test]
    fn free_events_get_register_caption() {
        let display = DisplayEvent::from_record(&record("2025-06-14", "Free"));
        assert_eq!(display.cta, "Register Now");
    }

    #[test]
    fn priced_events_get_tickets_caption() {
        let display = DisplayEvent::from_record(&record("2025-06-14", "$25"));
        assert_eq!(display.cta, "Get Tickets");
    }

    #[test]
    fn unparseable_date_falls_back_to_raw_string() {
        let display = DisplayEvent::from_record(&record("sometime in June", "$25"));
        assert_eq!(display.date_label, "sometime in June");
    }
}
