//! The event presentation pipeline: filter, order, project.

use chrono::NaiveDate;

use crate::display::DisplayEvent;
use crate::event::{EventRecord, EventStatus};
use crate::group::Group;

/// Upcoming events for one group, earliest first, ready to render.
///
/// The static `status` field governs what counts as upcoming; dates are
/// only used for ordering. Records whose date does not parse sort after
/// all dated records, keeping their input order. An empty result is a
/// normal outcome, not an error.
pub fn upcoming_events_for(group: Group, events: &[EventRecord]) -> Vec<DisplayEvent> {
    events_for(group, EventStatus::Upcoming, events)
}

/// Past events for one group, earliest first.
pub fn past_events_for(group: Group, events: &[EventRecord]) -> Vec<DisplayEvent> {
    events_for(group, EventStatus::Past, events)
}

fn events_for(group: Group, status: EventStatus, events: &[EventRecord]) -> Vec<DisplayEvent> {
    let mut selected: Vec<&EventRecord> = events
        .iter()
        .filter(|e| e.group == group && e.status == status)
        .collect();

    // Stable sort: equal and unparseable dates keep their input order.
    selected.sort_by_key(|e| date_key(e));

    selected.into_iter().map(DisplayEvent::from_record).collect()
}

/// Sort key placing unparseable dates after every real date.
fn date_key(event: &EventRecord) -> (bool, Option<NaiveDate>) {
    let date = event.calendar_date();
    (date.is_none(), date)
}

/// Records still marked `upcoming` whose date is already behind `today`.
///
/// The pipeline above deliberately trusts the static status field, so an
/// event that happened but was never flipped to `past` keeps showing.
/// This lint surfaces those records for the data maintainer; it is never
/// applied to visitor-facing output.
pub fn stale_upcoming(events: &[EventRecord], today: NaiveDate) -> Vec<&EventRecord> {
    events
        .iter()
        .filter(|e| e.status == EventStatus::Upcoming)
        .filter(|e| e.calendar_date().is_some_and(|d| d < today))
        .collect()
}
