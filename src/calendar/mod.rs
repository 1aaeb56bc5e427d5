pub mod models;
pub mod store;

pub use models::{CalendarEvent, CalendarGroup, Category, CALENDARS, COLOR_OPTIONS};
pub use store::{EventStore, InMemoryEventStore};

use chrono::NaiveDate;

/// Check whether an event is on the calendar for `day`
///
/// All-day events with an end date cover every day of the inclusive range,
/// everything else only its own date.
pub fn occurs_on(event: &CalendarEvent, day: NaiveDate) -> bool {
    match event.end_date {
        Some(end) if event.is_all_day => event.date <= day && day <= end,
        _ => event.date == day,
    }
}

/// Collect the events shown on `day`, all-day events first, then by start time
pub fn events_for_day<'a, I>(events: I, day: NaiveDate) -> Vec<CalendarEvent>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    let mut matching: Vec<CalendarEvent> = events
        .into_iter()
        .filter(|event| occurs_on(event, day))
        .cloned()
        .collect();

    matching.sort_by(|a, b| {
        b.is_all_day
            .cmp(&a.is_all_day)
            .then_with(|| a.starts_at().cmp(&b.starts_at()))
            .then_with(|| a.title.cmp(&b.title))
    });

    matching
}

/// Whether `day` is the first day of the event
pub fn is_event_start(event: &CalendarEvent, day: NaiveDate) -> bool {
    event.date == day
}

/// Whether `day` is the last day of the event
///
/// Events without an end date end on every day they appear on.
pub fn is_event_end(event: &CalendarEvent, day: NaiveDate) -> bool {
    match event.end_date {
        Some(end) => end == day,
        None => true,
    }
}
