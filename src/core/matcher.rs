use crate::errors::AppResult;
use crate::models::{event::Event, raw_event::RawEvent};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Build every event for `today` and keep the ones that fire.
///
/// All definitions are built, not only the matching ones, so a broken entry
/// (e.g. without a date) fails the run even on days it would not fire.
pub fn select_todays_events(
    events: &BTreeMap<String, RawEvent>,
    today: NaiveDate,
) -> AppResult<Vec<Event>> {
    let mut todays = Vec::new();

    for (title, raw) in events {
        let event = Event::new(title, raw, today)?;
        if event.is_today() {
            todays.push(event);
        }
    }

    Ok(todays)
}
