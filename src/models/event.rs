use super::raw_event::RawEvent;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_date, same_day_and_month};
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// An event evaluated against one day.
///
/// Built from a [`RawEvent`], its title and the evaluation date ("today"),
/// which is captured here rather than read from the clock so that the same
/// definition can be checked against any day.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    title: String,
    date: NaiveDate,
    display_message: String,
    reminder_dates: Vec<NaiveDate>, // anchor first, then one per remind_before entry
    today: NaiveDate,
}

impl Event {
    /// Build the event.
    /// - `date` is required (`MissingField` otherwise)
    /// - `message` falls back to `title`
    /// - birthdays get `" (<age>)"` appended unless `age_unknown`, where age
    ///   is the difference of the year numbers only
    /// - every `remind_before` offset adds `date - offset days` to the
    ///   reminder dates, in source order, duplicates included
    pub fn new(title: &str, raw: &RawEvent, today: NaiveDate) -> AppResult<Self> {
        let date = raw.date.ok_or_else(|| AppError::MissingField {
            event: title.to_string(),
            field: "date",
        })?;

        let mut reminder_dates = Vec::with_capacity(1 + raw.remind_before.len());
        reminder_dates.push(date);
        for &days in &raw.remind_before {
            let reminder = date.checked_sub_days(Days::new(days.into())).ok_or_else(|| {
                AppError::DateOutOfRange {
                    event: title.to_string(),
                    date: format_date(date),
                    days,
                }
            })?;
            reminder_dates.push(reminder);
        }

        let message = raw.message.clone().unwrap_or_else(|| title.to_string());
        let display_message = if raw.birthday && !raw.age_unknown {
            // not adjusted for whether the birthday has passed yet this year
            let age = today.year() - date.year();
            format!("{} ({})", message, age)
        } else {
            message
        };

        Ok(Self {
            title: title.to_string(),
            date,
            display_message,
            reminder_dates,
            today,
        })
    }

    /// True when any reminder date falls on today's day and month, in any year.
    pub fn is_today(&self) -> bool {
        self.reminder_dates
            .iter()
            .any(|d| same_day_and_month(*d, self.today))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn display_message(&self) -> &str {
        &self.display_message
    }

    pub fn reminder_dates(&self) -> &[NaiveDate] {
        &self.reminder_dates
    }
}

/// `"<YYYY-MM-DD>: <message>"`, also used as the mail subject.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_date(self.date), self.display_message)
    }
}
