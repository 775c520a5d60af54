use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// `--date` value when given, the local calendar date otherwise.
pub fn resolve_today(date: Option<&str>) -> AppResult<NaiveDate> {
    match date {
        Some(d) => parse_date(d),
        None => Ok(today()),
    }
}

/// Same day of the same month, whatever the year.
pub fn same_day_and_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.day() == b.day() && a.month() == b.month()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
