use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error as _};
use std::collections::BTreeMap;
use std::fs;

/// One event table of the events file, as written by the user.
///
/// ```toml
/// [mum]
/// date = 1961-04-02
/// birthday = true
/// remind_before = [7]
/// ```
///
/// Only `date` is mandatory, and its absence is reported when the event is
/// built (see [`crate::models::event::Event::new`]) so the error can name the
/// event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "anchor_date")]
    pub date: Option<NaiveDate>,
    /// Defaults to the event title.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub birthday: bool,
    #[serde(default)]
    pub age_unknown: bool,
    /// Day offsets, each one an extra reminder that many days before `date`.
    #[serde(default)]
    pub remind_before: Vec<u32>,
}

/// Accepts a TOML date (`2020-03-10`), a TOML datetime (date part kept) or a
/// quoted `"YYYY-MM-DD"` string.
fn anchor_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::Datetime(dt) => {
            let d = dt
                .date
                .ok_or_else(|| D::Error::custom(format!("'{}' has no date part", dt)))?;
            NaiveDate::from_ymd_opt(d.year.into(), d.month.into(), d.day.into())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid calendar date '{}'", dt)))
        }
        toml::Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid date '{}', expected YYYY-MM-DD", s))),
        other => Err(D::Error::custom(format!(
            "expected a date, found {}",
            other.type_str()
        ))),
    }
}

/// Older events files keep every event under a single `[event.<title>]`
/// container instead of at the top level.
const LEGACY_CONTAINER: &str = "event";

fn is_legacy_layout(doc: &toml::Table) -> bool {
    doc.len() == 1
        && matches!(
            doc.get(LEGACY_CONTAINER),
            Some(toml::Value::Table(inner)) if inner.values().all(toml::Value::is_table)
        )
}

/// Parse an events document: a top-level table of event title → event table
/// (or the same tables nested under a lone `[event]` table).
/// Titles come back sorted, which is also the order reminders are sent in.
pub fn parse_events(content: &str) -> Result<BTreeMap<String, RawEvent>, toml::de::Error> {
    let mut doc: toml::Table = toml::from_str(content)?;

    if is_legacy_layout(&doc)
        && let Some(events) = doc.remove(LEGACY_CONTAINER)
    {
        return events.try_into();
    }

    toml::Value::Table(doc).try_into()
}

/// Read and parse the events file at `path` (a leading `~/` is expanded).
/// Both an unreadable file and a malformed one end up as `ConfigLoad`.
pub fn load_events(path: &str) -> AppResult<BTreeMap<String, RawEvent>> {
    let file = expand_tilde(path);
    let config_error = |reason: String| AppError::ConfigLoad {
        path: file.display().to_string(),
        reason,
    };

    let content = fs::read_to_string(&file).map_err(|e| config_error(e.to_string()))?;
    parse_events(&content).map_err(|e| config_error(e.to_string().trim_end().to_string()))
}
