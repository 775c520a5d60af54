//! Unified application error type.
//! Every module (config, models, core, mailer, cli) returns AppError so that
//! a failure anywhere ends the run the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Failed to load events file {path}: {reason}")]
    ConfigLoad { path: String, reason: String },

    #[error("Settings error: {0}")]
    Settings(String),

    // ---------------------------
    // Event definitions
    // ---------------------------
    #[error("Event '{event}' is missing required field '{field}'")]
    MissingField { event: String, field: &'static str },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Event '{event}': reminding {days} days before {date} leaves the calendar")]
    DateOutOfRange {
        event: String,
        date: String,
        days: u32,
    },

    // ---------------------------
    // Mail
    // ---------------------------
    #[error("Invalid mail address '{address}': {reason}")]
    MailAddress { address: String, reason: String },

    #[error("Failed to build mail: {0}")]
    MailBuild(#[from] lettre::error::Error),

    #[error("Mail transport error: {0}")]
    MailTransport(String),
}

pub type AppResult<T> = Result<T, AppError>;
