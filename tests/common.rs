#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rme() -> Command {
    cargo_bin_cmd!("remind_me")
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Write `content` to a unique events file inside the system temp dir
pub fn write_events(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_remind_me_events.toml", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write events file");
    p
}

/// A settings path that does not exist, so tests never read the user's settings
pub fn no_settings(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_remind_me_missing.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small dataset shared by several tests
pub const SAMPLE_EVENTS: &str = r#"
[dentist]
date = 2020-03-10
message = "Dentist appointment"
remind_before = [7, 1]

[grandma]
date = 1990-05-20
birthday = true

[christmas]
date = "1999-12-25"
"#;
