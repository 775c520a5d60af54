//! remind_me library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! used to load events, match them against a date and mail the results.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod mailer;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Settings;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load settings once (custom path or the default location)
    let mut settings = match &cli.settings {
        Some(path) => {
            let path = utils::path::expand_tilde(path);
            if !path.exists() {
                ui::messages::warning(format!(
                    "Settings file {} not found, using defaults",
                    path.display()
                ));
            }
            Settings::load_from(&path)?
        }
        None => Settings::load()?,
    };

    // 3️⃣ command line overrides win over the settings file
    settings.apply_overrides(
        cli.smtp_host.as_deref(),
        cli.smtp_port,
        cli.from.as_deref(),
    );

    // 4️⃣ hand everything to the notify command
    cli::commands::notify::handle(&cli, &settings)
}
