use clap::Parser;

/// Command-line interface definition for remind_me
/// Mails today's events and advance reminders listed in a TOML file
#[derive(Parser)]
#[command(
    name = "remind_me",
    version = env!("CARGO_PKG_VERSION"),
    about = "Email yourself today's events, birthdays and advance reminders from a TOML file",
    long_about = None
)]
pub struct Cli {
    /// Events file (TOML): one table per event, keyed by its title
    #[arg(value_name = "EVENTS_FILE")]
    pub events_file: String,

    /// Address that receives one mail per matching event
    #[arg(value_name = "MAIL_TO")]
    pub mail_to: String,

    /// Evaluate the events as if today were this date (YYYY-MM-DD)
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Print the matching events instead of sending mail
    #[arg(long = "dry-run", help = "Print matching events instead of mailing them")]
    pub dry_run: bool,

    /// Override the settings file path
    #[arg(long = "settings", value_name = "FILE")]
    pub settings: Option<String>,

    /// SMTP host (default: localhost)
    #[arg(long = "smtp-host", value_name = "HOST")]
    pub smtp_host: Option<String>,

    /// SMTP port (default: 25)
    #[arg(long = "smtp-port", value_name = "PORT")]
    pub smtp_port: Option<u16>,

    /// Sender address (default: reminder@localhost)
    #[arg(long = "from", value_name = "ADDRESS")]
    pub from: Option<String>,
}
