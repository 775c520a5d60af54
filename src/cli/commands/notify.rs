use crate::cli::parser::Cli;
use crate::config::Settings;
use crate::core::matcher::select_todays_events;
use crate::errors::AppResult;
use crate::mailer::{Notifier, smtp_transport};
use crate::models::raw_event::load_events;
use crate::ui::messages;
use crate::utils::date::{format_date, resolve_today};

/// Run one reminder pass
///
///  - load every event definition from the events file
///  - keep the events firing on the evaluation date
///  - mail each of them to `MAIL_TO` (or print them with --dry-run)
///
/// Zero matches is a normal outcome.
pub fn handle(cli: &Cli, settings: &Settings) -> AppResult<()> {
    let today = resolve_today(cli.date.as_deref())?;
    let events = load_events(&cli.events_file)?;

    messages::info(format!(
        "Checking {} event(s) for {}",
        events.len(),
        format_date(today)
    ));

    let todays = select_todays_events(&events, today)?;

    if todays.is_empty() {
        messages::info("No reminders for today.");
        return Ok(());
    }

    if cli.dry_run {
        for event in &todays {
            messages::reminder(event);
        }
        return Ok(());
    }

    let notifier = Notifier::new(smtp_transport(settings), &settings.sender, &cli.mail_to)?;
    notifier.notify_all(&todays, |event| {
        messages::success(format!("Sent to {}: {}", cli.mail_to, event));
    })?;

    Ok(())
}
