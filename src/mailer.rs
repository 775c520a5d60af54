//! Outbound mail: one message per matching event.

use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use lettre::message::Mailbox;
use lettre::{Message, SmtpTransport, Transport};
use std::fmt;

/// Plain SMTP to `settings.smtp_host:settings.smtp_port`, no TLS and no
/// authentication: the expected endpoint is a local MTA.
pub fn smtp_transport(settings: &Settings) -> SmtpTransport {
    SmtpTransport::builder_dangerous(settings.smtp_host.as_str())
        .port(settings.smtp_port)
        .build()
}

fn parse_mailbox(address: &str) -> AppResult<Mailbox> {
    address.parse().map_err(|e: lettre::address::AddressError| AppError::MailAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Sends reminders through a single transport.
///
/// The transport (and any connection it holds) lives as long as the
/// notifier and is dropped with it, whether the send loop finished or not.
pub struct Notifier<T: Transport> {
    transport: T,
    from: Mailbox,
    to: Mailbox,
}

impl<T> Notifier<T>
where
    T: Transport,
    T::Error: fmt::Display,
{
    pub fn new(transport: T, from: &str, to: &str) -> AppResult<Self> {
        Ok(Self {
            transport,
            from: parse_mailbox(from)?,
            to: parse_mailbox(to)?,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Subject is the event's display string, the body is empty.
    pub fn build_message(&self, event: &Event) -> AppResult<Message> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(event.to_string())
            .body(String::new())?;
        Ok(message)
    }

    pub fn notify(&self, event: &Event) -> AppResult<()> {
        let message = self.build_message(event)?;
        self.transport
            .send(&message)
            .map_err(|e| AppError::MailTransport(e.to_string()))?;
        Ok(())
    }

    /// Send one mail per event, in order, calling `on_sent` after each
    /// delivered one. The first failure stops the loop.
    pub fn notify_all<F>(&self, events: &[Event], mut on_sent: F) -> AppResult<usize>
    where
        F: FnMut(&Event),
    {
        for event in events {
            self.notify(event)?;
            on_sent(event);
        }
        Ok(events.len())
    }
}
