use lettre::Transport;
use lettre::address::Envelope;
use lettre::transport::stub::StubTransport;
use remind_me::errors::AppError;
use remind_me::mailer::Notifier;
use remind_me::models::event::Event;
use remind_me::models::raw_event::parse_events;
use std::cell::Cell;

mod common;
use common::{SAMPLE_EVENTS, ymd};

fn sample_event(title: &str, today: (i32, u32, u32)) -> Event {
    let events = parse_events(SAMPLE_EVENTS).unwrap();
    Event::new(title, &events[title], ymd(today.0, today.1, today.2)).unwrap()
}

#[test]
fn test_message_headers() {
    let notifier = Notifier::new(StubTransport::new_ok(), "reminder@localhost", "me@example.org")
        .expect("valid addresses");
    let event = sample_event("grandma", (2024, 5, 20));

    let message = notifier.build_message(&event).unwrap();
    let raw = String::from_utf8(message.formatted()).unwrap();

    assert!(raw.contains("From: reminder@localhost"));
    assert!(raw.contains("To: me@example.org"));
    assert!(raw.contains("Subject: 1990-05-20: grandma (34)"));
    // headers end with an empty line and the body is empty
    let body = raw.split_once("\r\n\r\n").map(|(_, body)| body.trim());
    assert_eq!(body, Some(""));
}

#[test]
fn test_notify_all_sends_one_mail_per_event() {
    let notifier =
        Notifier::new(StubTransport::new_ok(), "reminder@localhost", "me@example.org").unwrap();
    let events = vec![
        sample_event("dentist", (2020, 3, 10)),
        sample_event("christmas", (2020, 12, 25)),
    ];

    let mut delivered = Vec::new();
    let sent = notifier
        .notify_all(&events, |e| delivered.push(e.title().to_string()))
        .unwrap();
    assert_eq!(sent, 2);
    assert_eq!(delivered, vec!["dentist", "christmas"]);

    let messages = notifier.transport().messages();
    assert_eq!(messages.len(), 2);

    for (envelope, _) in &messages {
        assert_eq!(envelope.to().len(), 1);
        assert_eq!(envelope.to()[0].to_string(), "me@example.org");
        assert_eq!(
            envelope.from().map(|a| a.to_string()).as_deref(),
            Some("reminder@localhost")
        );
    }
    assert!(messages[0].1.contains("Subject: 2020-03-10: Dentist appointment"));
    assert!(messages[1].1.contains("Subject: 1999-12-25: christmas"));
}

#[test]
fn test_no_events_sends_nothing() {
    let notifier =
        Notifier::new(StubTransport::new_ok(), "reminder@localhost", "me@example.org").unwrap();

    assert_eq!(notifier.notify_all(&[], |_| {}).unwrap(), 0);
    assert!(notifier.transport().messages().is_empty());
}

#[test]
fn test_transport_failure_aborts() {
    let notifier =
        Notifier::new(StubTransport::new_error(), "reminder@localhost", "me@example.org").unwrap();
    let events = vec![sample_event("dentist", (2020, 3, 10))];

    let err = notifier.notify_all(&events, |_| {}).unwrap_err();
    assert!(matches!(err, AppError::MailTransport(_)));
}

/// Counts delivery attempts and refuses the `fail_at`-th one (1-based).
struct CountingTransport {
    attempts: Cell<usize>,
    fail_at: usize,
}

impl CountingTransport {
    fn failing_at(fail_at: usize) -> Self {
        Self {
            attempts: Cell::new(0),
            fail_at,
        }
    }
}

impl Transport for CountingTransport {
    type Ok = ();
    type Error = String;

    fn send_raw(&self, _envelope: &Envelope, _email: &[u8]) -> Result<(), String> {
        let attempt = self.attempts.get() + 1;
        self.attempts.set(attempt);
        if attempt == self.fail_at {
            Err(format!("454 refused attempt {}", attempt))
        } else {
            Ok(())
        }
    }
}

#[test]
fn test_first_send_failure_skips_the_rest() {
    let notifier = Notifier::new(
        CountingTransport::failing_at(1),
        "reminder@localhost",
        "me@example.org",
    )
    .unwrap();
    let events = vec![
        sample_event("dentist", (2020, 3, 10)),
        sample_event("christmas", (2020, 12, 25)),
    ];

    let mut delivered = 0;
    let err = notifier.notify_all(&events, |_| delivered += 1).unwrap_err();

    match err {
        AppError::MailTransport(reason) => assert_eq!(reason, "454 refused attempt 1"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(notifier.transport().attempts.get(), 1);
    assert_eq!(delivered, 0);
}

#[test]
fn test_failure_mid_loop_keeps_earlier_sends() {
    let notifier = Notifier::new(
        CountingTransport::failing_at(2),
        "reminder@localhost",
        "me@example.org",
    )
    .unwrap();
    let events = vec![
        sample_event("dentist", (2020, 3, 10)),
        sample_event("christmas", (2020, 12, 25)),
        sample_event("grandma", (2024, 5, 20)),
    ];

    let mut delivered = Vec::new();
    let err = notifier
        .notify_all(&events, |e| delivered.push(e.title().to_string()))
        .unwrap_err();

    assert!(matches!(err, AppError::MailTransport(_)));
    assert_eq!(notifier.transport().attempts.get(), 2);
    assert_eq!(delivered, vec!["dentist"]);
}

#[test]
fn test_invalid_recipient_is_rejected() {
    let err = Notifier::new(StubTransport::new_ok(), "reminder@localhost", "not an address")
        .err()
        .expect("invalid address");

    match err {
        AppError::MailAddress { address, .. } => assert_eq!(address, "not an address"),
        other => panic!("unexpected error: {other}"),
    }
}
