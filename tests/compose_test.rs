use mail_toolkit::{
    compose_and_send, is_valid, ComposeError, Sender, TransportError, TransportErrorKind,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
struct SentMessage {
    to: String,
    subject: String,
    body: String,
}

/// Records every call and answers with a fixed result.
struct RecordingSender {
    calls: Mutex<Vec<SentMessage>>,
    response: Result<(), TransportError>,
}

impl RecordingSender {
    fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Ok(()),
        }
    }

    fn failing(error: TransportError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Err(error),
        }
    }

    fn calls(&self) -> Vec<SentMessage> {
        self.calls.lock().unwrap().clone()
    }
}

impl Sender for RecordingSender {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(SentMessage {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        self.response.clone()
    }
}

#[test]
fn test_is_valid_table() {
    let cases = [
        ("empty string", "", false),
        ("missing at-sign", "plainaddress", false),
        ("missing local part", "@no-local-part.com", false),
        ("simple valid email", "email@example.com", true),
        ("sub-domain", "email@sub.example.com", true),
        ("dotted local part", "first.last@example.co.uk", true),
    ];

    for (name, input, expected) in cases {
        assert_eq!(is_valid(input), expected, "{name}: is_valid({input:?})");
    }
}

#[test]
fn test_happy_path_sends_exact_arguments_once() {
    let sender = RecordingSender::succeeding();

    let result = compose_and_send(&sender, "user@example.com", "Greetings", "Hello, world!");

    assert!(result.is_ok());
    assert_eq!(
        sender.calls(),
        vec![SentMessage {
            to: "user@example.com".to_string(),
            subject: "Greetings".to_string(),
            body: "Hello, world!".to_string(),
        }]
    );
}

#[test]
fn test_invalid_recipient_never_reaches_sender() {
    let sender = RecordingSender::succeeding();

    let err = compose_and_send(&sender, "not-an-email", "Hi", "Body").unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        err,
        ComposeError::Validation {
            address: "not-an-email".to_string()
        }
    );
    assert!(sender.calls().is_empty());
}

#[test]
fn test_sender_error_is_returned_unchanged() {
    let send_err = TransportError::new(TransportErrorKind::Unavailable, "SMTP failure");
    let sender = RecordingSender::failing(send_err.clone());

    let err = compose_and_send(&sender, "user@example.com", "Oops", "Something went wrong")
        .unwrap_err();

    assert_eq!(err, ComposeError::Transport(send_err.clone()));
    assert_eq!(err.transport(), Some(&send_err));
    assert_eq!(sender.calls().len(), 1);
    assert_eq!(sender.calls()[0].subject, "Oops");
}

#[test]
fn test_concurrent_calls_share_one_sender() {
    let sender = Arc::new(RecordingSender::succeeding());

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let sender = Arc::clone(&sender);
            scope.spawn(move || {
                for i in 0..25 {
                    let to = format!("user{worker}-{i}@example.com");
                    compose_and_send(&sender, &to, "bulk", "body").unwrap();
                    let bad = format!("user{worker}-{i}");
                    assert!(compose_and_send(&sender, &bad, "bulk", "body").is_err());
                }
            });
        }
    });

    let calls = sender.calls();
    assert_eq!(calls.len(), 8 * 25);
    assert!(calls.iter().all(|c| is_valid(&c.to)));
}

#[test]
fn test_boxed_sender_works_through_trait_object() {
    let sender: Box<dyn Sender> = Box::new(RecordingSender::succeeding());
    assert!(compose_and_send(&sender, "a@example.com", "s", "b").is_ok());
}
