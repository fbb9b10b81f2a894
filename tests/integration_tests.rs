use mail_toolkit::{
    compose_and_send, ComposeError, ConsoleSender, OutboxSender, PasswordPolicy, TomlConfig,
    TransportErrorKind,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_end_to_end_send_through_configured_outbox() {
    let temp_dir = TempDir::new().unwrap();
    let outbox_path = temp_dir.path().join("outbox");

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[sender]\nfrom = \"bot@example.com\"\n\n[outbox]\npath = {:?}\n",
        outbox_path.to_str().unwrap()
    )
    .unwrap();

    let config = TomlConfig::from_file(config_file.path()).unwrap();
    let sender = OutboxSender::from_config(&config);

    compose_and_send(&sender, "user@example.com", "Greetings", "Hello, world!").unwrap();

    let files: Vec<_> = std::fs::read_dir(&outbox_path)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    assert_eq!(
        std::fs::read_to_string(&files[0]).unwrap(),
        "From: bot@example.com\nTo: user@example.com\nSubject: Greetings\n\nHello, world!"
    );
}

#[test]
fn test_invalid_recipient_leaves_outbox_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let outbox_path = temp_dir.path().join("outbox");
    let sender = OutboxSender::new("bot@example.com", &outbox_path);

    let err = compose_and_send(&sender, "not-an-email", "Hi", "Body").unwrap_err();

    assert!(matches!(err, ComposeError::Validation { .. }));
    assert!(!outbox_path.exists());
}

#[test]
fn test_outbox_failure_surfaces_as_transport_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("occupied");
    std::fs::write(&blocker, b"").unwrap();
    let sender = OutboxSender::new("bot@example.com", &blocker);

    let err = compose_and_send(&sender, "user@example.com", "Hi", "Body").unwrap_err();

    assert_eq!(err.transport().map(|e| e.kind()), Some(TransportErrorKind::Io));
}

#[test]
fn test_dry_run_prints_rendered_message() {
    let sender = ConsoleSender::new("bot@example.com", Vec::new());

    compose_and_send(&sender, "user@example.com", "Status", "All good").unwrap();

    let printed = String::from_utf8(sender.into_inner()).unwrap();
    assert!(printed.starts_with("From: bot@example.com\nTo: user@example.com\nSubject: Status\n\nAll good"));
}

#[test]
fn test_configured_password_policy() {
    let config = TomlConfig::from_toml_str("[password]\nlength = 40\nmin_digits = 10\n").unwrap();
    let policy: PasswordPolicy = config.password_policy();

    let password = policy.generate().unwrap();

    assert_eq!(password.chars().count(), 40);
    assert!(password.chars().filter(|c| c.is_ascii_digit()).count() >= 10);
}
