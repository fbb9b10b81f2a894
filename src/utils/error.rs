use std::fmt;
use thiserror::Error;

/// Broad category of a delivery failure reported by a [`Sender`](crate::domain::ports::Sender).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    Rejected,
    Unavailable,
    Io,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Rejected => "rejected",
            Self::Unavailable => "unavailable",
            Self::Io => "io",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// Failure raised by a sender implementation. Opaque to the composer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport error ({kind}): {message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Other, message)
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::new(TransportErrorKind::Io, err.to_string())
    }
}

/// Outcome of [`compose_and_send`](crate::core::composer::compose_and_send) when
/// the message did not go out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("invalid email address: {address:?}")]
    Validation { address: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ComposeError {
    /// The sender's error, when the failure happened after delegation.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Validation { .. } => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password length must be greater than zero")]
    EmptyLength,

    #[error("password length {length} exceeds the maximum of {max}")]
    TooLong { length: usize, max: usize },

    #[error("password length {length} cannot hold the {required} required characters")]
    Unsatisfiable { length: usize, required: usize },
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("Password generation failed: {0}")]
    Password(#[from] PasswordError),
}

impl MailError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the path exists and is writable",
            Self::SerializationError(_) => "Report this as a bug; output could not be encoded",
            Self::ConfigError { .. } => "Check the configuration file syntax",
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Fix the configuration value and run again"
            }
            Self::Compose(ComposeError::Validation { .. }) => {
                "Use an address of the form local@domain.tld"
            }
            Self::Compose(ComposeError::Transport(_)) => {
                "Check the outbox directory or the delivery target and retry"
            }
            Self::Password(_) => "Increase --length or lower the required character counts",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Compose(ComposeError::Validation { address }) => {
                format!("'{}' is not a valid email address", address)
            }
            Self::Compose(ComposeError::Transport(err)) => {
                format!("The message could not be delivered: {}", err.message())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MailError>;
