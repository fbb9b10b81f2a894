use crate::utils::error::TransportError;
use std::sync::Arc;

/// Capability to deliver a message to one recipient.
///
/// Implementations must be safe to share across threads; the composer only
/// looks at whether `send` succeeded.
pub trait Sender: Send + Sync {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError>;
}

impl<S: Sender + ?Sized> Sender for &S {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        (**self).send(to, subject, body)
    }
}

impl<S: Sender + ?Sized> Sender for Box<S> {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        (**self).send(to, subject, body)
    }
}

impl<S: Sender + ?Sized> Sender for Arc<S> {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        (**self).send(to, subject, body)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn from_address(&self) -> &str;
    fn outbox_path(&self) -> &str;
}
