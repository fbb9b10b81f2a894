pub mod composer;
pub mod email;
pub mod password;

pub use crate::domain::model::EmailMessage;
pub use crate::domain::ports::{ConfigProvider, Sender};
pub use crate::utils::error::{ComposeError, TransportError, TransportErrorKind};
