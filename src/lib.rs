pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{ConsoleSender, OutboxSender};
pub use crate::core::composer::compose_and_send;
pub use crate::core::email::is_valid;
pub use crate::core::password::{generate_password, PasswordPolicy};
pub use crate::domain::model::{AddressCheck, EmailMessage};
pub use crate::domain::ports::{ConfigProvider, Sender};
pub use crate::utils::error::{
    ComposeError, MailError, PasswordError, Result, TransportError, TransportErrorKind,
};
