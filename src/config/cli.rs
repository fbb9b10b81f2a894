use crate::core::password::PasswordPolicy;
use crate::utils::error::Result;
use crate::TomlConfig;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "mail-toolkit")]
#[command(about = "Validate addresses, send messages to a local outbox, generate passwords")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check one or more email addresses
    Validate {
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Print a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Compose a message and deliver it to the outbox
    Send {
        #[arg(long)]
        to: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        body: String,

        /// Overrides sender.from
        #[arg(long)]
        from: Option<String>,

        /// Overrides outbox.path
        #[arg(long)]
        outbox: Option<String>,

        /// Print the message instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a random password
    Password {
        #[arg(short, long)]
        length: Option<usize>,

        #[arg(long)]
        min_digits: Option<usize>,

        #[arg(long)]
        min_special: Option<usize>,

        #[arg(long)]
        min_uppercase: Option<usize>,
    },
}

impl CliConfig {
    /// Reads the TOML file when one was given, otherwise the defaults.
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }
}

/// Applies command-line overrides on top of the configured policy.
pub fn password_policy_with_overrides(
    base: PasswordPolicy,
    length: Option<usize>,
    min_digits: Option<usize>,
    min_special: Option<usize>,
    min_uppercase: Option<usize>,
) -> PasswordPolicy {
    PasswordPolicy {
        length: length.unwrap_or(base.length),
        min_digits: min_digits.unwrap_or(base.min_digits),
        min_special: min_special.unwrap_or(base.min_special),
        min_uppercase: min_uppercase.unwrap_or(base.min_uppercase),
    }
}
