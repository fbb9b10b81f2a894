use crate::core::password::PasswordPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::{MailError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FROM: &str = "noreply@localhost.localdomain";
pub const DEFAULT_OUTBOX: &str = "./outbox";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub sender: SenderConfig,
    pub outbox: OutboxConfig,
    pub password: PasswordPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    pub from: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutboxConfig {
    pub path: String,
}

impl Default for OutboxConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTBOX.to_string(),
        }
    }
}

impl TomlConfig {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded configuration from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MailError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            MailError::ConfigError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let mut missing = None;
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    missing.get_or_insert_with(|| var_name.to_string());
                    String::new()
                }
            }
        });

        if let Some(field) = missing {
            return Err(MailError::MissingConfigError { field });
        }

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_email("sender.from", &self.sender.from)?;
        validation::validate_path("outbox.path", &self.outbox.path)?;
        self.password.validate()?;

        Ok(())
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        self.password
    }
}

impl ConfigProvider for TomlConfig {
    fn from_address(&self) -> &str {
        &self.sender.from
    }

    fn outbox_path(&self) -> &str {
        &self.outbox.path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
