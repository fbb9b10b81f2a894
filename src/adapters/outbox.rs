use crate::core::{ConfigProvider, EmailMessage, Sender, TransportError};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Delivers messages by writing them as `.eml` files into a local directory.
#[derive(Debug)]
pub struct OutboxSender {
    from: String,
    base_path: PathBuf,
    sequence: AtomicU64,
}

impl OutboxSender {
    pub fn new(from: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            from: from.into(),
            base_path: base_path.into(),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.from_address(), config.outbox_path())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn next_file_name(&self) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{:04}.eml", Utc::now().format("%Y%m%dT%H%M%S%.3fZ"), seq)
    }
}

impl Sender for OutboxSender {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        let message = EmailMessage::new(self.from.as_str(), to, subject, body);

        fs::create_dir_all(&self.base_path)?;
        let full_path = self.base_path.join(self.next_file_name());
        fs::write(&full_path, message.render())?;

        tracing::info!("Queued message for {} at {}", to, full_path.display());
        Ok(())
    }
}
