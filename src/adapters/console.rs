use crate::core::{EmailMessage, Sender, TransportError, TransportErrorKind};
use std::io::Write;
use std::sync::Mutex;

const SEPARATOR: &str = "----";

/// Writes each rendered message to a writer. Used for dry runs.
pub struct ConsoleSender<W: Write + Send> {
    from: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> ConsoleSender<W> {
    pub fn new(from: impl Into<String>, writer: W) -> Self {
        Self {
            from: from.into(),
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConsoleSender<std::io::Stdout> {
    pub fn stdout(from: impl Into<String>) -> Self {
        Self::new(from, std::io::stdout())
    }
}

impl<W: Write + Send> Sender for ConsoleSender<W> {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        let message = EmailMessage::new(self.from.as_str(), to, subject, body);

        let mut writer = self.writer.lock().map_err(|_| {
            TransportError::new(TransportErrorKind::Unavailable, "console writer poisoned")
        })?;
        writeln!(writer, "{}", message)?;
        writeln!(writer, "{}", SEPARATOR)?;
        writer.flush()?;

        tracing::debug!("Printed message for {}", to);
        Ok(())
    }
}
