//! Notifier adapters.
//!
//! Email is the only channel with an adapter. Its "delivery" is a line on
//! standard output; the delivery is then recorded separately as a log event.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{info, warn};

use payments_types::{NotificationChannel, Notifier, NotifyError};

/// Delivers notifications as `Email: <message>` lines.
pub struct EmailNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl EmailNotifier {
    /// Creates a notifier that delivers to standard output.
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    /// Creates a notifier that delivers to the given sink.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    fn log_notification(&self, message: &str) {
        info!(channel = %NotificationChannel::Email, "Logged: {}", message);
    }
}

impl Default for EmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, message: &str) {
        {
            let mut out = match self.out.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Err(e) = writeln!(out, "Email: {}", message).and_then(|_| out.flush()) {
                warn!("Failed to write email notification: {}", e);
            }
        }
        self.log_notification(message);
    }
}

/// Builds the notifier for a configured channel.
///
/// SMS and push have no adapter yet and are rejected.
pub fn build_notifier(channel: NotificationChannel) -> Result<EmailNotifier, NotifyError> {
    match channel {
        NotificationChannel::Email => Ok(EmailNotifier::new()),
        NotificationChannel::Sms | NotificationChannel::Push => {
            Err(NotifyError::NotEnabled(channel))
        }
    }
}
