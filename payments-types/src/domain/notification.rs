//! Notification channel model.

use serde::{Deserialize, Serialize};

/// Channels a payment notification can go out on.
///
/// Only `Email` has an adapter today; `Sms` and `Push` are declared so the
/// configuration surface is stable, and fail at wiring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
    Push,
}

impl AsRef<str> for NotificationChannel {
    fn as_ref(&self) -> &str {
        match self {
            Self::Email => "EMAIL",
            Self::Sms => "SMS",
            Self::Push => "PUSH",
        }
    }
}

impl std::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for NotificationChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "push" => Ok(Self::Push),
            other => Err(format!(
                "Unknown notification channel: {}. Supported: email, sms, push",
                other
            )),
        }
    }
}
