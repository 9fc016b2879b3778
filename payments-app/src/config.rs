//! Configuration loading from environment.

use std::env;

use payments_repo::RepositoryMode;
use payments_types::NotificationChannel;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub repository_mode: RepositoryMode,
    pub notification_channel: NotificationChannel,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("Invalid PORT: {}", e))?;

        let repository_mode = match lookup("REPOSITORY_MODE") {
            Some(mode) => mode.parse::<RepositoryMode>().map_err(anyhow::Error::msg)?,
            None => RepositoryMode::default(),
        };

        let notification_channel = match lookup("NOTIFICATION_CHANNEL") {
            Some(channel) => channel.parse::<NotificationChannel>().map_err(anyhow::Error::msg)?,
            None => NotificationChannel::default(),
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());

        Ok(Self {
            port,
            repository_mode,
            notification_channel,
            otlp_endpoint,
        })
    }
}
