//! Outbound mail configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "smtp.gmail.com".to_string()
}

const fn default_port() -> u16 {
    465
}

/// Connectivity probes before giving up (about two minutes at the default delay).
const fn default_retry_attempts() -> u32 {
    120
}

const fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_author() -> String {
    "Andy".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SMTP relay host, reached over implicit TLS.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of connectivity probes.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Delay between failed probes, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Name shown in the subject line.
    #[serde(default = "default_author")]
    pub author: String,

    /// Closing line of the message body.
    #[serde(default = "default_author")]
    pub signature: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            author: default_author(),
            signature: default_author(),
        }
    }
}

impl MailConfig {
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}
