//! Mail server reachability check with fixed-delay retry.
//!
//! Running out of attempts is not an error: the caller treats it as being
//! offline and leaves everything for the next scheduled run.

use std::time::Duration;

use timesheet_config::MailConfig;

use crate::transport::Mailer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of probes, including the first.
    pub max_attempts: u32,
    /// Pause after each failed probe.
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn from_config(config: &MailConfig) -> Self {
        Self {
            max_attempts: config.retry_attempts,
            delay: config.retry_delay(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online { attempts: u32 },
    Offline { attempts: u32 },
}

/// Probe `mailer` until it connects or the policy is exhausted.
pub async fn await_connectivity<M: Mailer>(mailer: &M, policy: RetryPolicy) -> Connectivity {
    for attempt in 1..=policy.max_attempts {
        match mailer.test_connection().await {
            Ok(true) => {
                tracing::info!(attempt, "mail server reachable");
                return Connectivity::Online { attempts: attempt };
            }
            Ok(false) => {
                tracing::warn!(attempt, "mail server refused the connection");
            }
            Err(error) => {
                tracing::warn!(%error, attempt, "mail server unreachable, possibly offline");
            }
        }

        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.delay).await;
        }
    }

    tracing::warn!(
        attempts = policy.max_attempts,
        "no connection to the mail server; nothing is going out this run"
    );
    Connectivity::Offline {
        attempts: policy.max_attempts,
    }
}
