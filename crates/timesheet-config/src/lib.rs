//! # timesheet-config
//!
//! Layered configuration loading for the timesheet updater using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TIMESHEET_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. `./timesheet.toml` in the working directory
//! 4. User-level `~/.config/timesheet/config.toml`
//! 5. Built-in defaults
//!
//! `TIMESHEET_MAIL__HOST` maps to `mail.host`, `TIMESHEET_REPORT__TEMPLATE_PATH`
//! to `report.template_path`, and so on.

mod error;
mod mail;
mod report;

pub use error::ConfigError;
pub use mail::MailConfig;
pub use report::ReportConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "TIMESHEET_";
pub const LOCAL_CONFIG_FILE: &str = "timesheet.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TimesheetConfig {
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl TimesheetConfig {
    /// Load configuration from defaults, TOML files and environment variables.
    ///
    /// Does NOT load `.env` files; the binary does that before calling in.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load with an optional explicit config file layered above the
    /// discovered ones.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.filter(|path| !path.is_file()) {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }

        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would only fail later, mid-run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mail.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "mail.host".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.mail.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "mail.port".into(),
                reason: "must be a non-zero port".into(),
            });
        }
        if self.mail.retry_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "mail.retry_attempts".into(),
                reason: "at least one connectivity probe is required".into(),
            });
        }
        if self.report.date_format.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.date_format".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("timesheet").join("config.toml"))
    }
}
