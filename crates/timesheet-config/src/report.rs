//! Report file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Workbook used to seed new reports. Empty means the bundled template.
    #[serde(default)]
    pub template_path: String,

    /// chrono format for dates written into report cells.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            template_path: String::new(),
            date_format: default_date_format(),
        }
    }
}

impl ReportConfig {
    pub fn template_path(&self) -> Option<PathBuf> {
        let trimmed = self.template_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
