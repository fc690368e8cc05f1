use std::path::Path;

use anyhow::Context;
use timesheet_config::TimesheetConfig;

/// Load `.env` (base directory first, then the working directory) and the
/// layered configuration.
pub fn load_config(base_dir: &Path, explicit: Option<&Path>) -> anyhow::Result<TimesheetConfig> {
    load_dotenv(base_dir)?;
    TimesheetConfig::load_from(explicit).context("failed to load timesheet configuration")
}

fn load_dotenv(base_dir: &Path) -> anyhow::Result<()> {
    let env_path = base_dir.join(".env");
    if env_path.is_file() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
