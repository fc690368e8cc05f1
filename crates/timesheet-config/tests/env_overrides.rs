use figment::Jail;
use pretty_assertions::assert_eq;
use timesheet_config::TimesheetConfig;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("TIMESHEET_MAIL__HOST", "smtp.internal");
        jail.set_env("TIMESHEET_MAIL__RETRY_ATTEMPTS", "3");

        let config = TimesheetConfig::load().expect("config loads");
        assert_eq!(config.mail.host, "smtp.internal");
        assert_eq!(config.mail.retry_attempts, 3);
        assert_eq!(config.mail.port, 465);
        Ok(())
    });
}

#[test]
fn env_beats_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file("timesheet.toml", "[mail]\nauthor = \"From File\"\n")?;
        jail.set_env("TIMESHEET_MAIL__AUTHOR", "From Env");

        let config = TimesheetConfig::load().expect("config loads");
        assert_eq!(config.mail.author, "From Env");
        Ok(())
    });
}
