use anyhow::Context;
use clap::Parser;
use timesheet_core::SystemClock;
use timesheet_mail::SmtpMailer;
use timesheet_report::{RandomPicker, ReportOptions};

mod bootstrap;
mod cli;
mod error;
mod updater;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("timesheet error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    tracing::info!(base_dir = %cli.base_dir.display(), "started the timesheet updater");

    let config = bootstrap::load_config(&cli.base_dir, cli.config.as_deref())?;
    let report = ReportOptions::from_config(&config.report)
        .context("invalid report configuration")?;
    let mailer = SmtpMailer::new(&config.mail, &cli.sender, &cli.password)
        .context("failed to configure the SMTP transport")?;
    tracing::debug!(host = mailer.host(), port = mailer.port(), "mail relay configured");

    let settings = updater::Settings {
        base_dir: cli.base_dir.clone(),
        envelope: cli.envelope(),
        password: cli.password.clone(),
        mode: cli.mode(),
        report,
        mail: config.mail,
    };

    let outcome = updater::Updater::new(settings, mailer, RandomPicker, SystemClock)
        .run()
        .await?;
    tracing::info!(?outcome, "timesheet updater finished");
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TIMESHEET_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
