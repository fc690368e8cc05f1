use std::path::PathBuf;

use clap::Parser;
use timesheet_mail::{Envelope, parse_cc_list};

use crate::updater::RunMode;

/// Top-level CLI parser for the `timesheet` binary.
#[derive(Debug, Parser)]
#[command(
    name = "timesheet",
    version,
    about = "Fill, email and track the monthly timesheet reports"
)]
pub struct Cli {
    /// Directory holding the monthly report files
    pub base_dir: PathBuf,

    /// Sender address, also used as the SMTP username
    pub sender: String,

    /// SMTP password of the sender
    pub password: String,

    /// Primary recipient address
    pub recipient: String,

    /// Comma-separated CC addresses
    pub cc: String,

    /// Project name shown in the subject line
    pub project: String,

    /// Do everything except sending the email (nothing is marked as sent)
    #[arg(long)]
    pub no_email_mode: bool,

    /// Like --no-email-mode, and run the whole pipeline even with nothing to send
    #[arg(long)]
    pub dry_run: bool,

    /// Extra TOML config file layered above the discovered ones
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn mode(&self) -> RunMode {
        RunMode::new(self.no_email_mode, self.dry_run)
    }

    #[must_use]
    pub fn envelope(&self) -> Envelope {
        Envelope {
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            cc: parse_cc_list(&self.cc),
            project: self.project.clone(),
        }
    }
}
