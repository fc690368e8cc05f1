//! The update pipeline.
//!
//! 1. Verify the base directory
//! 2. For the previous and current month: seed the report if absent, fill
//!    placeholder content, save, and collect unsent past weeks
//! 3. Stop when nothing is unsent (unless dry-running)
//! 4. Compose the email with every flagged report attached
//! 5. Wait for the mail server; give up quietly when offline
//! 6. Send (unless in no-email mode) and mark the sent weeks
//!
//! Reports are opened, processed, saved and closed one at a time.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use timesheet_config::MailConfig;
use timesheet_core::{Clock, ReportIdentity};
use timesheet_mail::{
    Connectivity, Dispatch, Envelope, Mailer, RetryPolicy, await_connectivity, compose,
    ensure_credential,
};
use timesheet_report::{ContentPicker, Report, ReportError, ReportOptions};

use crate::error::UpdaterError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMode {
    /// Compose and check connectivity, but never send or mark as sent.
    pub no_email: bool,
    /// Keep going when nothing is unsent, for inspection.
    pub dry_run: bool,
}

impl RunMode {
    pub const fn new(no_email: bool, dry_run: bool) -> Self {
        Self {
            no_email: no_email || dry_run,
            dry_run,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_dir: PathBuf,
    pub envelope: Envelope,
    pub password: String,
    pub mode: RunMode,
    pub report: ReportOptions,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No past week is waiting to be sent.
    NothingToSend,
    /// The mail server never became reachable; nothing was sent or marked.
    Offline { attempts: u32 },
    /// No-email mode: the message was prepared but not sent.
    EmailSuppressed,
    /// The email went out with these reports attached.
    Sent { reports: Vec<PathBuf> },
}

pub struct Updater<M, P, C> {
    settings: Settings,
    mailer: M,
    picker: P,
    clock: C,
}

impl<M: Mailer, P: ContentPicker, C: Clock> Updater<M, P, C> {
    pub const fn new(settings: Settings, mailer: M, picker: P, clock: C) -> Self {
        Self {
            settings,
            mailer,
            picker,
            clock,
        }
    }

    pub async fn run(&mut self) -> Result<Outcome, UpdaterError> {
        let base_dir = self.settings.base_dir.clone();
        if !base_dir.is_dir() {
            return Err(UpdaterError::MissingBaseDirectory(base_dir));
        }
        tracing::info!(base_dir = %base_dir.display(), "verified base directory");

        let today = self.clock.today();
        let identities = [
            ReportIdentity::previous(today)?,
            ReportIdentity::current(today)?,
        ];

        let mut flagged: Vec<(PathBuf, String)> = Vec::new();
        for identity in identities {
            let path = base_dir.join(identity.file_name());
            tracing::info!(report = %path.display(), month = %identity, "resolved report");

            if !path.exists() {
                self.create_report(&path)?;
            }
            if let Some(label) = self.refresh_report(&path)? {
                flagged.push((path, label));
            }
        }

        if flagged.is_empty() && !self.settings.mode.dry_run {
            tracing::info!("no need to send anything at the moment");
            return Ok(Outcome::NothingToSend);
        }

        let labels = flagged
            .iter()
            .map(|(_, label)| label.as_str())
            .collect::<Vec<_>>()
            .join(" & ");
        tracing::info!(%labels, "preparing timesheet email");

        ensure_credential(&self.settings.password)?;
        let dispatch = Dispatch {
            labels,
            year: today.year(),
            attachments: flagged.into_iter().map(|(path, _)| path).collect(),
        };
        let message = compose(&self.settings.envelope, &dispatch, &self.settings.mail)?;

        let policy = RetryPolicy::from_config(&self.settings.mail);
        if let Connectivity::Offline { attempts } = await_connectivity(&self.mailer, policy).await
        {
            return Ok(Outcome::Offline { attempts });
        }

        if self.settings.mode.no_email {
            tracing::info!("email sending is disabled; nothing is going out");
            return Ok(Outcome::EmailSuppressed);
        }

        tracing::info!(recipient = %self.settings.envelope.recipient, "sending email");
        self.mailer.send(message).await?;
        tracing::info!("email sent");

        self.mark_all_as_sent(&dispatch.attachments);
        Ok(Outcome::Sent {
            reports: dispatch.attachments,
        })
    }

    fn create_report(&mut self, path: &Path) -> Result<(), UpdaterError> {
        tracing::info!(report = %path.display(), "report not found; creating it from the template");

        let mut report = Report::open(path, &self.settings.report)?;
        let today = self.clock.today();
        report
            .update_period_title()
            .update_start_of_month()
            .update_end_of_month()
            .update_week_periods()
            .update_content(today, &mut self.picker);
        report.save()?;

        let identity = report.identity();
        tracing::info!(
            report = %path.display(),
            month = identity.month_number(),
            year = identity.year(),
            start = %report.start_of_month(),
            end = %report.end_of_month(),
            "created report"
        );
        report.close();
        Ok(())
    }

    /// Fill content, save, and return the unsent-weeks label if any.
    fn refresh_report(&mut self, path: &Path) -> Result<Option<String>, UpdaterError> {
        let mut report = Report::open(path, &self.settings.report)?;
        report.update_content(self.clock.today(), &mut self.picker);
        report.save()?;

        let label = report.unsent_label(self.clock.today());
        if let Some(label) = &label {
            tracing::info!(report = %path.display(), %label, "report has unsent content");
        }
        report.close();
        Ok(label)
    }

    /// A failure on one report does not stop the others.
    fn mark_all_as_sent(&self, reports: &[PathBuf]) {
        tracing::info!("marking week entries as sent");
        for path in reports {
            if let Err(error) = self.mark_report_as_sent(path) {
                tracing::error!(%error, report = %path.display(), "failed to mark week entries as sent");
            }
        }
    }

    fn mark_report_as_sent(&self, path: &Path) -> Result<(), ReportError> {
        let mut report = Report::open(path, &self.settings.report)?;
        report.mark_all_as_sent(self.clock.today());
        report.save()?;
        report.close();
        Ok(())
    }
}
