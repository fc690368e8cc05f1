//! Timesheet message composition.

use std::path::{Path, PathBuf};

use lettre::Message;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use timesheet_config::MailConfig;

use crate::error::MailError;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Who the timesheet goes to, and for which project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub sender: String,
    pub recipient: String,
    pub cc: Vec<String>,
    pub project: String,
}

/// What is being sent: unsent week labels of the run and the reports
/// carrying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub labels: String,
    pub year: i32,
    pub attachments: Vec<PathBuf>,
}

/// Split a comma-separated CC list, dropping blanks.
pub fn parse_cc_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn subject(project: &str, author: &str, labels: &str, year: i32) -> String {
    format!("[{project}] {author} - Timesheet - {labels} - {year}")
}

pub fn body(labels: &str, year: i32, signature: &str) -> String {
    format!(
        "Dear everyone,\n\n\
         Attached in this email is the up-to-date working timesheet for {labels} - {year}.\n\n\
         Thank you for your support. If you need anything, please let me know.\n\n\
         Best regards,\n\n\
         {signature}\n"
    )
}

/// Refuse to go further without a password.
///
/// # Errors
///
/// [`MailError::MissingCredential`] when `password` is blank.
pub fn ensure_credential(password: &str) -> Result<(), MailError> {
    if password.trim().is_empty() {
        return Err(MailError::MissingCredential);
    }
    Ok(())
}

/// Build the timesheet message with every report attached.
///
/// # Errors
///
/// Fails on unparsable addresses, unreadable attachments or message assembly
/// errors.
pub fn compose(
    envelope: &Envelope,
    dispatch: &Dispatch,
    config: &MailConfig,
) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(mailbox(&envelope.sender)?)
        .to(mailbox(&envelope.recipient)?)
        .subject(subject(
            &envelope.project,
            &config.author,
            &dispatch.labels,
            dispatch.year,
        ));
    for cc in &envelope.cc {
        builder = builder.cc(mailbox(cc)?);
    }

    let mut multipart = MultiPart::mixed().singlepart(SinglePart::plain(body(
        &dispatch.labels,
        dispatch.year,
        &config.signature,
    )));
    for path in &dispatch.attachments {
        multipart = multipart.singlepart(attachment(path)?);
    }

    Ok(builder.multipart(multipart)?)
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

fn attachment(path: &Path) -> Result<SinglePart, MailError> {
    let attachment_error = |reason: String| MailError::Attachment {
        path: path.to_path_buf(),
        reason,
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| attachment_error("path has no file name".to_string()))?;
    let content = std::fs::read(path).map_err(|e| attachment_error(e.to_string()))?;
    let content_type =
        ContentType::parse(XLSX_CONTENT_TYPE).map_err(|e| attachment_error(e.to_string()))?;

    Ok(Attachment::new(file_name.to_string()).body(content, content_type))
}
