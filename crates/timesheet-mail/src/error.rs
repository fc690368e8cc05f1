//! Mail error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    /// No sender credential was supplied.
    #[error("No SMTP password was provided")]
    MissingCredential,

    /// A sender, recipient or CC address does not parse.
    #[error("Invalid email address '{address}': {source}")]
    Address {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("Invalid attachment {}: {reason}", path.display())]
    Attachment { path: PathBuf, reason: String },

    /// Message assembly failed.
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP connection, authentication or delivery failed.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
