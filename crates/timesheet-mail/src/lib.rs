//! # timesheet-mail
//!
//! Sending the timesheet: [`compose`] builds the message with every flagged
//! report attached, [`connectivity`] waits for the relay to become reachable,
//! and [`Mailer`] delivers (over SMTP in production).

pub mod compose;
pub mod connectivity;
pub mod error;
pub mod transport;

pub use compose::{Dispatch, Envelope, compose, ensure_credential, parse_cc_list};
pub use connectivity::{Connectivity, RetryPolicy, await_connectivity};
pub use error::MailError;
pub use lettre::Message;
pub use transport::{Mailer, SmtpMailer};
