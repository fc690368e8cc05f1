//! # timesheet-core
//!
//! Calendar rules shared by every timesheet crate:
//! - [`ReportIdentity`]: which month a report file covers and how it is named
//! - [`partition`]: splitting a month into working-week spans
//! - [`Clock`]: the source of "today" for past/current/future predicates
//! - [`CoreError`]: identity and file-name validation failures

pub mod clock;
pub mod errors;
pub mod identity;
pub mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::CoreError;
pub use identity::{REPORT_EXTENSION, REPORT_PREFIX, ReportIdentity};
pub use week::{WeekSpan, partition};
