//! # timesheet-report
//!
//! The monthly report lifecycle. A [`Report`] is opened from its file (or
//! seeded from a [`TemplateSource`] when the file is absent), partitioned into
//! week entries, auto-filled with placeholder content, marked as sent, and
//! saved through a `-temp` sibling that is renamed over the original.
//!
//! Cell storage is a plain [`CellGrid`]; [`workbook`] moves grids in and out
//! of `.xlsx` files.

pub mod content;
pub mod entry;
pub mod error;
pub mod grid;
pub mod layout;
pub mod report;
pub mod template;
pub mod workbook;

pub use content::{ContentPicker, FixedPicker, RandomPicker};
pub use entry::{WeekEntry, WeekFields};
pub use error::ReportError;
pub use grid::{CellGrid, CellRef};
pub use layout::WeekField;
pub use report::{Report, ReportOptions, SENT_MARKER};
pub use template::TemplateSource;
