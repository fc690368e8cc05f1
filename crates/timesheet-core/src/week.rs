//! Working-week partitioning of a month.
//!
//! A span starts on the cursor day and runs to that week's Friday. A cursor
//! on Saturday or Sunday rolls forward to the following Monday, so weekends
//! never open a span of their own. Ends are clipped to the month's last day.
//! Partitioning always finishes with exactly one zero-length sentinel span.

use chrono::{Datelike, Days, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSpan {
    index: usize,
    start: NaiveDate,
    end: NaiveDate,
    number_of_days: u32,
}

impl WeekSpan {
    /// Compute the span opened by `cursor`, clipped to `bound` (inclusive).
    pub fn compute(index: usize, cursor: NaiveDate, bound: NaiveDate) -> Self {
        if cursor > bound {
            return Self::sentinel(index, cursor, bound);
        }

        // (offset from cursor to span start, extra days after span start)
        let (offset, length) = match cursor.weekday() {
            Weekday::Mon => (0, 4),
            Weekday::Tue => (0, 3),
            Weekday::Wed => (0, 2),
            Weekday::Thu => (0, 1),
            Weekday::Fri => (0, 0),
            Weekday::Sat => (2, 4),
            Weekday::Sun => (1, 4),
        };

        let Some(start) = cursor.checked_add_days(Days::new(offset)) else {
            return Self::sentinel(index, cursor, bound);
        };
        let end = start
            .checked_add_days(Days::new(length))
            .map_or(bound, |end| end.min(bound));
        let number_of_days = u32::try_from((end - start).num_days() + 1).unwrap_or(0);

        Self {
            index,
            start,
            end,
            number_of_days,
        }
    }

    fn sentinel(index: usize, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            index,
            start,
            end,
            number_of_days: 0,
        }
    }

    /// Zero-based position within the month.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// One-based week number as shown to people.
    pub const fn presentable_index(&self) -> usize {
        self.index + 1
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    pub const fn number_of_days(&self) -> u32 {
        self.number_of_days
    }

    /// The trailing "end of month, no content" span.
    pub const fn is_sentinel(&self) -> bool {
        self.number_of_days == 0
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        today > self.end
    }

    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.start <= today && today <= self.end
    }

    pub fn is_future(&self, today: NaiveDate) -> bool {
        today < self.start
    }
}

/// Split `[month_start, month_end]` into working-week spans.
///
/// The returned sequence is never empty and its last element is the only
/// sentinel.
pub fn partition(month_start: NaiveDate, month_end: NaiveDate) -> Vec<WeekSpan> {
    let mut spans = Vec::new();
    let mut cursor = month_start;

    loop {
        let span = WeekSpan::compute(spans.len(), cursor, month_end);
        spans.push(span);
        if span.is_sentinel() {
            break;
        }
        let Some(next) = span.end().succ_opt() else {
            spans.push(WeekSpan::sentinel(spans.len(), span.end(), month_end));
            break;
        };
        cursor = next;
    }

    spans
}
