//! Time window model.
//!
//! Defines the calendar interval attached to tours and operations.
//!
//! # Time Model
//! Timestamps are naive calendar date-times (no timezone). Horizontal
//! layout ignores the date component — see the `layout` module — so a
//! window's date only matters for the board's date header.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A calendar time interval `[begin, end)`.
///
/// Well-formed data satisfies `end >= begin`; this is not enforced, and
/// inverted windows flow through layout unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub begin: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { begin, end }
    }

    /// Duration of this window in milliseconds (negative if inverted).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.begin).num_milliseconds()
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.begin && at < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.begin < other.end && other.begin < self.end
    }
}

/// Builds a timestamp from calendar components.
///
/// Intended for fixed seed data and tests; panics on out-of-range
/// components, which literal data never produces.
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("calendar components in range")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_window_duration() {
        let w = TimeWindow::new(datetime(2024, 4, 19, 8, 0), datetime(2024, 4, 19, 12, 0));
        assert_eq!(w.duration_ms(), 4 * 60 * 60 * 1000);
    }

    #[test]
    fn test_time_window_contains() {
        let w = TimeWindow::new(datetime(2024, 4, 19, 8, 0), datetime(2024, 4, 19, 12, 0));
        assert!(w.contains(datetime(2024, 4, 19, 8, 0)));
        assert!(w.contains(datetime(2024, 4, 19, 11, 59)));
        assert!(!w.contains(datetime(2024, 4, 19, 12, 0))); // exclusive end
        assert!(!w.contains(datetime(2024, 4, 19, 7, 59)));
    }

    #[test]
    fn test_time_window_overlap() {
        let a = TimeWindow::new(datetime(2024, 4, 19, 8, 0), datetime(2024, 4, 19, 12, 0));
        let b = TimeWindow::new(datetime(2024, 4, 19, 11, 0), datetime(2024, 4, 19, 13, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeWindow::new(datetime(2024, 4, 19, 12, 0), datetime(2024, 4, 19, 14, 0));
        assert!(!a.overlaps(&c)); // touching but not overlapping
    }

    #[test]
    fn test_inverted_window_negative_duration() {
        let w = TimeWindow::new(datetime(2024, 4, 19, 12, 0), datetime(2024, 4, 19, 8, 0));
        assert_eq!(w.duration_ms(), -(4 * 60 * 60 * 1000));
    }
}
