//! Horizontal layout on the 24-hour axis.
//!
//! Pure math mapping a time interval to a percentage-based position and
//! width on the board. Horizontal placement uses only the hour-and-minute
//! component of the interval's begin — the date is ignored, so every
//! operation is plotted as if it occurred within one reference day.
//! Widths are raw duration ratios, unclamped: an inverted interval yields
//! a negative width rather than an error.
//!
//! All functions here are deterministic and side-effect free.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::TimeWindow;

/// Minutes in the default 24-hour reference window.
pub const DAY_MINUTES: i64 = 24 * 60;

/// Milliseconds in the default 24-hour reference window.
pub const DAY_MS: i64 = DAY_MINUTES * 60 * 1000;

/// A block's horizontal position, as percentages of the axis width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Left edge, percent of the axis.
    pub offset_pct: f64,
    /// Width, percent of the axis. Negative for inverted intervals.
    pub width_pct: f64,
}

/// One labeled segment of the hour axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourBlock {
    /// Hour of day, 0–23.
    pub hour: u32,
    /// Display label, e.g. `"8:00"`.
    pub label: String,
    /// Segment width, percent of the axis.
    pub width_pct: f64,
}

/// Minute of day for a time-of-day value; seconds are ignored.
#[inline]
fn minute_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// Places an interval on the default 24-hour day axis.
///
/// Offset is the begin time-of-day's share of 1440 minutes; width is the
/// raw `end - begin` duration's share of 24 hours.
pub fn place(begin: NaiveDateTime, end: NaiveDateTime) -> Placement {
    let offset_pct = minute_of_day(begin.time()) as f64 / DAY_MINUTES as f64 * 100.0;
    let width_pct = (end - begin).num_milliseconds() as f64 / DAY_MS as f64 * 100.0;
    Placement {
        offset_pct,
        width_pct,
    }
}

/// Places an interval against an explicit reference window.
///
/// The offset is measured from the window begin's time-of-day, again
/// using only hour and minute; the width is the interval duration over
/// the window duration. `place` is the day-window special case.
pub fn place_in_window(begin: NaiveDateTime, end: NaiveDateTime, window: &TimeWindow) -> Placement {
    let window_minutes = window.duration_ms() as f64 / 60_000.0;
    let offset_minutes = (minute_of_day(begin.time()) - minute_of_day(window.begin.time())) as f64;
    let offset_pct = offset_minutes / window_minutes * 100.0;
    let width_pct = (end - begin).num_milliseconds() as f64 / window.duration_ms() as f64 * 100.0;
    Placement {
        offset_pct,
        width_pct,
    }
}

/// Generates the 24 equal-width hour segments of the axis.
///
/// Cheap, non-lazy, regenerated on every call; no caching.
pub fn hour_axis() -> Vec<HourBlock> {
    (0..24)
        .map(|hour| {
            let start_pct = f64::from(hour) * 60.0 / DAY_MINUTES as f64 * 100.0;
            let end_pct = f64::from(hour + 1) * 60.0 / DAY_MINUTES as f64 * 100.0;
            HourBlock {
                hour,
                label: format!("{hour}:00"),
                width_pct: end_pct - start_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::datetime;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_place_morning_work() {
        // 08:00–12:00: 480/1440 of the day in, 4h/24h wide.
        let p = place(datetime(2024, 4, 19, 8, 0), datetime(2024, 4, 19, 12, 0));
        assert!((p.offset_pct - 100.0 / 3.0).abs() < EPS);
        assert!((p.width_pct - 100.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_place_late_morning() {
        // 11:00–13:00: offset 45.833…%, width 8.333…%.
        let p = place(datetime(2024, 4, 19, 11, 0), datetime(2024, 4, 19, 13, 0));
        assert!((p.offset_pct - 45.833333333333336).abs() < EPS);
        assert!((p.width_pct - 8.333333333333334).abs() < EPS);
    }

    #[test]
    fn test_place_ignores_date() {
        // Same clock time on different days lands at the same offset.
        let a = place(datetime(2024, 4, 19, 14, 0), datetime(2024, 4, 19, 16, 0));
        let b = place(datetime(2024, 4, 20, 14, 0), datetime(2024, 4, 20, 16, 0));
        assert!((a.offset_pct - b.offset_pct).abs() < EPS);
        assert!((a.width_pct - b.width_pct).abs() < EPS);
    }

    #[test]
    fn test_place_midnight_offset_zero() {
        let p = place(datetime(2024, 4, 19, 0, 0), datetime(2024, 4, 19, 1, 0));
        assert!(p.offset_pct.abs() < EPS);
    }

    #[test]
    fn test_place_offset_range_within_day() {
        for hour in 0..24 {
            let p = place(
                datetime(2024, 4, 19, hour, 0),
                datetime(2024, 4, 19, hour, 30),
            );
            assert!(p.offset_pct >= 0.0);
            assert!(p.offset_pct < 100.0);
        }
    }

    #[test]
    fn test_place_inverted_interval_negative_width() {
        let p = place(datetime(2024, 4, 19, 12, 0), datetime(2024, 4, 19, 8, 0));
        assert!(p.width_pct < 0.0);
    }

    #[test]
    fn test_place_deterministic() {
        let begin = datetime(2024, 4, 19, 9, 30);
        let end = datetime(2024, 4, 19, 10, 45);
        assert_eq!(place(begin, end), place(begin, end));
    }

    #[test]
    fn test_place_in_window_matches_day_default() {
        let window = crate::models::TimeWindow::new(
            datetime(2024, 4, 19, 0, 0),
            datetime(2024, 4, 20, 0, 0),
        );
        let begin = datetime(2024, 4, 19, 8, 0);
        let end = datetime(2024, 4, 19, 12, 0);
        let a = place(begin, end);
        let b = place_in_window(begin, end, &window);
        assert!((a.offset_pct - b.offset_pct).abs() < EPS);
        assert!((a.width_pct - b.width_pct).abs() < EPS);
    }

    #[test]
    fn test_place_in_window_half_day() {
        // 12-hour window starting 06:00; 09:00–12:00 sits a quarter in, a quarter wide.
        let window = crate::models::TimeWindow::new(
            datetime(2024, 4, 19, 6, 0),
            datetime(2024, 4, 19, 18, 0),
        );
        let p = place_in_window(
            datetime(2024, 4, 19, 9, 0),
            datetime(2024, 4, 19, 12, 0),
            &window,
        );
        assert!((p.offset_pct - 25.0).abs() < EPS);
        assert!((p.width_pct - 25.0).abs() < EPS);
    }

    #[test]
    fn test_hour_axis_shape() {
        let axis = hour_axis();
        assert_eq!(axis.len(), 24);
        assert_eq!(axis[0].label, "0:00");
        assert_eq!(axis[23].label, "23:00");
        let total: f64 = axis.iter().map(|b| b.width_pct).sum();
        assert!((total - 100.0).abs() < 1e-6);
        for block in &axis {
            assert!((block.width_pct - 100.0 / 24.0).abs() < EPS);
        }
    }

    #[test]
    fn test_hour_axis_regenerated_identically() {
        assert_eq!(hour_axis(), hour_axis());
    }
}
