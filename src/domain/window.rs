use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::domain::forecast::{DailyForecastPoint, HourlyForecastPoint};

/// How many hours past the current hour the short-range window reaches.
pub const WINDOW_HOURS: u32 = 3;
/// Maximum number of points the short-range window returns.
pub const WINDOW_LEN: usize = 3;

/// Finds the daily point for `date`, `None` when the series has no such day.
pub fn select_daily(series: &[DailyForecastPoint], date: NaiveDate) -> Option<&DailyForecastPoint> {
    series.iter().find(|point| point.date == date)
}

/// Selects the points whose hour-of-day lies in `(hour(now), hour(now) + 3]`.
///
/// The comparison is on hour-of-day only. The date part of each point is
/// ignored and the range never wraps past midnight, so from 21:00 onward the
/// window shrinks and at 23:00 it is always empty. Series order is kept and the
/// result is capped at [`WINDOW_LEN`] entries.
pub fn select_hourly_window(
    series: &[HourlyForecastPoint],
    now: NaiveDateTime,
) -> Vec<&HourlyForecastPoint> {
    let current = now.hour();
    let last = current + WINDOW_HOURS;
    series
        .iter()
        .filter(|point| {
            let hour = point.time.hour();
            current < hour && hour <= last
        })
        .take(WINDOW_LEN)
        .collect()
}

pub fn is_today(date: NaiveDate, now: NaiveDateTime) -> bool {
    date == now.date()
}
