use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessState {
    Fresh,
    Stale,
    Offline,
}

const OFFLINE_FAILURES: u32 = 3;
const STALE_INTERVALS: i32 = 2;
const OFFLINE_INTERVALS: i32 = 6;
const MAX_INTERVAL_SECS: i64 = 86_400;

/// Grades how much the displayed series can be trusted.
///
/// Thresholds scale with the refresh interval: data older than two intervals is
/// stale, older than six is offline.
#[must_use]
pub fn evaluate_freshness(
    last_success: Option<DateTime<Utc>>,
    consecutive_failures: u32,
    now: DateTime<Utc>,
    refresh_interval_secs: u64,
) -> FreshnessState {
    let Some(last_success) = last_success else {
        return if consecutive_failures >= OFFLINE_FAILURES {
            FreshnessState::Offline
        } else {
            FreshnessState::Stale
        };
    };

    let interval_secs = i64::try_from(refresh_interval_secs)
        .unwrap_or(i64::MAX)
        .min(MAX_INTERVAL_SECS);
    let interval = Duration::seconds(interval_secs);
    let age = now - last_success;

    if age > interval * OFFLINE_INTERVALS || consecutive_failures >= OFFLINE_FAILURES {
        FreshnessState::Offline
    } else if age > interval * STALE_INTERVALS || consecutive_failures >= 1 {
        FreshnessState::Stale
    } else {
        FreshnessState::Fresh
    }
}
