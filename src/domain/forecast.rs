use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resilience::freshness::FreshnessState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self::new(format!("{lat:.4}, {lon:.4}"), lat, lon)
    }
}

/// Cities offered when no saved locations exist yet.
pub fn preset_locations() -> Vec<Location> {
    vec![
        Location::new("Chennai", 13.0827, 80.2707),
        Location::new("Delhi", 28.6139, 77.2090),
        Location::new("Mumbai", 19.0760, 72.8777),
        Location::new("Bengaluru", 12.9716, 77.5946),
        Location::new("Kolkata", 22.5726, 88.3639),
    ]
}

/// One predicted AQI value per calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecastPoint {
    pub date: NaiveDate,
    pub predicted_aqi: f64,
}

/// One predicted AQI value per hour, same-day granularity.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyForecastPoint {
    pub time: NaiveDateTime,
    pub predicted_aqi: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollutantComponents {
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub no: f64,
    pub nh3: f64,
    pub co: f64,
    pub so2: f64,
    pub o3: f64,
}

impl PollutantComponents {
    /// Display order used by the snapshot panel and the one-shot report.
    pub fn labelled(&self) -> [(&'static str, f64); 6] {
        [
            ("PM2.5", self.pm25),
            ("PM10", self.pm10),
            ("NO2", self.no2),
            ("SO2", self.so2),
            ("O3", self.o3),
            ("CO", self.co),
        ]
    }
}

/// Live conditions, passed through to the display untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentSnapshot {
    pub temp_c: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pressure: f64,
    pub components: PollutantComponents,
}

/// Everything one successful fetch produces. A newer report replaces the
/// previous one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveReport {
    pub location: Location,
    pub fetched_at: Option<NaiveDateTime>,
    pub current: CurrentSnapshot,
    pub predicted_aqi_3h: Option<f64>,
    pub daily: Vec<DailyForecastPoint>,
    pub hourly: Vec<HourlyForecastPoint>,
}

#[derive(Debug, Clone)]
pub struct RefreshMetadata {
    pub last_success: Option<DateTime<Utc>>,
    pub state: FreshnessState,
    pub consecutive_failures: u32,
}

impl Default for RefreshMetadata {
    fn default() -> Self {
        Self {
            last_success: None,
            state: FreshnessState::Stale,
            consecutive_failures: 0,
        }
    }
}

impl RefreshMetadata {
    pub fn mark_success(&mut self, at: DateTime<Utc>) {
        self.last_success = Some(at);
        self.consecutive_failures = 0;
        self.state = FreshnessState::Fresh;
    }

    pub fn mark_failure(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    pub fn age_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_success.map(|ts| (now - ts).num_minutes())
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Accepts `2025-09-26T14:00`, with optional seconds and fractional seconds.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}
