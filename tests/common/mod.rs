#![allow(dead_code)]

use aqi_forecast::{
    app::{settings::RuntimeSettings, state::AppState},
    cli::Cli,
    domain::forecast::{
        CurrentSnapshot, DailyForecastPoint, HourlyForecastPoint, LiveReport, Location,
        PollutantComponents,
    },
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use clap::Parser;

pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 25).expect("valid fixed date")
}

pub fn at_hour(hour: u32) -> NaiveDateTime {
    base_date().and_hms_opt(hour, 5, 0).expect("valid fixed time")
}

pub fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["aqi-forecast"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

pub fn two_city_settings() -> RuntimeSettings {
    RuntimeSettings {
        locations: vec![
            Location::new("Chennai", 13.0827, 80.2707),
            Location::new("Delhi", 28.6139, 77.209),
        ],
        last_location: None,
        refresh_interval_secs: 600,
    }
}

pub fn state_at(cli: &Cli, now: NaiveDateTime) -> AppState {
    AppState::new(cli, two_city_settings(), 0, now)
}

/// Hours 14..=17 with AQI 60, 90, 160, 40 and thirty days of daily points
/// starting tomorrow, cycling through the three bands.
pub fn fixture_report(city: &str) -> LiveReport {
    let hourly = [(14, 60.0), (15, 90.0), (16, 160.0), (17, 40.0)]
        .into_iter()
        .map(|(hour, predicted_aqi)| HourlyForecastPoint {
            time: base_date().and_hms_opt(hour, 0, 0).expect("valid hour"),
            predicted_aqi,
        })
        .collect();
    let daily = (1..=30_usize)
        .map(|offset| DailyForecastPoint {
            date: base_date() + Duration::days(i64::try_from(offset).unwrap_or(0)),
            predicted_aqi: [45.0, 102.1, 175.0][offset % 3],
        })
        .collect();

    LiveReport {
        location: Location::new(city, 13.0827, 80.2707),
        fetched_at: None,
        current: CurrentSnapshot {
            temp_c: 31.5,
            humidity: 70.0,
            wind_speed: 12.0,
            pressure: 1008.0,
            components: PollutantComponents {
                pm25: 35.0,
                pm10: 60.0,
                no2: 12.0,
                no: 0.0,
                nh3: 4.0,
                co: 300.0,
                so2: 6.0,
                o3: 40.0,
            },
        },
        predicted_aqi_3h: Some(88.2),
        daily,
        hourly,
    }
}

/// Backend payload in the shape `/api/live` returns.
pub fn live_payload(city: &str, daily_aqi: f64) -> serde_json::Value {
    serde_json::json!({
        "city": city,
        "lat": 13.0827,
        "lon": 80.2707,
        "fetched_at": "2025-09-25T08:15:42.123456",
        "weather": {"temp_c": 31.5, "humidity": 70.0, "pressure": 1008.0, "wind_speed": 12.0},
        "current_components": {
            "PM25": 35.0, "PM10": 60.0, "NO2": 12.0, "NO": 0.0,
            "NH3": 4.0, "CO": 300.0, "SO2": 6.0, "O3": 40.0
        },
        "predicted_aqi_3h": 88.2,
        "forecast_30d": [
            {"date": "2025-09-26", "predicted_aqi": 102.1},
            {"date": "2025-09-27", "predicted_aqi": daily_aqi}
        ],
        "hourly_aqi": [
            {"time": "2025-09-25T14:00", "predicted_aqi": 60.0},
            {"time": "2025-09-25T15:00", "predicted_aqi": 90.0},
            {"time": "2025-09-25T16:00", "predicted_aqi": 160.0},
            {"time": "2025-09-25T17:00", "predicted_aqi": 40.0}
        ]
    })
}
