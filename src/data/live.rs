use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::forecast::{
    CurrentSnapshot, DailyForecastPoint, HourlyForecastPoint, LiveReport, Location,
    PollutantComponents, parse_date, parse_datetime,
};

const LIVE_PATH: &str = "/api/live";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum LiveError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("live request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("backend returned {status}: {detail}")]
    Status { status: StatusCode, detail: String },
    #[error("failed to parse live payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the forecast backend's `/api/live` endpoint.
#[derive(Debug, Clone)]
pub struct LiveClient {
    client: Client,
    base_url: String,
}

impl LiveClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LiveError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(LiveError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch(&self, location: &Location) -> Result<LiveReport, LiveError> {
        tracing::info!(city = %location.name, "fetching live forecast");
        let response = self
            .client
            .get(format!("{}{LIVE_PATH}", self.base_url))
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("city", location.name.clone()),
            ])
            .send()
            .await
            .map_err(LiveError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let detail = error_detail(&response.text().await.unwrap_or_default());
            return Err(LiveError::Status { status, detail });
        }

        let payload: LivePayload = response.json().await.map_err(LiveError::Decode)?;
        Ok(payload.into_report(location))
    }
}

/// Pulls FastAPI's `{"detail": ...}` message out of an error body.
fn error_detail(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => body.chars().take(200).collect(),
    }
}

#[derive(Debug, Deserialize)]
struct LivePayload {
    city: Option<String>,
    fetched_at: Option<String>,
    #[serde(default)]
    weather: WeatherBlock,
    #[serde(default)]
    current_components: ComponentsBlock,
    predicted_aqi_3h: Option<f64>,
    #[serde(default)]
    forecast_30d: Vec<DailyEntry>,
    #[serde(default)]
    hourly_aqi: Vec<HourlyEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeatherBlock {
    temp_c: f64,
    humidity: f64,
    pressure: f64,
    wind_speed: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ComponentsBlock {
    #[serde(rename = "PM25")]
    pm25: f64,
    #[serde(rename = "PM10")]
    pm10: f64,
    #[serde(rename = "NO2")]
    no2: f64,
    #[serde(rename = "NO")]
    no: f64,
    #[serde(rename = "NH3")]
    nh3: f64,
    #[serde(rename = "CO")]
    co: f64,
    #[serde(rename = "SO2")]
    so2: f64,
    #[serde(rename = "O3")]
    o3: f64,
}

#[derive(Debug, Deserialize)]
struct DailyEntry {
    date: String,
    predicted_aqi: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct HourlyEntry {
    time: String,
    predicted_aqi: Option<f64>,
}

impl LivePayload {
    fn into_report(self, requested: &Location) -> LiveReport {
        let name = self
            .city
            .filter(|city| !city.is_empty() && city != "Unknown")
            .unwrap_or_else(|| requested.name.clone());

        LiveReport {
            location: Location::new(name, requested.latitude, requested.longitude),
            fetched_at: self.fetched_at.as_deref().and_then(parse_datetime),
            current: CurrentSnapshot {
                temp_c: self.weather.temp_c,
                humidity: self.weather.humidity,
                wind_speed: self.weather.wind_speed,
                pressure: self.weather.pressure,
                components: PollutantComponents {
                    pm25: self.current_components.pm25,
                    pm10: self.current_components.pm10,
                    no2: self.current_components.no2,
                    no: self.current_components.no,
                    nh3: self.current_components.nh3,
                    co: self.current_components.co,
                    so2: self.current_components.so2,
                    o3: self.current_components.o3,
                },
            },
            predicted_aqi_3h: self.predicted_aqi_3h,
            daily: parse_daily(&self.forecast_30d),
            hourly: parse_hourly(&self.hourly_aqi),
        }
    }
}

fn parse_daily(entries: &[DailyEntry]) -> Vec<DailyForecastPoint> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(date) = parse_date(&entry.date) else {
            tracing::warn!(date = %entry.date, "skipping daily point with unparseable date");
            continue;
        };
        out.push(DailyForecastPoint {
            date,
            predicted_aqi: entry.predicted_aqi.unwrap_or(f64::NAN),
        });
    }
    out
}

fn parse_hourly(entries: &[HourlyEntry]) -> Vec<HourlyForecastPoint> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(time) = parse_datetime(&entry.time) else {
            tracing::warn!(time = %entry.time, "skipping hourly point with unparseable time");
            continue;
        };
        out.push(HourlyForecastPoint {
            time,
            predicted_aqi: entry.predicted_aqi.unwrap_or(f64::NAN),
        });
    }
    out
}
