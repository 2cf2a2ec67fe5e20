#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::domain::forecast::{Location, parse_date};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REFRESH_SECS: u64 = 600;
pub const MIN_REFRESH_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "aqi-forecast",
    version,
    about = "Terminal air-quality forecast dashboard"
)]
pub struct Cli {
    /// City to show: a saved/preset name, or a label for --lat/--lon
    pub city: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Base URL of the forecast backend
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Refresh interval in seconds [default: saved value, else 600]
    #[arg(long)]
    pub refresh_interval: Option<u64>,

    /// Initially selected date (YYYY-MM-DD, default today)
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print a forecast report to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("expected YYYY-MM-DD, got {value:?}"))
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon))
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) =>
            {
                anyhow::bail!("coordinates out of range: {lat}, {lon}")
            }
            _ => Ok(()),
        }
    }

    /// Location given explicitly by coordinates, labelled by `city` when present.
    #[must_use]
    pub fn coordinate_location(&self) -> Option<Location> {
        let (lat, lon) = (self.lat?, self.lon?);
        Some(match &self.city {
            Some(name) => Location::new(name.clone(), lat, lon),
            None => Location::from_coords(lat, lon),
        })
    }

    /// Refresh interval given on the command line, floored at [`MIN_REFRESH_SECS`].
    #[must_use]
    pub fn effective_refresh_secs(&self) -> Option<u64> {
        self.refresh_interval.map(|secs| secs.max(MIN_REFRESH_SECS))
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }
}
