//! Derives what the dashboard shows for a selected date.
//!
//! Everything here is a pure function of the two forecast series plus the
//! selection. Callers re-run [`evaluate`] on every clock tick, date change, or
//! series replacement instead of keeping derived state around.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::domain::{
    aqi::{AqiCategory, ColorToken, RenderVariant, classify, render},
    forecast::{DailyForecastPoint, HourlyForecastPoint},
    window::{is_today, select_daily, select_hourly_window},
};

pub const TODAY_LABEL: &str = "Today";

/// The inputs one evaluation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub selected_date: NaiveDate,
    pub now: NaiveDateTime,
}

impl Selection {
    pub fn today(now: NaiveDateTime) -> Self {
        Self {
            selected_date: now.date(),
            now,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedHour {
    pub time: NaiveDateTime,
    pub predicted_aqi: f64,
    pub category: AqiCategory,
    pub color: ColorToken,
}

impl CategorizedHour {
    fn from_point(point: &HourlyForecastPoint) -> Self {
        let category = classify(point.predicted_aqi);
        Self {
            time: point.time,
            predicted_aqi: point.predicted_aqi,
            category,
            color: render(category, RenderVariant::Text),
        }
    }
}

/// Daily value for a non-today selection. `Unavailable` is distinct from a
/// reading of zero.
#[derive(Debug, Clone, PartialEq)]
pub enum DailyReading {
    Available {
        predicted_aqi: f64,
        category: AqiCategory,
        color: ColorToken,
    },
    Unavailable,
}

impl DailyReading {
    fn from_lookup(point: Option<&DailyForecastPoint>) -> Self {
        match point {
            Some(point) => {
                let category = classify(point.predicted_aqi);
                Self::Available {
                    predicted_aqi: point.predicted_aqi,
                    category,
                    color: render(category, RenderVariant::Text),
                }
            }
            None => Self::Unavailable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DateSummary {
    Today { window: Vec<CategorizedHour> },
    OtherDate { date: NaiveDate, reading: DailyReading },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub summary_label: String,
    pub summary: DateSummary,
}

impl ForecastView {
    pub fn is_today(&self) -> bool {
        matches!(self.summary, DateSummary::Today { .. })
    }
}

pub fn summary_label(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}

pub fn evaluate(
    daily: &[DailyForecastPoint],
    hourly: &[HourlyForecastPoint],
    selection: Selection,
) -> ForecastView {
    if is_today(selection.selected_date, selection.now) {
        let window = select_hourly_window(hourly, selection.now)
            .into_iter()
            .map(CategorizedHour::from_point)
            .collect();
        return ForecastView {
            summary_label: TODAY_LABEL.to_string(),
            summary: DateSummary::Today { window },
        };
    }

    let date = selection.selected_date;
    ForecastView {
        summary_label: summary_label(date),
        summary: DateSummary::OtherDate {
            date,
            reading: DailyReading::from_lookup(select_daily(daily, date)),
        },
    }
}

/// Background color for a calendar cell, transparent when the day has no forecast.
pub fn day_color(daily: &[DailyForecastPoint], date: NaiveDate) -> ColorToken {
    select_daily(daily, date)
        .map(|point| render(classify(point.predicted_aqi), RenderVariant::Background))
        .unwrap_or(ColorToken::TRANSPARENT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub category: Option<AqiCategory>,
    pub color: ColorToken,
    pub selected: bool,
    pub today: bool,
}

/// One month of calendar cells, Monday-first, `None` for padding before the 1st.
pub fn calendar_month(
    daily: &[DailyForecastPoint],
    selection: Selection,
) -> Vec<Vec<Option<CalendarDay>>> {
    let anchor = selection.selected_date;
    let Some(first) = anchor.with_day(1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut cells = vec![None; lead];
    let mut next = Some(first);
    while let Some(date) = next.filter(|d| d.month() == first.month()) {
        cells.push(Some(CalendarDay {
            date,
            category: select_daily(daily, date).map(|point| classify(point.predicted_aqi)),
            color: day_color(daily, date),
            selected: date == anchor,
            today: is_today(date, selection.now),
        }));
        next = date.succ_opt();
    }

    cells.chunks(7).map(<[_]>::to_vec).collect()
}
