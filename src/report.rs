use crate::{
    domain::{
        aqi::{classify, format_aqi},
        forecast::LiveReport,
        view_model::{DailyReading, DateSummary, ForecastView},
    },
    ui::widgets::summary::UNAVAILABLE,
};

/// Plain-text rendering of one evaluation, printed by `--one-shot`.
pub fn render_report(report: &LiveReport, view: &ForecastView) -> String {
    let current = &report.current;
    let location = &report.location;
    let mut lines = vec![
        format!(
            "{} ({:.4}, {:.4})",
            location.name, location.latitude, location.longitude
        ),
        format!(
            "Temperature {:.1}°C  Humidity {:.0}%  Wind {:.1} km/h  Pressure {:.0} hPa",
            current.temp_c, current.humidity, current.wind_speed, current.pressure
        ),
        current
            .components
            .labelled()
            .iter()
            .map(|(label, value)| format!("{label} {value:.1}"))
            .collect::<Vec<_>>()
            .join("  "),
        match report.predicted_aqi_3h {
            Some(value) => format!("AQI in 3h: {} ({})", format_aqi(value), classify(value)),
            None => format!("AQI in 3h: {UNAVAILABLE}"),
        },
        String::new(),
        view.summary_label.clone(),
    ];

    match &view.summary {
        DateSummary::Today { window } if window.is_empty() => {
            lines.push("  No near-term forecast".to_string());
        }
        DateSummary::Today { window } => {
            lines.extend(window.iter().map(|hour| {
                format!(
                    "  {}  {:>6}  {}",
                    hour.time.format("%H:%M"),
                    format_aqi(hour.predicted_aqi),
                    hour.category
                )
            }));
        }
        DateSummary::OtherDate { reading, .. } => lines.push(match reading {
            DailyReading::Available {
                predicted_aqi,
                category,
                ..
            } => format!("  Predicted AQI: {} ({category})", format_aqi(*predicted_aqi)),
            DailyReading::Unavailable => format!("  Predicted AQI: {UNAVAILABLE}"),
        }),
    }

    lines.join("\n")
}
