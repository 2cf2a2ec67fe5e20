use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::{AppMode, AppState},
    domain::{
        aqi::{classify, format_aqi},
        forecast::LiveReport,
    },
    ui::{
        theme::{Theme, category_text_color},
        widgets::summary::UNAVAILABLE,
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(panel_title(state.report.as_ref()))
        .border_style(Style::default().fg(theme.border));

    let lines = match (&state.report, state.mode) {
        (Some(report), _) => snapshot_lines(report, theme),
        (None, AppMode::Error) => vec![Line::from(Span::styled(
            "Forecast backend unavailable",
            Style::default().fg(theme.danger),
        ))],
        (None, _) => vec![Line::from(Span::styled(
            "Waiting for forecast...",
            Style::default().fg(theme.muted_text),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Titles the panel with the backend's fetch time when it sent one.
fn panel_title(report: Option<&LiveReport>) -> String {
    match report.and_then(|r| r.fetched_at) {
        Some(at) => format!(" Now, as of {} ", at.format("%H:%M")),
        None => " Now ".to_string(),
    }
}

fn snapshot_lines(report: &LiveReport, theme: &Theme) -> Vec<Line<'static>> {
    let current = &report.current;
    let mut lines = vec![
        metric("Temperature", format!("{:.1}°C", current.temp_c), theme),
        metric("Humidity", format!("{:.0}%", current.humidity), theme),
        metric("Wind", format!("{:.1} km/h", current.wind_speed), theme),
        metric("Pressure", format!("{:.0} hPa", current.pressure), theme),
        Line::default(),
        Line::from(Span::styled(
            "Pollutants",
            Style::default()
                .fg(theme.muted_text)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(
        current
            .components
            .labelled()
            .into_iter()
            .map(|(label, value)| metric(label, format!("{value:.1}"), theme)),
    );
    lines.push(Line::default());
    lines.push(predicted_line(report.predicted_aqi_3h, theme));
    lines
}

fn metric(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(theme.muted_text)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

fn predicted_line(predicted: Option<f64>, theme: &Theme) -> Line<'static> {
    let label = Span::styled(
        format!("{:<12}", "AQI in 3h"),
        Style::default().fg(theme.muted_text),
    );
    let Some(value) = predicted else {
        return Line::from(vec![
            label,
            Span::styled(UNAVAILABLE, Style::default().fg(theme.muted_text)),
        ]);
    };

    let category = classify(value);
    let color = category_text_color(category, theme.capability).unwrap_or(theme.text);
    Line::from(vec![
        label,
        Span::styled(
            format!("{}  {category}", format_aqi(value)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
