use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    domain::{
        aqi::format_aqi,
        view_model::{CategorizedHour, DailyReading, DateSummary, ForecastView},
    },
    ui::theme::{Theme, token_color},
};

pub const UNAVAILABLE: &str = "N/A";

pub fn render(frame: &mut Frame, area: Rect, view: &ForecastView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.summary_label))
        .border_style(Style::default().fg(theme.border));

    let lines = match &view.summary {
        DateSummary::Today { window } => window_lines(window, theme),
        DateSummary::OtherDate { reading, .. } => vec![daily_line(reading, theme)],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn window_lines(window: &[CategorizedHour], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Next 3 hours",
        Style::default().fg(theme.muted_text),
    ))];
    if window.is_empty() {
        lines.push(Line::from(Span::styled(
            "No near-term forecast",
            Style::default().fg(theme.muted_text),
        )));
        return lines;
    }

    lines.extend(window.iter().map(|hour| {
        let color = token_color(hour.color, theme.capability).unwrap_or(theme.text);
        Line::from(vec![
            Span::styled(
                format!("{}  ", hour.time.format("%H:%M")),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{:>6}  ", format_aqi(hour.predicted_aqi)),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                hour.category.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    }));
    lines
}

fn daily_line(reading: &DailyReading, theme: &Theme) -> Line<'static> {
    let label = Span::styled("Predicted AQI  ", Style::default().fg(theme.muted_text));
    match reading {
        DailyReading::Available {
            predicted_aqi,
            category,
            color,
        } => {
            let color = token_color(*color, theme.capability).unwrap_or(theme.text);
            Line::from(vec![
                label,
                Span::styled(
                    format!("{}  ", format_aqi(*predicted_aqi)),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    category.label(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        }
        DailyReading::Unavailable => Line::from(vec![
            label,
            Span::styled(UNAVAILABLE, Style::default().fg(theme.muted_text)),
        ]),
    }
}
