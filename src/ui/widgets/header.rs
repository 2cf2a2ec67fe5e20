use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    resilience::freshness::FreshnessState,
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" AQI Forecast ")
        .border_style(Style::default().fg(theme.border));

    let shown = shown_location(state).unwrap_or("No location");

    let mut spans = vec![
        Span::styled(
            shown.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", Style::default()),
        Span::styled(
            state.now.format("%a %d %b %Y %H:%M:%S").to_string(),
            Style::default().fg(theme.text),
        ),
    ];

    if let Some(age) = state.data_age_minutes() {
        spans.push(Span::styled(
            format!("  {}", age_label(age)),
            Style::default().fg(theme.muted_text),
        ));
    }

    if let Some((text, color)) = status_badge(state, theme) {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// The city whose series are on screen; the selected one until the first report arrives.
fn shown_location(state: &AppState) -> Option<&str> {
    state
        .report
        .as_ref()
        .map(|report| report.location.name.as_str())
        .or_else(|| state.current_location().map(|loc| loc.name.as_str()))
}

fn age_label(minutes: i64) -> String {
    match minutes {
        i64::MIN..=0 => "updated just now".to_string(),
        1..=59 => format!("updated {minutes}m ago"),
        _ => format!("updated {}h {}m ago", minutes / 60, minutes % 60),
    }
}

fn status_badge(state: &AppState, theme: &Theme) -> Option<(String, Color)> {
    if state.mode == AppMode::Loading {
        return Some(("loading...".to_string(), theme.muted_text));
    }
    if state.fetch_in_flight {
        let pending = state.current_location().map(|loc| loc.name.as_str());
        return Some(match pending {
            Some(name)
                if shown_location(state).is_some_and(|shown| !shown.eq_ignore_ascii_case(name)) =>
            {
                (format!("updating {name}..."), theme.muted_text)
            }
            _ => ("updating...".to_string(), theme.muted_text),
        });
    }
    match state.refresh_meta.state {
        FreshnessState::Fresh => None,
        FreshnessState::Stale => Some(("⚠ stale".to_string(), theme.warning)),
        FreshnessState::Offline => Some(("⚠ offline".to_string(), theme.danger)),
    }
}

#[cfg(test)]
mod tests {
    use super::age_label;

    #[test]
    fn age_label_rolls_over_to_hours() {
        assert_eq!(age_label(0), "updated just now");
        assert_eq!(age_label(7), "updated 7m ago");
        assert_eq!(age_label(135), "updated 2h 15m ago");
    }
}
