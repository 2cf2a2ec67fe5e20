use chrono::Datelike;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::AppState,
    domain::{
        aqi::{AqiCategory, RenderVariant, render as render_token},
        view_model::CalendarDay,
    },
    ui::{
        layout::calendar_cell_width,
        theme::{ColorCapability, Theme, token_color},
    },
};

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.selected_date.format("%B %Y")))
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    let width = calendar_cell_width(inner.width);

    let weeks = state.calendar();
    let mut lines = Vec::with_capacity(weeks.len() + 2);
    lines.push(Line::from(
        WEEKDAYS
            .iter()
            .map(|day| {
                Span::styled(
                    pad_cell(day, width),
                    Style::default().fg(theme.muted_text),
                )
            })
            .collect::<Vec<_>>(),
    ));
    lines.extend(weeks.iter().map(|week| week_line(week, width, theme)));

    if usize::from(inner.height) > lines.len() {
        lines.push(legend_line(theme));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn week_line(week: &[Option<CalendarDay>], width: usize, theme: &Theme) -> Line<'static> {
    Line::from(
        week.iter()
            .map(|cell| match cell {
                Some(day) => day_span(day, width, theme),
                None => Span::raw(" ".repeat(width)),
            })
            .collect::<Vec<_>>(),
    )
}

fn day_span(day: &CalendarDay, width: usize, theme: &Theme) -> Span<'static> {
    let marker = if theme.capability == ColorCapability::Monochrome {
        day.category.map_or(' ', category_marker)
    } else {
        ' '
    };
    let text = format!("{:>w$}{marker}", day.date.day(), w = width.saturating_sub(1));

    let mut style = match token_color(day.color, theme.capability) {
        Some(bg) => Style::default().bg(bg).fg(theme.on_swatch),
        None => Style::default().fg(theme.text),
    };
    if day.today {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if day.selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

/// Single-letter stand-in for the background color when colors are disabled.
pub fn category_marker(category: AqiCategory) -> char {
    match category {
        AqiCategory::Good => 'g',
        AqiCategory::Moderate => 'm',
        AqiCategory::Unhealthy => 'u',
    }
}

fn legend_line(theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for category in AqiCategory::ALL {
        let swatch = token_color(
            render_token(category, RenderVariant::Background),
            theme.capability,
        );
        let style = swatch.map_or(Style::default().fg(theme.text), |bg| {
            Style::default().bg(bg).fg(theme.on_swatch)
        });
        let label = if swatch.is_some() {
            format!(" {} ", category.label())
        } else {
            format!(" {}={} ", category_marker(category), category.label())
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn pad_cell(text: &str, width: usize) -> String {
    format!("{:>w$} ", text, w = width.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_cell_right_aligns_with_trailing_gap() {
        assert_eq!(pad_cell("Mo", 5), "  Mo ");
        assert_eq!(pad_cell("Mo", 3), "Mo ");
    }

    #[test]
    fn markers_are_distinct() {
        let markers = AqiCategory::ALL.map(category_marker);
        assert_eq!(markers, ['g', 'm', 'u']);
    }
}
