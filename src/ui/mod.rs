pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    ui::{
        layout::{BodyArrangement, MIN_HEIGHT, MIN_WIDTH, body_arrangement, fits},
        theme::Theme,
    },
};

const SUMMARY_HEIGHT: u16 = 6;
const CALENDAR_MIN_HEIGHT: u16 = 9;

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();

    if !fits(area.width, area.height) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("aqi-forecast"));
        frame.render_widget(warning, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(SUMMARY_HEIGHT + CALENDAR_MIN_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    widgets::header::render(frame, rows[0], state, theme);

    let view = state.view();
    let right = match body_arrangement(rows[1].width) {
        BodyArrangement::SideBySide => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(rows[1]);
            widgets::snapshot::render(frame, cols[0], state, theme);
            cols[1]
        }
        BodyArrangement::Stacked => rows[1],
    };

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Min(CALENDAR_MIN_HEIGHT),
        ])
        .split(right);
    widgets::summary::render(frame, stack[0], &view, theme);
    widgets::calendar::render(frame, stack[1], state, theme);

    widgets::footer::render(frame, rows[2], state, theme);
}
