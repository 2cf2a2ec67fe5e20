use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::state::AppState, ui::theme::Theme};

pub const HELP: &str = "←/→ day  ↑/↓ week  PgUp/PgDn month  t today  n/p city  r refresh  q quit";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = match &state.last_error {
        Some(err) => Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(theme.danger)),
            Span::styled(err.clone(), Style::default().fg(theme.danger)),
        ]),
        None => Line::from(Span::styled(HELP, Style::default().fg(theme.muted_text))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
