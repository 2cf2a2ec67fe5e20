mod common;

use aqi_forecast::{
    app::state::AppState,
    ui::{
        self,
        theme::{ColorCapability, theme_for},
    },
};
use chrono::NaiveDate;
use common::{at_hour, cli, fixture_report, state_at};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

fn draw(width: u16, height: u16, state: &AppState, capability: ColorCapability) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    let theme = theme_for(capability);
    terminal
        .draw(|frame| ui::render(frame, state, &theme))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::new();
    for y in 0..area.height {
        let mut line = String::new();
        for x in 0..area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn ready_state(hour: u32) -> AppState {
    let cli = cli(&[]);
    let mut state = state_at(&cli, at_hour(hour));
    let generation = state.begin_fetch();
    state.handle_series_replaced(generation, fixture_report("Chennai"));
    state
}

fn has_background(buffer: &Buffer, color: Color) -> bool {
    buffer.content().iter().any(|cell| cell.bg == color)
}

#[test]
fn today_view_shows_categorized_window() {
    let state = ready_state(14);
    let text = to_text(&draw(100, 30, &state, ColorCapability::TrueColor));

    assert!(text.contains("Chennai"), "{text}");
    assert!(text.contains(" Today "), "{text}");
    assert!(text.contains("Next 3 hours"), "{text}");
    assert!(text.contains("15:00"), "{text}");
    assert!(text.contains("Moderate"), "{text}");
    assert!(text.contains("Unhealthy"), "{text}");
    assert!(text.contains("September 2025"), "{text}");
    assert!(text.contains("AQI in 3h"), "{text}");
    assert!(!text.contains("14:00"), "{text}");
    assert!(text.contains("updated just now"), "{text}");
}

#[tokio::test]
async fn header_keeps_shown_city_while_switch_is_pending() {
    let cli = cli(&["--api-url", "http://127.0.0.1:9"]);
    let mut state = state_at(&cli, at_hour(14));
    let generation = state.begin_fetch();
    state.handle_series_replaced(generation, fixture_report("Chennai"));
    let (tx, _rx) = tokio::sync::mpsc::channel(4);

    state.switch_location(1, &tx);
    assert!(state.fetch_in_flight);

    let text = to_text(&draw(100, 30, &state, ColorCapability::TrueColor));
    let header = text.lines().nth(1).expect("header row");
    assert!(header.contains("Chennai"), "{header}");
    assert!(header.contains("updating Delhi..."), "{header}");
    assert!(
        header.find("Chennai") < header.find("Delhi"),
        "shown city leads the header: {header}"
    );
}

#[test]
fn snapshot_title_carries_backend_fetch_time() {
    let cli = cli(&[]);
    let mut state = state_at(&cli, at_hour(14));
    let mut report = fixture_report("Chennai");
    report.fetched_at = Some(at_hour(8) + chrono::Duration::minutes(10));
    let generation = state.begin_fetch();
    state.handle_series_replaced(generation, report);

    let text = to_text(&draw(100, 30, &state, ColorCapability::TrueColor));
    assert!(text.contains("Now, as of 08:15"), "{text}");
}

#[test]
fn late_evening_has_no_near_term_forecast() {
    let state = ready_state(23);
    let text = to_text(&draw(100, 30, &state, ColorCapability::TrueColor));
    assert!(text.contains("No near-term forecast"), "{text}");
}

#[test]
fn date_outside_series_shows_unavailable() {
    let mut state = ready_state(14);
    state.handle_date_selected(NaiveDate::from_ymd_opt(2025, 11, 30).expect("date"));
    let text = to_text(&draw(100, 30, &state, ColorCapability::TrueColor));

    assert!(text.contains("Sun, 30 Nov 2025"), "{text}");
    assert!(text.contains("N/A"), "{text}");
    assert!(text.contains("November 2025"), "{text}");
}

#[test]
fn calendar_paints_category_backgrounds() {
    let state = ready_state(14);
    let buffer = draw(100, 30, &state, ColorCapability::TrueColor);

    assert!(has_background(&buffer, Color::Rgb(187, 247, 208)));
    assert!(has_background(&buffer, Color::Rgb(254, 240, 138)));
    assert!(has_background(&buffer, Color::Rgb(254, 202, 202)));
}

#[test]
fn monochrome_calendar_uses_markers_instead_of_color() {
    let state = ready_state(14);
    let buffer = draw(100, 30, &state, ColorCapability::Monochrome);
    let text = to_text(&buffer);

    assert!(!has_background(&buffer, Color::Rgb(254, 240, 138)));
    assert!(text.contains("26m"), "{text}");
    assert!(text.contains("m=Moderate"), "{text}");
}

#[test]
fn narrow_terminal_stacks_without_snapshot_panel() {
    let state = ready_state(14);
    let text = to_text(&draw(70, 24, &state, ColorCapability::Basic16));
    assert!(text.contains("Next 3 hours"), "{text}");
    assert!(!text.contains("AQI in 3h"), "{text}");
}

#[test]
fn tiny_terminal_shows_resize_hint() {
    let state = ready_state(14);
    let text = to_text(&draw(40, 12, &state, ColorCapability::TrueColor));
    assert!(text.contains("Terminal too small"), "{text}");
}

#[test]
fn loading_state_renders_placeholder() {
    let cli = cli(&[]);
    let mut state = state_at(&cli, at_hour(9));
    state.begin_fetch();
    let text = to_text(&draw(100, 30, &state, ColorCapability::TrueColor));
    assert!(text.contains("loading..."), "{text}");
    assert!(text.contains("Waiting for forecast..."), "{text}");
}
