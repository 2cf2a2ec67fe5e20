pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;
pub mod report;
pub mod resilience;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::{
    events::{AppEvent, local_now, spawn_input_task},
    settings::load_runtime_settings,
    state::{AppMode, AppState},
};
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::live::LiveClient;
use domain::view_model::{Selection, evaluate};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use ui::theme::{detect_color_capability, theme_for};

pub async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }
    let app = AppState::load(&cli)?;

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, app, &cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: AppState,
    cli: &Cli,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let theme = theme_for(detect_color_capability(cli.effective_color_mode()));

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app, &theme))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

/// Fetches once, prints the evaluation for the selected date and exits.
pub async fn run_one_shot(cli: Cli) -> Result<()> {
    if let Err(err) = logging::init_stderr_logging() {
        eprintln!("{err}");
    }
    cli.validate()?;
    let (settings, index, _) = load_runtime_settings(&cli, true)?;
    let location = settings
        .locations
        .get(index)
        .cloned()
        .context("no location configured")?;

    let client = LiveClient::new(cli.api_url.clone())?;
    let report = client
        .fetch(&location)
        .await
        .with_context(|| format!("fetching forecast for {}", location.name))?;

    let now = local_now();
    let selection = Selection {
        selected_date: cli.date.unwrap_or_else(|| now.date()),
        now,
    };
    let view = evaluate(&report.daily, &report.hourly, selection);
    println!("{}", report::render_report(&report, &view));
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
