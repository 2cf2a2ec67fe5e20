use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, local_now, local_to_utc, start_clock_task, start_refresh_task},
        settings::{RuntimeSettings, load_runtime_settings, save_runtime_settings},
    },
    cli::Cli,
    data::live::LiveClient,
    domain::{
        forecast::{LiveReport, Location, RefreshMetadata},
        view_model::{CalendarDay, ForecastView, Selection, calendar_month, evaluate},
    },
    resilience::freshness::evaluate_freshness,
};

mod input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

/// Mutable inputs of the dashboard.
///
/// Only the named handlers below change these fields; everything shown on
/// screen is recomputed from them through [`AppState::view`].
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub last_error: Option<String>,
    pub report: Option<LiveReport>,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub location_index: usize,
    pub selected_date: NaiveDate,
    pub now: NaiveDateTime,
    pub refresh_meta: RefreshMetadata,
    pub fetch_generation: u64,
    pub fetch_in_flight: bool,
    api_url: String,
}

impl AppState {
    pub fn new(
        cli: &Cli,
        settings: RuntimeSettings,
        location_index: usize,
        now: NaiveDateTime,
    ) -> Self {
        let location_index = location_index.min(settings.locations.len().saturating_sub(1));
        Self {
            mode: AppMode::Loading,
            running: true,
            last_error: None,
            report: None,
            settings,
            settings_path: None,
            location_index,
            selected_date: cli.date.unwrap_or_else(|| now.date()),
            now,
            refresh_meta: RefreshMetadata::default(),
            fetch_generation: 0,
            fetch_in_flight: false,
            api_url: cli.api_url.clone(),
        }
    }

    /// Builds the state from persisted settings plus CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        cli.validate()?;
        let (settings, index, path) = load_runtime_settings(cli, true)?;
        let mut state = Self::new(cli, settings, index, local_now());
        state.settings_path = path;
        Ok(state)
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.settings.locations.get(self.location_index)
    }

    pub fn selection(&self) -> Selection {
        Selection {
            selected_date: self.selected_date,
            now: self.now,
        }
    }

    pub fn view(&self) -> ForecastView {
        let (daily, hourly) = match &self.report {
            Some(report) => (report.daily.as_slice(), report.hourly.as_slice()),
            None => (&[][..], &[][..]),
        };
        evaluate(daily, hourly, self.selection())
    }

    pub fn calendar(&self) -> Vec<Vec<Option<CalendarDay>>> {
        let daily = self.report.as_ref().map_or(&[][..], |r| r.daily.as_slice());
        calendar_month(daily, self.selection())
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_clock_task(tx.clone());
                start_refresh_task(tx.clone(), self.settings.refresh_interval_secs);
                self.start_fetch(tx);
            }
            AppEvent::TickClock(now) => self.handle_clock_tick(now),
            AppEvent::TickRefresh => {
                if !self.fetch_in_flight {
                    self.start_fetch(tx);
                }
            }
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::FetchSucceeded { generation, report } => {
                self.handle_series_replaced(generation, *report);
            }
            AppEvent::FetchFailed { generation, error } => {
                self.handle_fetch_failed(generation, error);
            }
            AppEvent::Quit => self.mode = AppMode::Quit,
        }
        Ok(())
    }

    pub fn handle_clock_tick(&mut self, now: NaiveDateTime) {
        self.now = now;
        self.update_freshness();
    }

    /// Minutes since the shown series arrived, by the dashboard clock.
    pub fn data_age_minutes(&self) -> Option<i64> {
        self.refresh_meta.age_minutes(local_to_utc(self.now))
    }

    fn update_freshness(&mut self) {
        self.refresh_meta.state = evaluate_freshness(
            self.refresh_meta.last_success,
            self.refresh_meta.consecutive_failures,
            local_to_utc(self.now),
            self.settings.refresh_interval_secs,
        );
    }

    /// Applies a fetch result unless a newer fetch has been issued since.
    pub fn handle_series_replaced(&mut self, generation: u64, report: LiveReport) -> bool {
        if generation != self.fetch_generation {
            tracing::warn!(
                generation,
                latest = self.fetch_generation,
                "dropping stale forecast response"
            );
            return false;
        }
        tracing::info!(
            city = %report.location.name,
            daily = report.daily.len(),
            hourly = report.hourly.len(),
            "forecast series replaced"
        );
        self.fetch_in_flight = false;
        self.report = Some(report);
        self.mode = AppMode::Ready;
        self.last_error = None;
        self.refresh_meta.mark_success(local_to_utc(self.now));
        true
    }

    /// Records a failed fetch; the previous series stay on screen.
    pub fn handle_fetch_failed(&mut self, generation: u64, error: String) -> bool {
        if generation != self.fetch_generation {
            tracing::debug!(generation, "ignoring failure of superseded fetch");
            return false;
        }
        tracing::warn!(error = %error, "forecast fetch failed");
        self.fetch_in_flight = false;
        self.last_error = Some(error);
        if self.report.is_none() {
            self.mode = AppMode::Error;
        }
        self.refresh_meta.mark_failure();
        self.update_freshness();
        true
    }

    pub fn handle_date_selected(&mut self, date: NaiveDate) {
        tracing::debug!(%date, "date selected");
        self.selected_date = date;
    }

    /// Issues a new fetch generation; results of older generations are ignored.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        self.fetch_in_flight = true;
        if self.report.is_none() {
            self.mode = AppMode::Loading;
        }
        self.fetch_generation
    }

    pub fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let Some(location) = self.current_location().cloned() else {
            return;
        };
        let generation = self.begin_fetch();
        let api_url = self.api_url.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let result = match LiveClient::new(api_url) {
                Ok(client) => client.fetch(&location).await,
                Err(err) => Err(err),
            };
            let event = match result {
                Ok(report) => AppEvent::FetchSucceeded {
                    generation,
                    report: Box::new(report),
                },
                Err(err) => AppEvent::FetchFailed {
                    generation,
                    error: err.to_string(),
                },
            };
            let _ = tx2.send(event).await;
        });
    }

    /// Moves to the next (`delta > 0`) or previous saved location and refetches.
    pub fn switch_location(&mut self, delta: isize, tx: &mpsc::Sender<AppEvent>) {
        let count = self.settings.locations.len();
        if count < 2 {
            return;
        }
        let count_i = isize::try_from(count).unwrap_or(isize::MAX);
        let current = isize::try_from(self.location_index).unwrap_or(0);
        self.location_index = usize::try_from((current + delta).rem_euclid(count_i)).unwrap_or(0);
        self.settings.last_location = self.current_location().map(|loc| loc.name.clone());
        self.persist_settings();
        self.start_fetch(tx);
    }

    fn persist_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(err) = save_runtime_settings(path, &self.settings) {
            tracing::warn!(error = %err, "failed to persist settings");
        }
    }
}
