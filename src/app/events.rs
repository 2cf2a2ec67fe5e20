use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rand::Rng;
use tokio::{
    sync::mpsc::Sender,
    time::{MissedTickBehavior, interval, sleep},
};

use crate::{cli::MIN_REFRESH_SECS, domain::forecast::LiveReport};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickClock(NaiveDateTime),
    TickRefresh,
    Input(Event),
    FetchSucceeded {
        generation: u64,
        report: Box<LiveReport>,
    },
    FetchFailed {
        generation: u64,
        error: String,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Wall-clock time in the local zone, the reference for "today".
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Converts a local wall-clock reading to UTC. A time skipped by a DST jump
/// is read as UTC.
pub fn local_to_utc(now: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&now)
        .earliest()
        .map_or_else(|| now.and_utc(), |local| local.with_timezone(&Utc))
}

pub fn start_clock_task(tx: Sender<AppEvent>) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickClock(local_now())).await.is_err() {
                break;
            }
        }
    });
}

pub fn start_refresh_task(tx: Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let base = refresh_secs.max(MIN_REFRESH_SECS);
        loop {
            sleep(Duration::from_secs_f32(jittered_secs(base))).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}

fn jittered_secs(base: u64) -> f32 {
    let mut rng = rand::rng();
    let jitter = rng.random_range(-0.1f32..0.1f32);
    ((base as f32) * (1.0 + jitter)).max(1.0)
}
