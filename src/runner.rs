//! Background evaluation loop.
//!
//! Spawns a tokio task that polls the notification collection on a fixed
//! interval, applies the trigger rules, persists changes, and emits fire
//! events to the presentation side over an mpsc channel.

use crate::engine;
use crate::popup::FireEvent;
use crate::store::Store;
use chrono::{Local, NaiveDateTime};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Seconds between evaluation passes.
pub const TICK_INTERVAL_SECS: u64 = 10;

/// Background checker that owns the store and drives the engine.
///
/// User mutations (add/edit/toggle/delete) and engine ticks are serialized
/// by construction: mutations go through the runner's store before
/// [`run`](Self::run) consumes it, and afterwards only the tick loop
/// touches the collection.
pub struct Runner {
    store: Store,
    fire_tx: mpsc::UnboundedSender<FireEvent>,
    tick_interval_secs: u64,
}

impl Runner {
    /// Create a runner around an opened store.
    pub fn new(store: Store, fire_tx: mpsc::UnboundedSender<FireEvent>) -> Self {
        Self {
            store,
            fire_tx,
            tick_interval_secs: TICK_INTERVAL_SECS,
        }
    }

    /// Override the polling cadence (mainly for tests).
    pub fn with_tick_interval(mut self, secs: u64) -> Self {
        self.tick_interval_secs = secs.max(1);
        self
    }

    /// Access the underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable access to the underlying store, for host-side edits before
    /// the loop starts.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Start the background loop.
    pub fn run(mut self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                "checker started with {} notifications, ticking every {}s",
                self.store.notifications().len(),
                self.tick_interval_secs
            );
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(self.tick_interval_secs));

            loop {
                interval.tick().await;
                if !self.tick() {
                    debug!("fire channel closed, stopping checker");
                    return;
                }
            }
        })
    }

    /// Execute one evaluation pass against the wall clock.
    ///
    /// Returns `false` when the fire channel is closed and the loop should
    /// stop.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Local::now().naive_local())
    }

    /// Execute one evaluation pass against an explicit instant.
    pub fn tick_at(&mut self, now: NaiveDateTime) -> bool {
        let report = engine::evaluate(now, self.store.notifications());

        if report.changed() {
            if let Err(e) = self.store.apply_tick(&report.updates) {
                // In-memory state stays authoritative; retried next tick.
                warn!("cannot persist tick result: {e}");
            }
        }

        for event in report.fired {
            if self.fire_tx.send(event).is_err() {
                return false;
            }
        }

        true
    }
}
