//! Tick evaluation over the notification collection.
//!
//! The engine is stateless: it receives "now" and a snapshot of the full
//! collection, applies the per-record trigger rules, and returns a diff the
//! host applies to its authoritative store. Records are evaluated
//! independently; a malformed record is skipped and reported without
//! aborting the rest of the tick.

use crate::notification::{NotificationRecord, ScheduleError};
use crate::popup::FireEvent;
use chrono::NaiveDateTime;
use tracing::warn;

/// Result of evaluating one tick.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// One event per record that fired, in collection order.
    pub fired: Vec<FireEvent>,
    /// Index-keyed replacement records carrying the updated trigger
    /// bookkeeping, for the host to apply.
    pub updates: Vec<(usize, NotificationRecord)>,
    /// Records skipped because their schedule data could not be evaluated.
    pub skipped: Vec<(usize, ScheduleError)>,
}

impl TickReport {
    /// Returns `true` when the tick mutated any record and the collection
    /// should be persisted.
    pub fn changed(&self) -> bool {
        !self.updates.is_empty()
    }
}

/// Evaluate every record against `now`.
///
/// The engine is the sole writer of `last_triggered_at` and of a `once`
/// record's `active` flag; both mutations are returned in the report's
/// `updates` rather than applied in place.
pub fn evaluate(now: NaiveDateTime, records: &[NotificationRecord]) -> TickReport {
    let mut report = TickReport::default();

    for (index, record) in records.iter().enumerate() {
        if !record.active {
            continue;
        }

        match record.due_at(now) {
            Ok(false) => {}
            Ok(true) => {
                let mut updated = record.clone();
                updated.mark_fired(now);
                report.fired.push(FireEvent::from_record(record));
                report.updates.push((index, updated));
            }
            Err(e) => {
                warn!("skipping notification {index} ('{}'): {e}", record.title);
                report.skipped.push((index, e));
            }
        }
    }

    report
}
