//! Nudge: desktop reminder scheduling core.
//!
//! Users define notifications with a schedule (one-off, daily, or every N
//! minutes); a background checker fires popup events when due and persists
//! state to a local JSON file.
//!
//! # Architecture
//!
//! The core is built from small pieces wired together by the host shell:
//! - **Records**: [`NotificationRecord`] holds one reminder and its trigger
//!   history; per-record rules decide whether it fires at a given instant
//! - **Engine**: [`engine::evaluate`] takes a snapshot of the collection and
//!   returns a diff of fired and updated records
//! - **Runner**: [`Runner`] drives the engine on a fixed interval and emits
//!   [`FireEvent`]s over an mpsc channel
//! - **Store**: [`Store`] persists the collection and settings as one JSON
//!   document, falling back to defaults on missing or corrupt state
//! - **Popups**: [`PopupTracker`] suppresses fires whose title is already on
//!   screen; the shell implements [`PresentationSink`] to render them

pub mod app_dirs;
pub mod config;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod notification;
pub mod platform;
pub mod popup;
pub mod runner;
pub mod store;

pub use config::{Language, Settings, Theme};
pub use engine::{TickReport, evaluate};
pub use error::{NudgeError, Result};
pub use notification::{Frequency, NotificationRecord, Severity, validate_title};
pub use popup::{FireEvent, PopupTracker, PresentationSink};
pub use runner::Runner;
pub use store::Store;
