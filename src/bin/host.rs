//! Headless reminder host.
//!
//! Loads the persisted collection, runs the background checker, and renders
//! fired notifications to the log through the popup dedup guard. Graphical
//! shells replace the sink and dismiss popups on user action; here a logged
//! popup is dismissed immediately.

use nudge::popup::{ConsoleSink, PopupTracker, PresentationSink};
use nudge::runner::Runner;
use nudge::store::Store;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = Store::open_default();
    tracing::info!(
        "nudge-host starting with {} notifications from {}",
        store.notifications().len(),
        store.path().display()
    );

    let (fire_tx, mut fire_rx) = mpsc::unbounded_channel();
    let handle = Runner::new(store, fire_tx).run();

    let mut tracker = PopupTracker::new();
    let mut sink = ConsoleSink;
    while let Some(event) = fire_rx.recv().await {
        if tracker.should_present(&event.title) {
            sink.present(&event);
            tracker.dismiss(&event.title);
        }
    }

    handle.abort();
    tracing::info!("nudge-host shut down");
    Ok(())
}
