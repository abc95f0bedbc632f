use crate::domain::events::Event;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

/// Emits [`Event::Tick`] at a fixed period. There is exactly one tick chain
/// per ticker and [`Ticker::stop`] ends it explicitly.
#[derive(Debug)]
pub struct Ticker {
    stop_tx: watch::Sender<bool>,
}

impl Ticker {
    pub fn start(period: Duration, tx: Sender<Event>) -> Ticker {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        tokio::spawn(async move {
            loop {
                let next = Instant::now() + period;
                tokio::select! {
                    biased;
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            debug!("🕗 Tick chain stopped");
                            break;
                        }
                    }
                    _ = sleep_until(next) => {
                        if tx.send(Event::Tick).await.is_err() {
                            debug!("🕗 Store is gone, ending the tick chain");
                            break;
                        }
                    }
                }
            }
        });

        Ticker { stop_tx }
    }

    /// Ends the tick chain. Idempotent; calling it again is a no-op.
    pub fn stop(&self) {
        self.stop_tx.send(true).unwrap_or_default();
    }
}
