use crate::domain::PermissionState;
use crate::domain::events::Event;
use crate::location::provider::{Accuracy, LocationProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

#[derive(Debug)]
pub enum LocationCommand {
    /// Ask the provider for a fresh fix.
    RequestFix,
}

/// Turns fix-request commands into single-shot provider subscriptions: each
/// request subscribes, waits for the first non-empty batch, forwards it as an
/// [`Event::FixesReceived`], and unsubscribes. At most one request is
/// outstanding at a time; commands arriving in the meantime are dropped, as
/// are commands while permission is not granted.
#[instrument(skip_all)]
pub async fn observe(
    mut rx: Receiver<LocationCommand>,
    tx: Sender<Event>,
    provider: Arc<dyn LocationProvider>,
    permission_rx: watch::Receiver<PermissionState>,
    fix_interval: Duration,
) {
    while let Some(LocationCommand::RequestFix) = rx.recv().await {
        if !permission_rx.borrow().is_granted() {
            debug!("📡 Fix request dropped, location permission not granted");
            continue;
        }

        let mut subscription = match provider.subscribe(fix_interval, Accuracy::High).await {
            Ok(subscription) => subscription,
            Err(e) => {
                warn!("⚠️ Could not subscribe for a fix: {}", e);
                continue;
            }
        };

        loop {
            tokio::select! {
                command = rx.recv() => match command {
                    None => return,
                    Some(LocationCommand::RequestFix) => {
                        debug!("📡 Fix request dropped, one is already outstanding");
                    }
                },
                batch = subscription.next_batch() => match batch {
                    Some(fixes) if !fixes.is_empty() => {
                        debug!("📡 Received {} fix(es)", fixes.len());
                        if tx.send(Event::FixesReceived(fixes)).await.is_err() {
                            return;
                        }
                        break;
                    }
                    Some(_) => {}
                    None => {
                        warn!("🔴 Fix stream ended before a fix arrived");
                        break;
                    }
                },
            }
        }
        // Dropping the subscription here is the unsubscribe.
    }
}
