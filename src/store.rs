use crate::domain::events::Event;
use crate::domain::trip::TripState;
use crate::location::observer::LocationCommand;
use chrono::{TimeDelta, Utc};
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

/// The value broadcast to display listeners after every state change.
#[derive(Clone, PartialEq, Debug)]
pub struct TripSnapshot {
    pub active: bool,
    pub elapsed: TimeDelta,
    pub total_distance: f64,
}

impl Default for TripSnapshot {
    fn default() -> Self {
        TripSnapshot {
            active: false,
            elapsed: TimeDelta::zero(),
            total_distance: 0.0,
        }
    }
}

/// Owns the trip state and the tick counter. Every stimulus arrives as an
/// [`Event`] on one channel, so mutations are serialized without locks.
#[derive(Debug)]
pub struct TripStore {
    state: TripState,
    ticks: u64,
    location_update_ticks: u64,
    rx: Receiver<Event>,
    location_tx: Sender<LocationCommand>,
    notifier_tx: WatchSender<TripSnapshot>,
    notifier_rx: WatchReceiver<TripSnapshot>,
}

impl TripStore {
    pub fn new(rx: Receiver<Event>, location_tx: Sender<LocationCommand>, location_update_ticks: u64) -> Self {
        let (notifier_tx, notifier_rx) = watch::channel(TripSnapshot::default());

        TripStore {
            state: TripState::new(Utc::now()),
            ticks: 0,
            location_update_ticks,
            rx,
            location_tx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<TripSnapshot> {
        self.notifier_rx.clone()
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            match event {
                Event::TripToggled => {
                    if self.state.toggle(Utc::now()) {
                        info!("🧭 Trip started");
                        self.request_fix().await;
                    } else {
                        info!("🧭 Trip stopped after {:.2} metres", self.state.total_distance());
                    }
                }
                Event::Tick => {
                    self.ticks += 1;
                    self.state.record_tick(Utc::now());

                    if self.state.is_active() && self.ticks % self.location_update_ticks == 0 {
                        self.request_fix().await;
                    }
                }
                Event::FixesReceived(fixes) => {
                    for fix in fixes {
                        self.state.apply_fix(fix);
                    }
                }
            }

            self.publish();
        }
    }

    async fn request_fix(&self) {
        if let Err(e) = self.location_tx.send(LocationCommand::RequestFix).await {
            warn!("⚠️ Could not request a location fix: {}", e);
        }
    }

    fn publish(&self) {
        let snapshot = TripSnapshot {
            active: self.state.is_active(),
            elapsed: self.state.elapsed(),
            total_distance: self.state.total_distance(),
        };

        self.notifier_tx.send(snapshot).unwrap_or_default();
    }
}
