use crate::app_config::AppConfig;
use crate::domain::events::Event;
use crate::gpsd::client::GpsdConfig;
use crate::gpsd::provider::GpsdProvider;
use crate::location::observer::{LocationCommand, observe};
use crate::permission::{StaticGate, TerminalPrompt, ensure_permission};
use crate::store::TripStore;
use crate::store_listener::{ConsoleSurface, store_listener};
use crate::ticker::Ticker;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tokio::sync::mpsc::Sender;
use tokio::sync::{mpsc, watch};
use tokio::task;
use tracing::info;

mod app_config;
mod domain;
mod extensions;
mod gpsd;
mod location;
mod permission;
mod store;
mod store_listener;
mod ticker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🧭 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let gate = StaticGate::new(config.permission().granted());
    let permission = ensure_permission(&gate, &TerminalPrompt).await;
    let (_permission_tx, permission_rx) = watch::channel(permission);
    info!("✅  Resolved location permission: {:?}", permission);

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let (location_tx, location_rx) = mpsc::channel::<LocationCommand>(4);

    let mut store = TripStore::new(rx, location_tx, config.trip().location_update_ticks());
    let notifier_rx = store.notifier();

    task::spawn(async move {
        store_listener(notifier_rx, Arc::new(ConsoleSurface)).await;
    });
    info!("✅  Initialized display listener");

    task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    let provider = Arc::new(GpsdProvider::new(GpsdConfig {
        host: config.gpsd().host().to_string(),
        port: config.gpsd().port(),
        retry_ms: config.gpsd().retry_ms(),
        retry_max_delay: config.gpsd().retry_max_delay(),
    }));
    let observer_tx = tx.clone();
    let fix_interval = config.gpsd().fix_interval();
    task::spawn(async move {
        observe(location_rx, observer_tx, provider, permission_rx, fix_interval).await;
    });
    info!("✅  Initialized location observer");

    let ticker = Ticker::start(config.trip().tick_period(), tx.clone());
    info!("🧭 {} is up and running", env!("CARGO_PKG_NAME"));

    toggle_loop(tx).await;

    ticker.stop();
    Ok(())
}

/// The trip button, terminal edition: every line on stdin toggles the trip.
async fn toggle_loop(tx: Sender<Event>) {
    info!("Press Enter to start or stop a trip, Ctrl-D to quit");

    let mut lines = BufReader::new(stdin()).lines();
    while let Ok(Some(_)) = lines.next_line().await {
        if tx.send(Event::TripToggled).await.is_err() {
            break;
        }
    }
}
