use crate::domain::surface::{DisplaySurface, TripView};
use crate::store::TripSnapshot;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::{info, instrument};

/// Re-renders the display surface whenever the store publishes a new
/// snapshot.
#[instrument(skip_all)]
pub async fn store_listener(mut rx: Receiver<TripSnapshot>, surface: Arc<dyn DisplaySurface>) {
    while rx.changed().await.is_ok() {
        let snapshot: TripSnapshot = rx.borrow().clone();
        let view = TripView::new(snapshot.active, snapshot.elapsed, snapshot.total_distance);
        surface.render(&view);
    }
}

#[derive(Debug)]
pub struct ConsoleSurface;

impl DisplaySurface for ConsoleSurface {
    fn render(&self, view: &TripView) {
        info!("⏱ {}  📏 {}  [{}]", view.elapsed_time, view.distance, view.trip_button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tokio::sync::{mpsc, watch};
    use tokio::task;

    #[derive(Debug)]
    struct RecordingSurface {
        views: Mutex<Vec<TripView>>,
        rendered_tx: mpsc::Sender<()>,
    }

    impl DisplaySurface for RecordingSurface {
        fn render(&self, view: &TripView) {
            self.views.lock().unwrap().push(view.clone());
            self.rendered_tx.try_send(()).unwrap();
        }
    }

    #[tokio::test]
    async fn renders_every_published_snapshot() {
        let (tx, rx) = watch::channel(TripSnapshot::default());
        let (rendered_tx, mut rendered_rx) = mpsc::channel(8);
        let surface = Arc::new(RecordingSurface {
            views: Mutex::new(Vec::new()),
            rendered_tx,
        });

        let listener_surface = surface.clone();
        task::spawn(async move { store_listener(rx, listener_surface).await });

        tx.send(TripSnapshot {
            active: true,
            elapsed: TimeDelta::seconds(3),
            total_distance: 111.25,
        })
        .unwrap();
        rendered_rx.recv().await.unwrap();

        let views = surface.views.lock().unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(
            views[0],
            TripView {
                elapsed_time: "00:00:03".to_string(),
                distance: "111.25 metres".to_string(),
                trip_button: "stop_trip",
            }
        );
    }
}
