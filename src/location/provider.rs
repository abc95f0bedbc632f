use crate::domain::GeoFix;
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::Receiver;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accuracy {
    High,
    Coarse,
}

/// A live stream of fix batches. Dropping the subscription unsubscribes from
/// the provider.
#[derive(Debug)]
pub struct FixSubscription {
    rx: Receiver<Vec<GeoFix>>,
}

impl FixSubscription {
    pub fn new(rx: Receiver<Vec<GeoFix>>) -> Self {
        FixSubscription { rx }
    }

    /// The next batch of fixes, or `None` when the stream ended.
    pub async fn next_batch(&mut self) -> Option<Vec<GeoFix>> {
        self.rx.recv().await
    }
}

#[async_trait]
pub trait LocationProvider: Debug + Send + Sync {
    /// Subscribes to fix updates at the given interval and accuracy.
    async fn subscribe(&self, interval: Duration, accuracy: Accuracy) -> Result<FixSubscription, LocationError>;
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("location provider unavailable: {0}")]
    Unavailable(String),
}
