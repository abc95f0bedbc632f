use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

const CONNECT_ATTEMPTS: usize = 5;

#[derive(Clone, Debug)]
pub struct GpsdConfig {
    pub host: String,
    pub port: u16,
    pub retry_ms: u64,
    pub retry_max_delay: Duration,
}

/// Opens a connection to the daemon, retrying with exponential backoff.
pub async fn connect(config: &GpsdConfig) -> Result<TcpStream, GpsdClientError> {
    let strategy = ExponentialBackoff::from_millis(config.retry_ms)
        .factor(2)
        .max_delay(config.retry_max_delay)
        .map(jitter)
        .take(CONNECT_ATTEMPTS);

    let address = format!("{}:{}", config.host, config.port);
    info!("Connecting to gpsd at {}...", address);
    let stream = Retry::spawn(strategy, || async {
        match TcpStream::connect(&address).await {
            Ok(stream) => Ok(stream),
            Err(e) => {
                warn!("⚠️ Connecting to gpsd failed: {}. Retrying...", e);
                Err(e)
            }
        }
    })
    .await?;
    info!("Connecting to gpsd at {}... OK", address);

    Ok(stream)
}

#[derive(Error, Debug)]
pub enum GpsdClientError {
    #[error("could not connect to gpsd: {0}")]
    Connect(#[from] std::io::Error),
}
