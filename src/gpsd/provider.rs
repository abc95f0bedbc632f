use crate::domain::GeoFix;
use crate::gpsd::client;
use crate::gpsd::client::GpsdConfig;
use crate::gpsd::map_fix::map_fix;
use crate::gpsd::protocol::{Report, WATCH_ENABLE};
use crate::location::provider::{Accuracy, FixSubscription, LocationError, LocationProvider};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, error, instrument, warn};

/// Location provider backed by a gpsd daemon. Each subscription is one watch
/// connection; dropping the subscription closes it. The daemon streams
/// reports at its own cadence, so the requested interval and accuracy are
/// advisory.
#[derive(Debug)]
pub struct GpsdProvider {
    config: GpsdConfig,
}

impl GpsdProvider {
    pub fn new(config: GpsdConfig) -> Self {
        GpsdProvider { config }
    }
}

#[async_trait]
impl LocationProvider for GpsdProvider {
    async fn subscribe(&self, _interval: Duration, _accuracy: Accuracy) -> Result<FixSubscription, LocationError> {
        let stream = client::connect(&self.config)
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(async move { watch_stream(stream, tx).await });

        Ok(FixSubscription::new(rx))
    }
}

#[instrument(skip_all)]
async fn watch_stream(stream: TcpStream, tx: mpsc::Sender<Vec<GeoFix>>) {
    let (reader, mut writer) = stream.into_split();

    if let Err(e) = writer.write_all(WATCH_ENABLE.as_bytes()).await {
        warn!("⚠️ Could not enable the gpsd watch: {}", e);
        return;
    }

    let mut lines = BufReader::new(reader).lines();
    loop {
        tokio::select! {
            _ = tx.closed() => {
                debug!("📡 Fix subscription dropped, closing the gpsd connection");
                return;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    let batch = parse_line(&line);
                    if !batch.is_empty() && tx.send(batch).await.is_err() {
                        return;
                    }
                }
                Ok(None) => {
                    warn!("🔴 gpsd stream ended");
                    return;
                }
                Err(e) => {
                    error!("❌ gpsd stream error: {}", e);
                    return;
                }
            },
        }
    }
}

fn parse_line(line: &str) -> Vec<GeoFix> {
    match serde_json::from_str::<Report>(line) {
        Ok(Report::Tpv(tpv)) => map_fix(tpv).into_iter().collect(),
        Ok(Report::Version(version)) => {
            debug!("📡 gpsd release {}", version.release);
            Vec::new()
        }
        Ok(Report::Watch(_)) => {
            debug!("📡 gpsd watch enabled");
            Vec::new()
        }
        Ok(Report::Unknown(report)) => {
            debug!("📡 Ignoring gpsd report '{}'", report.class);
            Vec::new()
        }
        Err(e) => {
            warn!("⚠️ Could not parse gpsd report: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;
    use tokio::time::timeout;

    const RESPONSES: &str = concat!(
        r#"{"class":"VERSION","release":"3.25","rev":"3.25","proto_major":3,"proto_minor":14}"#,
        "\n",
        r#"{"class":"WATCH","enable":true,"json":true}"#,
        "\n",
        r#"{"class":"SKY","device":"/dev/ttyUSB0","satellites":[]}"#,
        "\n",
        r#"{"class":"TPV","device":"/dev/ttyUSB0","mode":1}"#,
        "\n",
        r#"{"class":"TPV","device":"/dev/ttyUSB0","mode":3,"lat":46.498293369,"lon":7.567411672,"epx":36.0,"epy":17.9}"#,
        "\n",
    );

    async fn scripted_daemon() -> (u16, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut command = vec![0u8; WATCH_ENABLE.len()];
            socket.read_exact(&mut command).await.unwrap();
            socket.write_all(RESPONSES.as_bytes()).await.unwrap();

            // Served until the subscriber hangs up.
            let mut rest = Vec::new();
            socket.read_to_end(&mut rest).await.unwrap();
            String::from_utf8(command).unwrap()
        });

        (port, handle)
    }

    fn config(port: u16) -> GpsdConfig {
        GpsdConfig {
            host: "127.0.0.1".to_string(),
            port,
            retry_ms: 1,
            retry_max_delay: Duration::from_millis(10),
        }
    }

    #[tokio::test]
    async fn streams_only_real_fixes_and_unsubscribes_on_drop() {
        let (port, daemon) = scripted_daemon().await;
        let provider = GpsdProvider::new(config(port));

        let mut subscription = provider.subscribe(Duration::from_secs(1), Accuracy::High).await.unwrap();
        let batch = timeout(Duration::from_secs(1), subscription.next_batch()).await.unwrap().unwrap();

        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].latitude, 46.498293369);
        assert_eq!(batch[0].longitude, 7.567411672);
        assert_eq!(batch[0].accuracy, Some(36.0));

        // Dropping the subscription closes the daemon connection.
        drop(subscription);
        let command = timeout(Duration::from_secs(1), daemon).await.unwrap().unwrap();
        assert_eq!(command, WATCH_ENABLE);
    }

    #[tokio::test]
    async fn subscribing_without_a_daemon_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let provider = GpsdProvider::new(config(port));
        let result = provider.subscribe(Duration::from_secs(1), Accuracy::High).await;

        assert!(matches!(result, Err(LocationError::Unavailable(_))));
    }
}
