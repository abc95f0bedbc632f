use config::Config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    trip: Trip,
    gpsd: Gpsd,
    permission: Permission,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn gpsd(&self) -> &Gpsd {
        &self.gpsd
    }

    pub fn permission(&self) -> &Permission {
        &self.permission
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Trip {
    #[serde(with = "humantime_serde")]
    tick_period: Duration,
    location_update_ticks: u64,
}

impl Trip {
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    pub fn location_update_ticks(&self) -> u64 {
        self.location_update_ticks
    }
}

#[derive(Debug, Deserialize)]
pub struct Gpsd {
    host: String,
    port: u16,
    retry_ms: u64,
    retry_max_delay_ms: u64,
    #[serde(with = "humantime_serde")]
    fix_interval: Duration,
}

impl Gpsd {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }

    pub fn fix_interval(&self) -> Duration {
        self.fix_interval
    }
}

#[derive(Debug, Deserialize)]
pub struct Permission {
    granted: bool,
}

impl Permission {
    pub fn granted(&self) -> bool {
        self.granted
    }
}
