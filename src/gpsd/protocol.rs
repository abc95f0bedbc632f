use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::ops::IndexMut;

/// Command that switches the daemon into watcher mode on the raw socket.
pub const WATCH_ENABLE: &str = "?WATCH={\"enable\":true,\"json\":true};\n";

pub const MODE_NO_FIX: u8 = 1;
pub const MODE_2D: u8 = 2;
pub const MODE_3D: u8 = 3;

/// One line of the daemon's newline-delimited JSON stream, tagged by class.
#[derive(Debug, Deserialize)]
#[serde(tag = "class", rename_all = "UPPERCASE")]
pub enum Report {
    Version(VersionReport),
    Watch(WatchReport),
    Tpv(TpvReport),
    #[serde(untagged)]
    Unknown(UnknownReport),
}

#[derive(Debug, Deserialize)]
pub struct VersionReport {
    pub release: String,
    pub proto_major: u8,
    pub proto_minor: u8,
}

#[derive(Debug, Deserialize)]
pub struct WatchReport {
    pub enable: Option<bool>,
    pub json: Option<bool>,
}

/// A time-position-velocity report. Every field except `mode` is optional;
/// the daemon only sends what it knows.
#[derive(Debug, Deserialize)]
pub struct TpvReport {
    pub device: Option<String>,
    pub mode: u8,
    pub time: Option<DateTime<Utc>>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub alt: Option<f64>,
    pub epx: Option<f64>,
    pub epy: Option<f64>,
    pub speed: Option<f64>,
}

#[derive(Debug)]
pub struct UnknownReport {
    pub class: String,
}

impl<'de> Deserialize<'de> for UnknownReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;
        match value.index_mut("class").take() {
            Value::String(class) => Ok(UnknownReport { class }),
            _ => Err(serde::de::Error::missing_field("class")),
        }
    }
}
