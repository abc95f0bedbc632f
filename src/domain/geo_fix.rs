use chrono::{DateTime, Utc};
use geo::{HaversineDistance, Point};

/// A single coordinate sample reported by the location provider. Accuracy and
/// timestamp come along for the ride but the trip logic only reads the
/// coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl GeoFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoFix {
            latitude,
            longitude,
            accuracy: None,
            timestamp: None,
        }
    }

    /// Haversine distance to `other` in meters.
    pub fn distance_to(&self, other: &GeoFix) -> f64 {
        let from = Point::new(self.longitude, self.latitude);
        let to = Point::new(other.longitude, other.latitude);
        from.haversine_distance(&to)
    }
}
