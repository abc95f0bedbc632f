use crate::domain::GeoFix;
use chrono::{DateTime, TimeDelta, Utc};

/// All mutable state of a trip. The store owns exactly one of these and every
/// mutation goes through it; timestamps are passed in rather than read from an
/// ambient clock.
#[derive(Debug)]
pub struct TripState {
    active: bool,
    start_time: DateTime<Utc>,
    current_time: DateTime<Utc>,
    total_distance: f64,
    previous_fix: Option<GeoFix>,
}

impl TripState {
    pub fn new(now: DateTime<Utc>) -> Self {
        TripState {
            active: false,
            start_time: now,
            current_time: now,
            total_distance: 0.0,
            previous_fix: None,
        }
    }

    /// Flips the trip on or off and returns the new state of the flag.
    /// Starting a trip resets the distance, the baseline fix, and the clock.
    pub fn toggle(&mut self, now: DateTime<Utc>) -> bool {
        self.active = !self.active;

        if self.active {
            self.previous_fix = None;
            self.total_distance = 0.0;
            self.start_time = now;
            self.current_time = now;
        }

        self.active
    }

    /// Advances the displayed clock. While no trip is active the clock stays
    /// frozen at the last value captured during the trip.
    pub fn record_tick(&mut self, now: DateTime<Utc>) {
        if self.active {
            self.current_time = now;
        }
    }

    /// Folds a fix into the running distance. The first fix after a trip
    /// start only establishes the baseline and contributes zero meters.
    pub fn apply_fix(&mut self, fix: GeoFix) {
        if let Some(previous) = &self.previous_fix {
            self.total_distance += fix.distance_to(previous);
        }

        self.previous_fix = Some(fix);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.current_time - self.start_time
    }

    /// Accumulated trip distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn previous_fix(&self) -> Option<&GeoFix> {
        self.previous_fix.as_ref()
    }
}
