use crate::extensions::duration_ext::ToHms;
use chrono::TimeDelta;
use std::fmt::Debug;

pub const START_TRIP_LABEL: &str = "start_trip";
pub const STOP_TRIP_LABEL: &str = "stop_trip";

/// The rendered form of the trip state: two formatted strings and the label
/// for the two-state trip button, ready for a surface to draw.
#[derive(Clone, PartialEq, Debug)]
pub struct TripView {
    pub elapsed_time: String,
    pub distance: String,
    pub trip_button: &'static str,
}

impl TripView {
    pub fn new(active: bool, elapsed: TimeDelta, total_distance: f64) -> Self {
        TripView {
            elapsed_time: elapsed.to_hms(),
            distance: format!("{:.2} metres", total_distance),
            trip_button: if active { STOP_TRIP_LABEL } else { START_TRIP_LABEL },
        }
    }
}

pub trait DisplaySurface: Debug + Send + Sync {
    fn render(&self, view: &TripView);
}
