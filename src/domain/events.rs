use crate::domain::GeoFix;

#[derive(Debug)]
pub enum Event {
    /// The user pressed the trip button.
    TripToggled,
    /// One firing of the fixed-period timer.
    Tick,
    /// A batch of fixes delivered by the location provider.
    FixesReceived(Vec<GeoFix>),
}
