use crate::domain::GeoFix;
use crate::gpsd::protocol::{MODE_2D, TpvReport};

/// A TPV report only yields a fix when the daemon actually has one: a 2D or
/// 3D mode and both coordinates present. Anything else is skipped silently.
pub fn map_fix(report: TpvReport) -> Option<GeoFix> {
    if report.mode < MODE_2D {
        return None;
    }

    let (Some(latitude), Some(longitude)) = (report.lat, report.lon) else {
        return None;
    };

    let accuracy = match (report.epx, report.epy) {
        (Some(epx), Some(epy)) => Some(epx.max(epy)),
        _ => None,
    };

    Some(GeoFix {
        latitude,
        longitude,
        accuracy,
        timestamp: report.time,
    })
}
