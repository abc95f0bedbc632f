pub mod events;
mod geo_fix;
mod permission;
pub mod surface;
pub mod trip;

pub use geo_fix::GeoFix;
pub use permission::{PermissionDecision, PermissionState};
