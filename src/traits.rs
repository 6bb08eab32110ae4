//! Core seam traits for the trip planner.
//!
//! The engine is pure computation over pre-resolved data; these traits are
//! the two places a caller can swap in its own machinery: drive-time
//! estimation and organization-name resolution.

use crate::events::Venue;

/// Estimates point-to-point drive time.
pub trait DriveTimeEstimator {
    /// Estimated one-way drive time in minutes between two (lat, lng) points.
    fn drive_minutes(&self, from: (f64, f64), to: (f64, f64)) -> i32;
}

/// Resolves a free-text organization name (team, school) to a canonical venue.
///
/// Returning `None` means the organization is unknown to the resolver; the
/// synthetic generators then emit no events for that athlete.
pub trait VenueResolver {
    fn resolve(&self, raw_name: &str) -> Option<Venue>;
}
