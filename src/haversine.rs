//! Closed-form travel estimators (drive and fly-in).
//!
//! Uses great-circle distance with a fixed detour factor to estimate drive
//! time. Less accurate than a routing service (ignores roads) but needs no
//! external calls, which matters when every event pair in a season gets
//! scored.

use crate::traits::DriveTimeEstimator;

/// Average road speed assumption for drive-time estimation.
const DEFAULT_SPEED_KMH: f64 = 90.0;

/// Road-distance inflation over the great-circle line.
const DEFAULT_DETOUR_FACTOR: f64 = 1.3;

/// Assumed cruise speed for fly-in estimates.
const CRUISE_SPEED_KMH: f64 = 800.0;

/// Fixed airport plus rental-car overhead on both ends of a flight, hours.
const FLIGHT_OVERHEAD_HOURS: f64 = 3.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Estimated door-to-door travel hours for a fly-in visit, one decimal.
pub fn flight_hours(distance_km: f64) -> f64 {
    let hours = distance_km / CRUISE_SPEED_KMH + FLIGHT_OVERHEAD_HOURS;
    (hours * 10.0).round() / 10.0
}

/// Closed-form drive-time estimator.
///
/// Estimates drive time from straight-line distance, a detour factor, and
/// an assumed average speed. The default estimator for candidate
/// generation; see [`crate::routing`] for the road-network alternative.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Assumed average road speed in km/h.
    pub speed_kmh: f64,
    /// Multiplier applied to the great-circle distance.
    pub detour_factor: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            detour_factor: DEFAULT_DETOUR_FACTOR,
        }
    }
}

impl HaversineEstimator {
    pub fn new(speed_kmh: f64, detour_factor: f64) -> Self {
        Self {
            speed_kmh,
            detour_factor,
        }
    }
}

impl DriveTimeEstimator for HaversineEstimator {
    fn drive_minutes(&self, from: (f64, f64), to: (f64, f64)) -> i32 {
        let road_km = haversine_km(from, to) * self.detour_factor;
        (road_km / self.speed_kmh * 60.0).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_km((36.1627, -86.7816), (36.1627, -86.7816));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Nashville (36.16, -86.78) to Atlanta (33.89, -84.47)
        // Actual great-circle distance ~330 km
        let dist = haversine_km((36.1627, -86.7816), (33.8908, -84.4678));
        assert!(
            dist > 300.0 && dist < 360.0,
            "Nashville to Atlanta should be ~330km, got {}",
            dist
        );
    }

    #[test]
    fn test_drive_minutes_symmetric() {
        let estimator = HaversineEstimator::default();
        let a = (36.1627, -86.7816);
        let b = (35.0565, -85.3091);
        assert_eq!(
            estimator.drive_minutes(a, b),
            estimator.drive_minutes(b, a),
            "Haversine drive estimate should be symmetric"
        );
    }

    #[test]
    fn test_drive_minutes_formula() {
        // 90 km great-circle at defaults: 90 * 1.3 / 90 km/h = 1.3h = 78 min.
        // Use a pure north-south pair so distance is easy to pin down:
        // 0.8 degrees latitude ~ 89.0 km.
        let estimator = HaversineEstimator::default();
        let minutes = estimator.drive_minutes((36.0, -86.0), (36.8, -86.0));
        assert!(
            (76..=79).contains(&minutes),
            "0.8 deg latitude should estimate ~77 min, got {}",
            minutes
        );
    }

    #[test]
    fn test_flight_hours_formula() {
        // 2000 km at 800 km/h plus 3h overhead = 5.5h.
        assert_eq!(flight_hours(2000.0), 5.5);
    }

    #[test]
    fn test_flight_hours_one_decimal() {
        // 1234 km -> 1.5425 + 3 = 4.5425 -> 4.5
        assert_eq!(flight_hours(1234.0), 4.5);
    }
}
