//! Real mid-South venue coordinates for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Home base is Nashville; the
//! college and pro parks within ~200 km are drivable inside the default
//! three-hour radius, the Atlanta, St. Louis, and Arizona parks are not.

use scout_planner::events::Venue;

/// A named venue location.
#[derive(Debug, Clone)]
pub struct Spot {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Spot {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn venue(&self) -> Venue {
        Venue::new(self.name, self.lat, self.lng)
    }
}

/// Scout home base: Nashville, TN.
pub const HOME: (f64, f64) = (36.1627, -86.7816);

// ============================================================================
// Venues inside the default 3-hour radius
// ============================================================================

pub const FIRST_HORIZON_PARK: Spot = Spot::new("First Horizon Park", 36.1722, -86.7888);
pub const HAWKINS_FIELD: Spot = Spot::new("Hawkins Field", 36.1445, -86.8086);
pub const DUGAN_FIELD: Spot = Spot::new("Ken Dugan Field", 36.1043, -86.7986);
pub const REESE_SMITH_FIELD: Spot = Spot::new("Reese Smith Jr. Field", 35.8508, -86.3669);
pub const HAND_PARK: Spot = Spot::new("Raymond C. Hand Park", 36.5351, -87.3539);
pub const NICK_DENES_FIELD: Spot = Spot::new("Nick Denes Field", 36.9860, -86.4551);
pub const ATT_FIELD: Spot = Spot::new("AT&T Field", 35.0565, -85.3091);
pub const BRENTWOOD_HS: Spot = Spot::new("Brentwood High School", 36.0070, -86.7790);

// ============================================================================
// Venues beyond the default radius (fly-in territory)
// ============================================================================

pub const TRUIST_PARK: Spot = Spot::new("Truist Park", 33.8908, -84.4678);
pub const BUSCH_STADIUM: Spot = Spot::new("Busch Stadium", 38.6226, -90.1928);
pub const SURPRISE_STADIUM: Spot = Spot::new("Surprise Stadium", 33.6292, -112.3679);
