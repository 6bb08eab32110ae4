//! scout-planner core
//!
//! Builds multi-day road-trip itineraries, fly-in candidates, and an
//! unreachable report covering a roster of athletes, maximizing
//! tier-weighted visit value within a configurable drive radius. Pure
//! computation over pre-resolved roster and schedule data; collaborators do
//! all I/O up front.

pub mod traits;
pub mod haversine;
pub mod calendar;
pub mod roster;
pub mod events;
pub mod candidates;
pub mod selection;
pub mod flyin;
pub mod planner;
pub mod routing;
