//! Test fixtures for scout-planner.
//!
//! Provides realistic test data: real mid-South venue coordinates (from
//! OpenStreetMap) around a Nashville home base.

pub mod midsouth_venues;

pub use midsouth_venues::*;
