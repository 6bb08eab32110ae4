//! Planning entry point: configuration, orchestration, and the final plan.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calendar::SeasonWindow;
use crate::candidates::{TripCandidate, build_candidates};
use crate::events::{GameEvent, build_event_universe};
use crate::flyin::{FlyInVisit, UnvisitablePlayer, classify_uncovered};
use crate::roster::RosterPlayer;
use crate::selection::{PriorityResult, select_trips};
use crate::traits::{DriveTimeEstimator, VenueResolver};

/// Default one-way drive radius: a three-hour drive.
pub const DEFAULT_MAX_DRIVE_MINUTES: i32 = 180;

/// Default score weight per remaining visit, tier 1 first. Tier 4 never
/// drives scoring.
pub const DEFAULT_TIER_WEIGHTS: [f64; 4] = [10.0, 6.0, 3.0, 0.0];

/// Season windows for the three competitive levels.
///
/// The weekday sets are a domain heuristic (which days a level usually
/// plays at home), tunable per geography; they only affect synthetic-event
/// confidence labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonConfig {
    pub spring_training: SeasonWindow,
    pub college: SeasonWindow,
    pub high_school: SeasonWindow,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            spring_training: SeasonWindow::new(
                (2, 15),
                (3, 28),
                vec![Weekday::Wed, Weekday::Thu, Weekday::Fri, Weekday::Sat],
            ),
            college: SeasonWindow::new(
                (2, 14),
                (6, 25),
                vec![Weekday::Fri, Weekday::Sat, Weekday::Sun],
            ),
            high_school: SeasonWindow::new(
                (3, 1),
                (6, 15),
                vec![Weekday::Tue, Weekday::Thu, Weekday::Fri],
            ),
        }
    }
}

/// Engine configuration.
///
/// All domain constants live here rather than in module globals so
/// alternate geographies, seasons, and weights are testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Scout home base (lat, lng).
    pub home: (f64, f64),
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Maximum one-way estimated drive, in minutes.
    pub max_drive_minutes: i32,
    /// Weekly no-travel day.
    pub blackout_weekday: Weekday,
    /// Anchors on this weekday get the score bonus.
    pub preferred_anchor_weekday: Weekday,
    pub anchor_weekday_bonus: f64,
    /// Score weight per remaining visit, indexed by tier minus one.
    pub tier_weights: [f64; 4],
    pub seasons: SeasonConfig,
    /// Up to two athletes guaranteed a slot in the first trip(s).
    pub priority_players: Vec<String>,
}

impl PlanConfig {
    pub fn new(home: (f64, f64), start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            home,
            start,
            end,
            max_drive_minutes: DEFAULT_MAX_DRIVE_MINUTES,
            blackout_weekday: Weekday::Sun,
            preferred_anchor_weekday: Weekday::Thu,
            anchor_weekday_bonus: 1.2,
            tier_weights: DEFAULT_TIER_WEIGHTS,
            seasons: SeasonConfig::default(),
            priority_players: Vec::new(),
        }
    }

    /// Weight an athlete's tier contributes per remaining visit. Tiers
    /// outside 1 through 4 weigh nothing.
    pub fn tier_weight(&self, tier: u8) -> f64 {
        match tier {
            1..=4 => self.tier_weights[(tier - 1) as usize],
            _ => 0.0,
        }
    }

    fn validate(&self) -> Result<(), PlanError> {
        if self.start > self.end {
            return Err(PlanError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.max_drive_minutes <= 0 {
            return Err(PlanError::InvalidDriveRadius {
                minutes: self.max_drive_minutes,
            });
        }
        if self.priority_players.len() > 2 {
            return Err(PlanError::TooManyPriorityPlayers {
                count: self.priority_players.len(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("max drive minutes must be positive, got {minutes}")]
    InvalidDriveRadius { minutes: i32 },

    #[error("at most two priority players are supported, got {count}")]
    TooManyPriorityPlayers { count: usize },
}

/// Coarse milestones reported while a plan is computed. UI feedback only;
/// control flow never depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStage {
    Preparing,
    Analyzing,
    Optimizing,
    FlyInAnalysis,
}

/// The planner's complete output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub trips: Vec<TripCandidate>,
    pub fly_in_visits: Vec<FlyInVisit>,
    pub unvisitable_players: Vec<UnvisitablePlayer>,
    /// Share of requesting athletes covered by accepted road trips.
    pub coverage_percent: f64,
    pub priority_results: Vec<PriorityResult>,
}

/// Run the full pipeline: event universe, candidates, selection, fly-in
/// classification.
pub fn plan<R, E>(
    roster: &[RosterPlayer],
    confirmed: &[GameEvent],
    resolver: &R,
    estimator: &E,
    config: &PlanConfig,
) -> Result<TripPlan, PlanError>
where
    R: VenueResolver + ?Sized,
    E: DriveTimeEstimator + ?Sized,
{
    plan_with_progress(roster, confirmed, resolver, estimator, config, |_| {})
}

/// Like [`plan`], invoking `progress` at each coarse milestone.
pub fn plan_with_progress<R, E, F>(
    roster: &[RosterPlayer],
    confirmed: &[GameEvent],
    resolver: &R,
    estimator: &E,
    config: &PlanConfig,
    mut progress: F,
) -> Result<TripPlan, PlanError>
where
    R: VenueResolver + ?Sized,
    E: DriveTimeEstimator + ?Sized,
    F: FnMut(PlanStage),
{
    config.validate()?;

    progress(PlanStage::Preparing);
    let events = build_event_universe(roster, confirmed, resolver, config);

    progress(PlanStage::Analyzing);
    let candidates = build_candidates(&events, roster, estimator, config);

    progress(PlanStage::Optimizing);
    let outcome = select_trips(candidates, roster, config);

    progress(PlanStage::FlyInAnalysis);
    let classification = classify_uncovered(roster, &events, &outcome.covered, estimator, config);

    let requesting = roster
        .iter()
        .filter(|player| player.visits_remaining() > 0)
        .count();
    let coverage_percent = if requesting == 0 {
        0.0
    } else {
        outcome.covered.len() as f64 / requesting as f64 * 100.0
    };

    debug!(
        trips = outcome.trips.len(),
        fly_ins = classification.fly_ins.len(),
        unvisitable = classification.unvisitable.len(),
        coverage = coverage_percent,
        "plan complete"
    );

    Ok(TripPlan {
        trips: outcome.trips,
        fly_in_visits: classification.fly_ins,
        unvisitable_players: classification.unvisitable,
        coverage_percent,
        priority_results: outcome.priority_results,
    })
}
