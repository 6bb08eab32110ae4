//! Trip-candidate enumeration and scoring.
//!
//! Every eligible event that is drivable from home can anchor a trip; the
//! surrounding window is then packed with whatever other eligible events
//! sit within the drive radius of the anchor venue. Candidates are pure
//! derived data, rebuilt on every planning run.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{dates_in_range, is_blackout_day, week_number};
use crate::events::GameEvent;
use crate::planner::PlanConfig;
use crate::roster::{RosterPlayer, roster_index};
use crate::traits::DriveTimeEstimator;

/// A bundled stop reachable from a trip's anchor venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyStop {
    pub event: GameEvent,
    pub drive_from_anchor_minutes: i32,
}

/// One potential itinerary: an anchor event plus same-window stops within
/// the drive radius.
///
/// Invariants: `drive_from_home_minutes` and every stop's
/// `drive_from_anchor_minutes` are at most the configured radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripCandidate {
    pub anchor: GameEvent,
    pub nearby: Vec<NearbyStop>,
    /// Sorted distinct dates the trip would cover.
    pub suggested_days: Vec<NaiveDate>,
    pub drive_from_home_minutes: i32,
    /// Home to anchor, anchor to each stop, last stop back home.
    pub total_drive_minutes: i32,
    pub venue_count: usize,
    pub visit_value: i64,
}

impl TripCandidate {
    /// Distinct normalized athlete identities across anchor and stops.
    pub fn covered_players(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = self.anchor.normalized_players().collect();
        for stop in &self.nearby {
            names.extend(stop.event.normalized_players());
        }
        names.into_iter().collect()
    }
}

/// Events that can take part in any trip: inside the planning range, not on
/// the blackout day, with usable coordinates and at least one athlete still
/// owed visits.
pub(crate) fn eligible_events<'a>(
    events: &'a [GameEvent],
    roster_by_name: &HashMap<String, &RosterPlayer>,
    config: &PlanConfig,
) -> Vec<&'a GameEvent> {
    events
        .iter()
        .filter(|event| {
            event.date >= config.start
                && event.date <= config.end
                && !is_blackout_day(event.date, config.blackout_weekday)
                && event.venue.has_coords()
                && event.normalized_players().any(|player| {
                    roster_by_name
                        .get(&player)
                        .is_some_and(|p| p.visits_remaining() > 0)
                })
        })
        .collect()
}

/// Tier-weighted value of a candidate over the athletes not yet covered.
///
/// Each uncovered athlete contributes their tier weight scaled by
/// remaining visits; anchors on the preferred weekday get the configured
/// bonus before rounding to an integer.
pub(crate) fn rescore(
    candidate: &TripCandidate,
    roster_by_name: &HashMap<String, &RosterPlayer>,
    covered: &HashSet<String>,
    config: &PlanConfig,
) -> i64 {
    let mut raw = 0.0;
    for name in candidate.covered_players() {
        if covered.contains(&name) {
            continue;
        }
        let Some(player) = roster_by_name.get(&name) else {
            continue;
        };
        raw += config.tier_weight(player.tier) * player.visits_remaining() as f64;
    }
    if candidate.anchor.date.weekday() == config.preferred_anchor_weekday {
        raw *= config.anchor_weekday_bonus;
    }
    raw.round() as i64
}

/// Enumerate trip candidates for the event universe.
///
/// A venue anchors at most once per calendar week; without that cap every
/// synthetic-event day at the same venue would spawn a near-identical
/// candidate.
pub fn build_candidates<E>(
    events: &[GameEvent],
    roster: &[RosterPlayer],
    estimator: &E,
    config: &PlanConfig,
) -> Vec<TripCandidate>
where
    E: DriveTimeEstimator + ?Sized,
{
    let roster_by_name = roster_index(roster);
    let eligible = eligible_events(events, &roster_by_name, config);

    // One home-drive estimate per distinct venue.
    let mut home_drive: HashMap<String, i32> = HashMap::new();
    for event in &eligible {
        home_drive
            .entry(event.venue.key())
            .or_insert_with(|| estimator.drive_minutes(config.home, event.venue.coords()));
    }

    let mut anchored: HashSet<(i32, u32, String)> = HashSet::new();
    let mut candidates = Vec::new();

    for day in dates_in_range(config.start, config.end) {
        if is_blackout_day(day, config.blackout_weekday) {
            continue;
        }
        for (anchor_idx, anchor) in eligible.iter().enumerate() {
            if anchor.date != day {
                continue;
            }
            let from_home = home_drive[&anchor.venue.key()];
            if from_home > config.max_drive_minutes {
                // Beyond the radius from home: never a candidate, not even solo.
                continue;
            }
            if !anchored.insert((anchor.date.year(), week_number(anchor.date), anchor.venue.key())) {
                continue;
            }

            // Trip window: one day before the anchor through two days after.
            // Eligible events are already blackout-free.
            let window_start = anchor.date - Duration::days(1);
            let window_end = anchor.date + Duration::days(2);
            let mut nearby = Vec::new();
            for (idx, event) in eligible.iter().enumerate() {
                if idx == anchor_idx || event.date < window_start || event.date > window_end {
                    continue;
                }
                let minutes = estimator.drive_minutes(anchor.venue.coords(), event.venue.coords());
                if minutes <= config.max_drive_minutes {
                    nearby.push(NearbyStop {
                        event: (*event).clone(),
                        drive_from_anchor_minutes: minutes,
                    });
                }
            }
            nearby.sort_by(|a, b| {
                a.event
                    .date
                    .cmp(&b.event.date)
                    .then_with(|| a.event.venue.name.cmp(&b.event.venue.name))
            });

            let mut suggested_days: Vec<NaiveDate> = std::iter::once(anchor.date)
                .chain(nearby.iter().map(|stop| stop.event.date))
                .collect();
            suggested_days.sort();
            suggested_days.dedup();

            let venue_count = std::iter::once(anchor.venue.key())
                .chain(nearby.iter().map(|stop| stop.event.venue.key()))
                .collect::<HashSet<String>>()
                .len();

            let between_stops: i32 = nearby.iter().map(|s| s.drive_from_anchor_minutes).sum();
            let return_home = match nearby.last() {
                Some(stop) => estimator.drive_minutes(stop.event.venue.coords(), config.home),
                None => estimator.drive_minutes(anchor.venue.coords(), config.home),
            };

            let mut candidate = TripCandidate {
                anchor: (*anchor).clone(),
                nearby,
                suggested_days,
                drive_from_home_minutes: from_home,
                total_drive_minutes: from_home + between_stops + return_home,
                venue_count,
                visit_value: 0,
            };
            candidate.visit_value = rescore(&candidate, &roster_by_name, &HashSet::new(), config);
            candidates.push(candidate);
        }
    }

    debug!(
        eligible = eligible.len(),
        candidates = candidates.len(),
        "candidate enumeration complete"
    );
    candidates
}
