//! Fly-in and unreachable classification for athletes no road trip covers.
//!
//! Remaining eligible events are grouped by venue. Groups beyond the drive
//! radius become fly-in candidates with a flight-time estimate; an athlete
//! with no opportunities at all lands in the unreachable report. Together
//! with the accepted trips these three buckets account for every athlete
//! still owed visits.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::candidates::eligible_events;
use crate::events::{Confidence, EventSource, GameEvent, Venue};
use crate::haversine::{flight_hours, haversine_km};
use crate::planner::PlanConfig;
use crate::roster::{RosterPlayer, normalize_name, roster_index};
use crate::traits::DriveTimeEstimator;

/// A venue worth flying to: visit opportunities beyond the drive radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyInVisit {
    pub players: Vec<String>,
    pub venue: Venue,
    /// Sorted distinct dates with opportunities at this venue.
    pub dates: Vec<NaiveDate>,
    pub distance_km: f64,
    pub estimated_travel_hours: f64,
    pub source: EventSource,
    pub confidence: Option<Confidence>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnvisitablePlayer {
    pub player: String,
    pub reason: String,
}

pub(crate) struct Classification {
    pub fly_ins: Vec<FlyInVisit>,
    pub unvisitable: Vec<UnvisitablePlayer>,
}

struct VenueGroup<'a> {
    venue: &'a Venue,
    players: BTreeSet<String>,
    dates: BTreeSet<NaiveDate>,
    events: Vec<&'a GameEvent>,
}

/// Account for every requesting athlete the selection left uncovered.
pub(crate) fn classify_uncovered<E>(
    roster: &[RosterPlayer],
    events: &[GameEvent],
    covered: &HashSet<String>,
    estimator: &E,
    config: &PlanConfig,
) -> Classification
where
    E: DriveTimeEstimator + ?Sized,
{
    let roster_by_name = roster_index(roster);
    let eligible = eligible_events(events, &roster_by_name, config);

    let uncovered: Vec<&RosterPlayer> = roster
        .iter()
        .filter(|player| {
            player.visits_remaining() > 0 && !covered.contains(&player.normalized_name())
        })
        .collect();
    let uncovered_names: HashSet<String> =
        uncovered.iter().map(|p| p.normalized_name()).collect();

    // Group each uncovered athlete's remaining opportunities by venue.
    // BTreeMap keeps the iteration order stable across runs.
    let mut groups: BTreeMap<String, VenueGroup> = BTreeMap::new();
    for &event in &eligible {
        let present: Vec<&String> = event
            .player_names
            .iter()
            .filter(|name| uncovered_names.contains(&normalize_name(name)))
            .collect();
        if present.is_empty() {
            continue;
        }
        let group = groups.entry(event.venue.key()).or_insert_with(|| VenueGroup {
            venue: &event.venue,
            players: BTreeSet::new(),
            dates: BTreeSet::new(),
            events: Vec::new(),
        });
        group.players.extend(present.iter().map(|name| name.to_string()));
        group.dates.insert(event.date);
        group.events.push(event);
    }

    let mut fly_ins = Vec::new();
    let mut flown: HashSet<String> = HashSet::new();
    let mut road_reachable: HashSet<String> = HashSet::new();
    for group in groups.values() {
        let names: Vec<String> = group.players.iter().map(|n| normalize_name(n)).collect();
        if estimator.drive_minutes(config.home, group.venue.coords()) <= config.max_drive_minutes {
            // Reachable by road; not being selected this run is an expected
            // outcome, not a reason to fly.
            road_reachable.extend(names);
            continue;
        }

        let distance_km = haversine_km(config.home, group.venue.coords());
        let earliest = group
            .events
            .iter()
            .min_by_key(|event| event.date)
            .expect("venue group holds at least one event");
        let confidence = group
            .events
            .iter()
            .filter_map(|event| event.confidence.as_ref())
            .max_by_key(|confidence| confidence.level)
            .cloned();

        fly_ins.push(FlyInVisit {
            players: group.players.iter().cloned().collect(),
            venue: group.venue.clone(),
            dates: group.dates.iter().copied().collect(),
            distance_km,
            estimated_travel_hours: flight_hours(distance_km),
            source: earliest.source,
            confidence,
        });
        flown.extend(names);
    }

    // Most valuable destinations first.
    fly_ins.sort_by(|a, b| {
        b.players
            .len()
            .cmp(&a.players.len())
            .then_with(|| a.venue.name.cmp(&b.venue.name))
    });

    let mut unvisitable = Vec::new();
    for player in &uncovered {
        let name = player.normalized_name();
        if flown.contains(&name) {
            continue;
        }
        let reason = if road_reachable.contains(&name) {
            "reachable by road but not selected for a trip this run".to_string()
        } else {
            "no visit opportunities found in range".to_string()
        };
        unvisitable.push(UnvisitablePlayer {
            player: player.name.clone(),
            reason,
        });
    }

    debug!(
        fly_ins = fly_ins.len(),
        unvisitable = unvisitable.len(),
        "fly-in analysis complete"
    );
    Classification {
        fly_ins,
        unvisitable,
    }
}
