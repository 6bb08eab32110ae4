//! Trip selection: priority-player pre-allocation, then a greedy
//! maximum-coverage pass over the candidate pool.
//!
//! The greedy loop recomputes a fresh score for every remaining candidate
//! each iteration, so covering an athlete removes their contribution from
//! every other candidate immediately. Not provably optimal, but bounded
//! and fast enough to rerun on every interactive change.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::candidates::{TripCandidate, rescore};
use crate::planner::PlanConfig;
use crate::roster::{RosterPlayer, normalize_name, roster_index};

/// How a requested priority athlete was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityStatus {
    /// Covered by the shared first trip.
    Included,
    /// No single trip reaches both priority athletes; this one got their own.
    SeparateTrip,
    /// No candidate within the drive radius includes the athlete.
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityResult {
    pub player: String,
    pub status: PriorityStatus,
    pub reason: Option<String>,
}

/// Accepted trips plus the athletes they cover.
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    pub trips: Vec<TripCandidate>,
    pub priority_results: Vec<PriorityResult>,
    /// Normalized names of every requesting athlete covered by a trip.
    pub covered: HashSet<String>,
}

/// Deterministic candidate ordering: higher score wins; ties break to the
/// earlier anchor date, then the lexically smaller anchor venue name.
fn beats(
    challenger: &TripCandidate,
    challenger_score: i64,
    incumbent: &TripCandidate,
    incumbent_score: i64,
) -> bool {
    challenger_score
        .cmp(&incumbent_score)
        .then_with(|| incumbent.anchor.date.cmp(&challenger.anchor.date))
        .then_with(|| incumbent.anchor.venue.name.cmp(&challenger.anchor.venue.name))
        .is_gt()
}

/// Best candidate (by stored raw score) satisfying `includes`, if any.
fn best_candidate<F>(pool: &[TripCandidate], mut includes: F) -> Option<usize>
where
    F: FnMut(&TripCandidate) -> bool,
{
    let mut best: Option<usize> = None;
    for (idx, candidate) in pool.iter().enumerate() {
        if !includes(candidate) {
            continue;
        }
        best = Some(match best {
            None => idx,
            Some(current)
                if beats(
                    candidate,
                    candidate.visit_value,
                    &pool[current],
                    pool[current].visit_value,
                ) =>
            {
                idx
            }
            Some(current) => current,
        });
    }
    best
}

/// Remove the candidate from the pool, mark its requesting athletes
/// covered, and append it to the accepted list.
fn accept(
    pool: &mut Vec<TripCandidate>,
    idx: usize,
    trips: &mut Vec<TripCandidate>,
    covered: &mut HashSet<String>,
    roster_by_name: &HashMap<String, &RosterPlayer>,
) {
    let candidate = pool.remove(idx);
    for name in candidate.covered_players() {
        if roster_by_name
            .get(&name)
            .is_some_and(|player| player.visits_remaining() > 0)
        {
            covered.insert(name);
        }
    }
    trips.push(candidate);
}

/// Turn the candidate pool into the accepted trip list.
///
/// Priority trips come first in the order produced, then greedy trips in
/// acceptance order.
pub fn select_trips(
    candidates: Vec<TripCandidate>,
    roster: &[RosterPlayer],
    config: &PlanConfig,
) -> SelectionOutcome {
    let roster_by_name = roster_index(roster);
    let mut pool = candidates;
    let mut trips = Vec::new();
    let mut covered: HashSet<String> = HashSet::new();
    let mut priority_results = Vec::new();

    let priority: Vec<String> = config
        .priority_players
        .iter()
        .map(|name| normalize_name(name))
        .collect();

    if priority.len() == 2 {
        let together = best_candidate(&pool, |candidate| {
            let players = candidate.covered_players();
            priority.iter().all(|name| players.contains(name))
        });
        if let Some(idx) = together {
            accept(&mut pool, idx, &mut trips, &mut covered, &roster_by_name);
            for raw in &config.priority_players {
                priority_results.push(PriorityResult {
                    player: raw.clone(),
                    status: PriorityStatus::Included,
                    reason: None,
                });
            }
        } else {
            for (raw, name) in config.priority_players.iter().zip(&priority) {
                match best_candidate(&pool, |candidate| candidate.covered_players().contains(name)) {
                    Some(idx) => {
                        accept(&mut pool, idx, &mut trips, &mut covered, &roster_by_name);
                        priority_results.push(PriorityResult {
                            player: raw.clone(),
                            status: PriorityStatus::SeparateTrip,
                            reason: Some(
                                "no single trip window reaches both priority athletes".to_string(),
                            ),
                        });
                    }
                    None => priority_results.push(PriorityResult {
                        player: raw.clone(),
                        status: PriorityStatus::Unreachable,
                        reason: Some(format!(
                            "no trip candidate within the drive radius includes {raw}"
                        )),
                    }),
                }
            }
        }
    } else if priority.len() == 1 {
        let name = &priority[0];
        let raw = &config.priority_players[0];
        match best_candidate(&pool, |candidate| candidate.covered_players().contains(name)) {
            Some(idx) => {
                accept(&mut pool, idx, &mut trips, &mut covered, &roster_by_name);
                priority_results.push(PriorityResult {
                    player: raw.clone(),
                    status: PriorityStatus::Included,
                    reason: None,
                });
            }
            None => priority_results.push(PriorityResult {
                player: raw.clone(),
                status: PriorityStatus::Unreachable,
                reason: Some(format!(
                    "no trip candidate within the drive radius includes {raw}"
                )),
            }),
        }
    }

    // Greedy covering phase: fresh scores every iteration, stop once the
    // best remaining candidate adds nothing.
    loop {
        if pool.is_empty() {
            break;
        }
        let scores: Vec<i64> = pool
            .iter()
            .map(|candidate| rescore(candidate, &roster_by_name, &covered, config))
            .collect();
        let mut best_idx = 0;
        for idx in 1..pool.len() {
            if beats(&pool[idx], scores[idx], &pool[best_idx], scores[best_idx]) {
                best_idx = idx;
            }
        }
        if scores[best_idx] == 0 {
            break;
        }
        trace!(
            score = scores[best_idx],
            anchor = %pool[best_idx].anchor.venue.name,
            date = %pool[best_idx].anchor.date,
            "greedy acceptance"
        );
        let mut candidate = pool.remove(best_idx);
        // Record the value this trip actually adds given earlier picks.
        candidate.visit_value = scores[best_idx];
        for name in candidate.covered_players() {
            if roster_by_name
                .get(&name)
                .is_some_and(|player| player.visits_remaining() > 0)
            {
                covered.insert(name);
            }
        }
        trips.push(candidate);
    }

    debug!(
        trips = trips.len(),
        covered = covered.len(),
        "selection complete"
    );
    SelectionOutcome {
        trips,
        priority_results,
        covered,
    }
}
