//! Roster model.
//!
//! Athletes are loaded by an external roster source and only consumed here;
//! the planner never creates or destroys them.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Competitive level an athlete plays at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Pro,
    College,
    HighSchool,
}

/// One athlete on the scouting roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub name: String,
    pub level: Level,
    /// Team or school, free text; mapped to a venue by a `VenueResolver`.
    pub org: String,
    /// Priority tier, 1 (highest) through 4.
    pub tier: u8,
    pub visit_target: u32,
    pub visits_completed: u32,
    pub last_visit: Option<NaiveDate>,
}

impl RosterPlayer {
    /// Visits still owed. Never negative: completing more visits than the
    /// target saturates at zero remaining.
    pub fn visits_remaining(&self) -> u32 {
        self.visit_target.saturating_sub(self.visits_completed)
    }

    /// Operator override for the completed-visit count. The remaining count
    /// is derived, so it tracks this immediately.
    pub fn set_visits_completed(&mut self, completed: u32, on: Option<NaiveDate>) {
        self.visits_completed = completed;
        if on.is_some() {
            self.last_visit = on;
        }
    }

    /// Canonical identity used everywhere athletes are cross-referenced.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Canonical athlete identity: lowercased, common punctuation stripped,
/// whitespace collapsed.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '.' | '\'' | ','))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Roster lookup keyed by normalized name.
pub(crate) fn roster_index(roster: &[RosterPlayer]) -> HashMap<String, &RosterPlayer> {
    roster
        .iter()
        .map(|player| (player.normalized_name(), player))
        .collect()
}
