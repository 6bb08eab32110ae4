//! Visit-opportunity events and the synthetic generators that fill in
//! levels lacking confirmed schedule data.
//!
//! Confirmed events arrive pre-resolved from upstream collaborators. For
//! the levels without reliable schedules the generators emit one
//! recurring-venue event per eligible date, flagged with a confidence so a
//! scout knows which stops to verify before driving.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{SeasonWindow, dates_in_range, is_blackout_day};
use crate::planner::PlanConfig;
use crate::roster::{Level, RosterPlayer, normalize_name};
use crate::traits::VenueResolver;

/// A named venue with geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Venue {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// The (0, 0) sentinel marks a venue that failed geocoding upstream;
    /// such venues never anchor a trip or join one as a stop.
    pub fn has_coords(&self) -> bool {
        self.lat != 0.0 || self.lng != 0.0
    }

    /// Rounded coordinate key used for memoization and venue grouping.
    pub(crate) fn key(&self) -> String {
        format!("{:.4},{:.4}", self.lat, self.lng)
    }
}

/// Where an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventSource {
    ConfirmedPro,
    ConfirmedCollege,
    SyntheticCollege,
    SyntheticHighSchool,
    SyntheticSpringTraining,
}

impl EventSource {
    pub fn is_confirmed(self) -> bool {
        matches!(self, EventSource::ConfirmedPro | EventSource::ConfirmedCollege)
    }
}

/// How sure the generators are that the athlete will actually be there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub level: ConfidenceLevel,
    pub note: String,
}

/// A single date-plus-venue occurrence where one or more athletes are
/// expected. Regenerated every planning run; the upstream schedule and
/// roster stay the unit of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub date: NaiveDate,
    pub venue: Venue,
    pub is_home: bool,
    pub source: EventSource,
    pub player_names: Vec<String>,
    pub confidence: Option<Confidence>,
    pub verify_url: Option<String>,
}

impl GameEvent {
    /// Normalized identities of the athletes expected at this event.
    pub(crate) fn normalized_players(&self) -> impl Iterator<Item = String> + '_ {
        self.player_names.iter().map(|name| normalize_name(name))
    }
}

/// Table-backed venue resolver with operator overrides.
///
/// Overrides are consulted before the static table so an operator can
/// correct a bad mapping without touching the bundled data. Lookups use
/// normalized organization names.
#[derive(Debug, Clone, Default)]
pub struct AliasVenueResolver {
    table: HashMap<String, Venue>,
    overrides: HashMap<String, Venue>,
}

impl AliasVenueResolver {
    pub fn new(entries: impl IntoIterator<Item = (String, Venue)>) -> Self {
        Self {
            table: entries
                .into_iter()
                .map(|(name, venue)| (normalize_name(&name), venue))
                .collect(),
            overrides: HashMap::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (String, Venue)>) -> Self {
        self.overrides = overrides
            .into_iter()
            .map(|(name, venue)| (normalize_name(&name), venue))
            .collect();
        self
    }

    pub fn insert_override(&mut self, raw_name: &str, venue: Venue) {
        self.overrides.insert(normalize_name(raw_name), venue);
    }
}

impl VenueResolver for AliasVenueResolver {
    fn resolve(&self, raw_name: &str) -> Option<Venue> {
        let key = normalize_name(raw_name);
        self.overrides
            .get(&key)
            .or_else(|| self.table.get(&key))
            .cloned()
    }
}

fn synthetic_source(level: Level) -> EventSource {
    match level {
        Level::Pro => EventSource::SyntheticSpringTraining,
        Level::College => EventSource::SyntheticCollege,
        Level::HighSchool => EventSource::SyntheticHighSchool,
    }
}

fn season_for(level: Level, config: &PlanConfig) -> &SeasonWindow {
    match level {
        Level::Pro => &config.seasons.spring_training,
        Level::College => &config.seasons.college,
        Level::HighSchool => &config.seasons.high_school,
    }
}

/// Generate recurring-venue events for every athlete of `level` still owed
/// visits: one event per non-blackout in-range date inside the level's
/// season window, at the athlete's resolved home venue.
///
/// An unresolvable organization contributes zero events; the athlete then
/// surfaces in the unreachable report unless another source covers them.
pub fn synthetic_events<R>(
    roster: &[RosterPlayer],
    level: Level,
    resolver: &R,
    config: &PlanConfig,
) -> Vec<GameEvent>
where
    R: VenueResolver + ?Sized,
{
    let window = season_for(level, config);
    let source = synthetic_source(level);
    let mut events = Vec::new();

    for player in roster
        .iter()
        .filter(|p| p.level == level && p.visits_remaining() > 0)
    {
        let Some(venue) = resolver.resolve(&player.org) else {
            debug!(
                player = %player.name,
                org = %player.org,
                "organization did not resolve to a venue; no synthetic events"
            );
            continue;
        };

        for date in dates_in_range(config.start, config.end) {
            if is_blackout_day(date, config.blackout_weekday) || !window.contains(date) {
                continue;
            }
            let confidence = if window.is_typical_home_day(date) {
                Confidence {
                    level: ConfidenceLevel::Medium,
                    note: format!("typical home day for {}", player.org),
                }
            } else {
                Confidence {
                    level: ConfidenceLevel::Low,
                    note: format!("{} may be traveling; verify before routing", player.name),
                }
            };
            events.push(GameEvent {
                date,
                venue: venue.clone(),
                is_home: true,
                source,
                player_names: vec![player.name.clone()],
                confidence: Some(confidence),
                verify_url: None,
            });
        }
    }

    events
}

/// Assemble the full visit-opportunity universe: confirmed events as given,
/// plus synthetic events per level, minus synthetic duplicates of confirmed
/// coverage (same athlete, date, venue).
pub fn build_event_universe<R>(
    roster: &[RosterPlayer],
    confirmed: &[GameEvent],
    resolver: &R,
    config: &PlanConfig,
) -> Vec<GameEvent>
where
    R: VenueResolver + ?Sized,
{
    let mut confirmed_ids: HashSet<String> = HashSet::new();
    for event in confirmed {
        for player in event.normalized_players() {
            confirmed_ids.insert(event_id(event.date, &event.venue, &player));
        }
    }

    let mut universe: Vec<GameEvent> = confirmed.to_vec();
    for level in [Level::Pro, Level::College, Level::HighSchool] {
        for event in synthetic_events(roster, level, resolver, config) {
            let duplicate = event
                .normalized_players()
                .all(|player| confirmed_ids.contains(&event_id(event.date, &event.venue, &player)));
            if !duplicate {
                universe.push(event);
            }
        }
    }

    debug!(
        confirmed = confirmed.len(),
        total = universe.len(),
        "event universe assembled"
    );
    universe
}

fn event_id(date: NaiveDate, venue: &Venue, normalized_player: &str) -> String {
    format!("{date}|{}|{normalized_player}", venue.key())
}
