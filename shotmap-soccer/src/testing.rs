//! Fixtures and an in-memory event source for tests.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::domain::{Event, Location, Match};
use crate::source::{EventSource, SourceError};

pub const PLAYER: &str = "Jamie Vardy";
pub const TEAM: &str = "Leicester City";

pub fn fixture(id: u64, home: &str, away: &str) -> Match {
    Match {
        id,
        date: None,
        competition_id: 2,
        competition_name: "Premier League".into(),
        season_id: 27,
        season_name: "2015/2016".into(),
        home_team: home.into(),
        away_team: away.into(),
        home_score: None,
        away_score: None,
    }
}

pub fn event(id: &str, match_id: u64, player: Option<&str>, event_type: &str) -> Event {
    Event {
        id: id.into(),
        match_id,
        index: 0,
        player: player.map(Into::into),
        event_type: event_type.into(),
        outcome: None,
        location: None,
        xg: None,
    }
}

pub fn shot(id: &str, match_id: u64, outcome: &str, xg: f64, x: f64, y: f64) -> Event {
    Event {
        outcome: Some(outcome.into()),
        location: Some(Location::new(x, y)),
        xg: Some(xg),
        ..event(id, match_id, Some(PLAYER), "Shot")
    }
}

/// Serves canned matches and per-match events, and records the order in which match events were
/// requested.
#[derive(Default)]
pub struct FixtureSource {
    pub matches: Vec<Match>,
    pub events: FxHashMap<u64, Vec<Event>>,
    pub fetched: RefCell<Vec<u64>>,
}
impl FixtureSource {
    pub fn with_match(mut self, m: Match, events: Vec<Event>) -> Self {
        self.events.insert(m.id, events);
        self.matches.push(m);
        self
    }

    pub fn fetched(&self) -> Vec<u64> {
        self.fetched.borrow().clone()
    }
}

impl EventSource for FixtureSource {
    async fn matches(&self, _: u32, _: u32) -> Result<Vec<Match>, SourceError> {
        Ok(self.matches.clone())
    }

    async fn events(&self, match_id: u64) -> Result<Vec<Event>, SourceError> {
        self.fetched.borrow_mut().push(match_id);
        Ok(self.events.get(&match_id).cloned().unwrap_or_default())
    }
}
