//! Descriptive statistics over a collection of shots.

use shotmap::freq::{Frequency, Tally};

use crate::domain::{Event, ShotOutcome};

/// Share of each outcome category present, most frequent first. Events that carry no outcome are
/// counted in `untabulated` and excluded from the percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeBreakdown {
    pub rows: Vec<Frequency<String>>,
    pub untabulated: usize,
}
impl OutcomeBreakdown {
    pub fn percent(&self, outcome: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.key == outcome)
            .map(|row| row.percent)
    }
}

pub fn outcome_breakdown(events: &[Event]) -> OutcomeBreakdown {
    let mut tally = Tally::default();
    let mut untabulated = 0;
    for event in events {
        match event.outcome() {
            Some(outcome) => tally.add(outcome.to_owned()),
            None => untabulated += 1,
        }
    }
    OutcomeBreakdown {
        rows: tally.relative(),
        untabulated,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShotSummary {
    pub shots: usize,
    pub goals: usize,
    pub total_xg: f64,
}
impl ShotSummary {
    pub fn xg_per_shot(&self) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.total_xg / self.shots as f64
        }
    }

    /// Goals scored above (positive) or below (negative) expectation.
    pub fn goals_minus_xg(&self) -> f64 {
        self.goals as f64 - self.total_xg
    }

    pub fn conversion(&self) -> f64 {
        if self.shots == 0 {
            0.0
        } else {
            self.goals as f64 / self.shots as f64
        }
    }
}

impl From<&[Event]> for ShotSummary {
    fn from(events: &[Event]) -> Self {
        let goal: &str = ShotOutcome::Goal.into();
        Self {
            shots: events.len(),
            goals: events
                .iter()
                .filter(|event| event.outcome() == Some(goal))
                .count(),
            total_xg: events.iter().filter_map(|event| event.xg).sum(),
        }
    }
}
