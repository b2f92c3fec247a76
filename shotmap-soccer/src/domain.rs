use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Length and width of the pitch, in StatsBomb units.
pub const PITCH_LENGTH: f64 = 120.0;
pub const PITCH_WIDTH: f64 = 80.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: u64,
    pub date: Option<NaiveDate>,
    pub competition_id: u32,
    pub competition_name: String,
    pub season_id: u32,
    pub season_name: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
}
impl Match {
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    pub fn fixture(&self) -> String {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => {
                format!("{} {home}-{away} {}", self.home_team, self.away_team)
            }
            _ => format!("{} v {}", self.home_team, self.away_team),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}
impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single on-ball event. Optional fields are only populated for event types that carry them:
/// `outcome` and `xg` for shots, `player` for player-attributed events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub match_id: u64,
    pub index: u32,
    pub player: Option<String>,
    pub event_type: String,
    pub outcome: Option<String>,
    pub location: Option<Location>,
    pub xg: Option<f64>,
}
impl Event {
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }
}

/// The shot outcomes that have a marker on the shot map. StatsBomb emits others (e.g.
/// "Wayward", "Saved Off T"), which are tabulated but not plotted.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ShotOutcome {
    Blocked,
    Goal,
    #[strum(serialize = "Off T")]
    OffTarget,
    Post,
    Saved,
}
impl ShotOutcome {
    pub fn marker(&self) -> Marker {
        match self {
            ShotOutcome::Blocked => Marker::Diamond,
            ShotOutcome::Goal => Marker::Circle,
            ShotOutcome::OffTarget => Marker::Cross,
            ShotOutcome::Post => Marker::Triangle,
            ShotOutcome::Saved => Marker::Square,
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Marker {
    Diamond,
    Circle,
    Cross,
    Triangle,
    Square,
}
impl Marker {
    /// Whether the marker has an interior that takes a fill colour. Unfilled markers are drawn
    /// with their stroke in the point colour.
    pub fn is_filled(&self) -> bool {
        !matches!(self, Marker::Cross)
    }
}
