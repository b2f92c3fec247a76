use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use thiserror::Error;

use crate::plot::ColourNorm;

/// Premier League.
pub const DEFAULT_COMPETITION_ID: u32 = 2;
/// 2015/2016.
pub const DEFAULT_SEASON_ID: u32 = 27;
pub const DEFAULT_TEAM: &str = "Leicester City";
pub const DEFAULT_PLAYER: &str = "Jamie Vardy";
pub const DEFAULT_EVENT_TYPE: &str = "Shot";
pub const DEFAULT_MATCH_LIMIT: MatchLimit = MatchLimit::First(4);

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(#[from] pub Box<dyn Error + Send + Sync>);

impl From<anyhow::Error> for ValidationError {
    fn from(value: anyhow::Error) -> Self {
        ValidationError(value.into())
    }
}

/// How many of the selected matches to process, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLimit {
    All,
    First(usize),
}
impl MatchLimit {
    pub fn count(&self) -> usize {
        match self {
            MatchLimit::All => usize::MAX,
            MatchLimit::First(n) => *n,
        }
    }
}

impl Display for MatchLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchLimit::All => write!(f, "all"),
            MatchLimit::First(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for MatchLimit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(MatchLimit::All),
            other => other
                .parse()
                .map(MatchLimit::First)
                .map_err(|_| anyhow!("match limit should be 'all' or a number, got '{s}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub competition_id: u32,
    pub season_id: u32,
    pub team: String,
    pub player: String,
    pub event_type: String,
    pub match_limit: MatchLimit,
    pub colour_norm: ColourNorm,
}
impl Config {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.team.trim().is_empty() {
            return Err(anyhow!("team cannot be blank").into());
        }
        if self.player.trim().is_empty() {
            return Err(anyhow!("player cannot be blank").into());
        }
        if self.event_type.trim().is_empty() {
            return Err(anyhow!("event type cannot be blank").into());
        }
        if self.match_limit == MatchLimit::First(0) {
            return Err(anyhow!("match limit must be at least 1").into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            competition_id: DEFAULT_COMPETITION_ID,
            season_id: DEFAULT_SEASON_ID,
            team: DEFAULT_TEAM.into(),
            player: DEFAULT_PLAYER.into(),
            event_type: DEFAULT_EVENT_TYPE.into(),
            match_limit: DEFAULT_MATCH_LIMIT,
            colour_norm: ColourNorm::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(MatchLimit::First(4), config.match_limit);
        assert_eq!(ColourNorm::PerOutcome, config.colour_norm);
    }

    #[test]
    fn blank_fields() {
        let config = Config {
            player: " ".into(),
            ..Config::default()
        };
        assert_eq!("player cannot be blank", config.validate().unwrap_err().to_string());

        let config = Config {
            team: "".into(),
            ..Config::default()
        };
        assert_eq!("team cannot be blank", config.validate().unwrap_err().to_string());

        let config = Config {
            event_type: "".into(),
            ..Config::default()
        };
        assert_eq!("event type cannot be blank", config.validate().unwrap_err().to_string());
    }

    #[test]
    fn zero_match_limit() {
        let config = Config {
            match_limit: MatchLimit::First(0),
            ..Config::default()
        };
        assert_eq!("match limit must be at least 1", config.validate().unwrap_err().to_string());
    }

    #[test]
    fn parse_match_limit() {
        assert_eq!(MatchLimit::All, MatchLimit::from_str("ALL").unwrap());
        assert_eq!(MatchLimit::First(12), MatchLimit::from_str("12").unwrap());
        assert_eq!(
            "match limit should be 'all' or a number, got 'some'",
            MatchLimit::from_str("some").unwrap_err().to_string()
        );
        assert_eq!(usize::MAX, MatchLimit::All.count());
        assert_eq!("all", MatchLimit::All.to_string());
        assert_eq!("3", MatchLimit::First(3).to_string());
    }
}
