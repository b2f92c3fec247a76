//! Wire records of the StatsBomb open-data JSON feeds, and their conversion into the domain model.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{Event, Location, Match};

#[derive(Debug, Deserialize)]
pub struct MatchRecord {
    pub match_id: u64,
    pub match_date: Option<NaiveDate>,
    pub competition: CompetitionRecord,
    pub season: SeasonRecord,
    pub home_team: HomeTeamRecord,
    pub away_team: AwayTeamRecord,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct CompetitionRecord {
    pub competition_id: u32,
    #[serde(default)]
    pub competition_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SeasonRecord {
    pub season_id: u32,
    #[serde(default)]
    pub season_name: String,
}

#[derive(Debug, Deserialize)]
pub struct HomeTeamRecord {
    pub home_team_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AwayTeamRecord {
    pub away_team_name: String,
}

impl From<MatchRecord> for Match {
    fn from(external: MatchRecord) -> Self {
        Self {
            id: external.match_id,
            date: external.match_date,
            competition_id: external.competition.competition_id,
            competition_name: external.competition.competition_name,
            season_id: external.season.season_id,
            season_name: external.season.season_name,
            home_team: external.home_team.home_team_name,
            away_team: external.away_team.away_team_name,
            home_score: external.home_score,
            away_score: external.away_score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NamedRecord {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub index: u32,
    #[serde(rename = "type")]
    pub event_type: NamedRecord,
    pub player: Option<NamedRecord>,
    pub location: Option<Vec<f64>>,
    pub shot: Option<ShotRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ShotRecord {
    pub statsbomb_xg: Option<f64>,
    pub outcome: Option<NamedRecord>,
}

impl EventRecord {
    /// Converts into a domain event attributed to the given match. Locations with fewer than two
    /// coordinates are discarded; any third coordinate (height) is ignored.
    pub fn into_event(self, match_id: u64) -> Event {
        let location = match self.location.as_deref() {
            Some([x, y, ..]) => Some(Location::new(*x, *y)),
            _ => None,
        };
        let (outcome, xg) = match self.shot {
            None => (None, None),
            Some(shot) => (shot.outcome.map(|outcome| outcome.name), shot.statsbomb_xg),
        };
        Event {
            id: self.id,
            match_id,
            index: self.index,
            player: self.player.map(|player| player.name),
            event_type: self.event_type.name,
            outcome,
            location,
            xg,
        }
    }
}

pub fn decode_matches(json: &[u8]) -> Result<Vec<Match>, serde_json::Error> {
    let records: Vec<MatchRecord> = serde_json::from_slice(json)?;
    Ok(records.into_iter().map(Match::from).collect())
}

pub fn decode_events(json: &[u8], match_id: u64) -> Result<Vec<Event>, serde_json::Error> {
    let records: Vec<EventRecord> = serde_json::from_slice(json)?;
    Ok(records
        .into_iter()
        .map(|record| record.into_event(match_id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATCHES: &str = r#"[
        {
            "match_id": 3754058,
            "match_date": "2016-01-02",
            "kick_off": "16:00:00.000",
            "competition": {"competition_id": 2, "country_name": "England", "competition_name": "Premier League"},
            "season": {"season_id": 27, "season_name": "2015/2016"},
            "home_team": {"home_team_id": 24, "home_team_name": "Liverpool", "home_team_gender": "male"},
            "away_team": {"away_team_id": 22, "away_team_name": "Leicester City", "away_team_gender": "male"},
            "home_score": 1,
            "away_score": 0,
            "match_status": "available"
        }
    ]"#;

    const EVENTS: &str = r#"[
        {
            "id": "9f6e2ecf-6685-45df-a62e-c2db3090f6c1",
            "index": 1,
            "period": 1,
            "type": {"id": 35, "name": "Starting XI"},
            "team": {"id": 22, "name": "Leicester City"}
        },
        {
            "id": "a5b1e2f0-0000-4000-8000-000000000001",
            "index": 812,
            "period": 1,
            "type": {"id": 16, "name": "Shot"},
            "player": {"id": 3311, "name": "Jamie Vardy"},
            "location": [108.1, 35.3],
            "shot": {
                "statsbomb_xg": 0.0793,
                "end_location": [120.0, 37.9, 0.8],
                "outcome": {"id": 100, "name": "Saved"},
                "body_part": {"id": 40, "name": "Right Foot"}
            }
        },
        {
            "id": "a5b1e2f0-0000-4000-8000-000000000002",
            "index": 813,
            "type": {"id": 30, "name": "Pass"},
            "player": {"id": 3311, "name": "Jamie Vardy"},
            "location": [60.0]
        }
    ]"#;

    #[test]
    fn decode_match() {
        let matches = decode_matches(MATCHES.as_bytes()).unwrap();
        assert_eq!(1, matches.len());
        let m = &matches[0];
        assert_eq!(3754058, m.id);
        assert_eq!(NaiveDate::from_ymd_opt(2016, 1, 2), m.date);
        assert_eq!(2, m.competition_id);
        assert_eq!("Premier League", m.competition_name);
        assert_eq!(27, m.season_id);
        assert_eq!("2015/2016", m.season_name);
        assert_eq!("Liverpool", m.home_team);
        assert_eq!("Leicester City", m.away_team);
        assert_eq!(Some(1), m.home_score);
        assert_eq!(Some(0), m.away_score);
    }

    #[test]
    fn decode_match_missing_id() {
        let json = MATCHES.replace(r#""match_id": 3754058,"#, "");
        let err = decode_matches(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing field `match_id`"), "{err}");
    }

    #[test]
    fn decode_match_missing_team() {
        let json = MATCHES.replace("home_team_name", "name");
        let err = decode_matches(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing field `home_team_name`"), "{err}");
    }

    #[test]
    fn decode_event_kinds() {
        let events = decode_events(EVENTS.as_bytes(), 3754058).unwrap();
        assert_eq!(3, events.len());

        let starting = &events[0];
        assert_eq!("Starting XI", starting.event_type);
        assert_eq!(None, starting.player());
        assert_eq!(None, starting.location);
        assert_eq!(None, starting.outcome());

        let shot = &events[1];
        assert_eq!(3754058, shot.match_id);
        assert_eq!(812, shot.index);
        assert_eq!("Shot", shot.event_type);
        assert_eq!(Some("Jamie Vardy"), shot.player());
        assert_eq!(Some(Location::new(108.1, 35.3)), shot.location);
        assert_eq!(Some("Saved"), shot.outcome());
        assert_eq!(Some(0.0793), shot.xg);

        let pass = &events[2];
        assert_eq!("Pass", pass.event_type);
        assert_eq!(None, pass.location);
        assert_eq!(None, pass.xg);
    }

    #[test]
    fn decode_event_missing_type() {
        let json = r#"[{"id": "x", "index": 1}]"#;
        let err = decode_events(json.as_bytes(), 1).unwrap_err();
        assert!(err.to_string().contains("missing field `type`"), "{err}");
    }
}
