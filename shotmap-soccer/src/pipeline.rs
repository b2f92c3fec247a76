//! The end-to-end analysis: select a team's matches, aggregate one player's events across them,
//! and summarise and plot the result.

use shotmap::colour::ColourScale;
use thiserror::Error;
use tracing::{debug, info};

use crate::aggregate::{aggregate, Aggregation};
use crate::config::{Config, ValidationError};
use crate::domain::Match;
use crate::filter::player_events;
use crate::plot::{PlotError, ShotMap};
use crate::selection::select_matches;
use crate::source::{EventSource, SourceError};
use crate::stats::{outcome_breakdown, OutcomeBreakdown, ShotSummary};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("no matches for {team} in competition {competition_id}, season {season_id}")]
    NoMatches {
        team: String,
        competition_id: u32,
        season_id: u32,
    },

    #[error("no {event_type} events by {player} in {matches} processed match(es)")]
    NoQualifyingData {
        player: String,
        event_type: String,
        matches: usize,
    },
}

#[derive(Debug)]
pub struct Analysis {
    /// The team's matches, in the order they were listed by the source.
    pub selected: Vec<Match>,
    pub aggregation: Aggregation,
    pub breakdown: OutcomeBreakdown,
    pub summary: ShotSummary,
    pub season_name: String,
}

#[derive(Debug)]
pub struct Pipeline {
    config: Config,
}
impl Pipeline {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run<S: EventSource>(&self, source: &S) -> Result<Analysis, PipelineError> {
        let config = &self.config;
        let matches = source
            .matches(config.competition_id, config.season_id)
            .await?;
        debug!(
            "competition {}, season {}: {} matches",
            config.competition_id,
            config.season_id,
            matches.len()
        );
        let selected = select_matches(&matches, &config.team);
        if selected.is_empty() {
            return Err(PipelineError::NoMatches {
                team: config.team.clone(),
                competition_id: config.competition_id,
                season_id: config.season_id,
            });
        }
        info!("{} played {} matches", config.team, selected.len());

        let aggregation = aggregate(
            source,
            &selected,
            player_events(&config.player, &config.event_type),
            config.match_limit,
        )
        .await?;
        if aggregation.events.is_empty() {
            return Err(PipelineError::NoQualifyingData {
                player: config.player.clone(),
                event_type: config.event_type.clone(),
                matches: aggregation.processed.len(),
            });
        }

        let breakdown = outcome_breakdown(&aggregation.events);
        let summary = ShotSummary::from(aggregation.events.as_slice());
        let season_name = selected
            .first()
            .map(|m| m.season_name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("season {}", config.season_id));
        Ok(Analysis {
            selected: selected.into_iter().cloned().collect(),
            aggregation,
            breakdown,
            summary,
            season_name,
        })
    }

    pub fn title(&self, analysis: &Analysis) -> String {
        format!(
            "{}'s {} Clusters ({})",
            self.config.player, self.config.event_type, analysis.season_name
        )
    }

    pub fn plot(&self, analysis: &Analysis) -> Result<ShotMap, PlotError> {
        ShotMap::layout(
            self.title(analysis),
            &analysis.aggregation.events,
            self.config.colour_norm,
            &ColourScale::magma(),
        )
    }
}

impl TryFrom<Config> for Pipeline {
    type Error = ValidationError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self { config })
    }
}
