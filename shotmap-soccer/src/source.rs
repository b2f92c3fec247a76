//! Sources of match and event data.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use shotmap::file::FileError;
use thiserror::Error;
use tracing::debug;

use crate::data;
use crate::domain::{Event, Match};

/// The StatsBomb open-data repository, as served raw over HTTPS.
pub const OPEN_DATA_URL: &str = "https://raw.githubusercontent.com/statsbomb/open-data/master/data";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("undecodable data from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    File(#[from] FileError),
}

/// Lists matches for a competition/season and events for a match. Every failure is surfaced to
/// the caller; implementations do not retry.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    async fn matches(&self, competition_id: u32, season_id: u32) -> Result<Vec<Match>, SourceError>;

    async fn events(&self, match_id: u64) -> Result<Vec<Event>, SourceError>;
}

fn matches_path(competition_id: u32, season_id: u32) -> String {
    format!("matches/{competition_id}/{season_id}.json")
}

fn events_path(match_id: u64) -> String {
    format!("events/{match_id}.json")
}

/// Fetches the open-data JSON feeds over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
}
impl RemoteSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shotmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SourceError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    async fn get(&self, path: &str) -> Result<(String, Vec<u8>), SourceError> {
        let url = self.url(path);
        debug!("fetching {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { url, status });
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| SourceError::Request {
                url: url.clone(),
                source,
            })?;
        Ok((url, body.to_vec()))
    }
}

impl EventSource for RemoteSource {
    async fn matches(&self, competition_id: u32, season_id: u32) -> Result<Vec<Match>, SourceError> {
        let (url, body) = self.get(&matches_path(competition_id, season_id)).await?;
        data::decode_matches(&body).map_err(|source| SourceError::Decode {
            origin: url,
            source,
        })
    }

    async fn events(&self, match_id: u64) -> Result<Vec<Event>, SourceError> {
        let (url, body) = self.get(&events_path(match_id)).await?;
        data::decode_events(&body, match_id).map_err(|source| SourceError::Decode {
            origin: url,
            source,
        })
    }
}

/// Reads the open-data JSON feeds from a local checkout. The root is the repository's `data`
/// directory, i.e., the one containing `matches/` and `events/`.
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}
impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read(&self, path: &str) -> Result<(PathBuf, Vec<u8>), SourceError> {
        let path = self.root.join(path);
        debug!("reading {}", path.display());
        let body = tokio::fs::read(&path).await.map_err(|source| {
            SourceError::File(FileError::Io {
                path: path.clone(),
                source,
            })
        })?;
        Ok((path, body))
    }
}

impl EventSource for LocalSource {
    async fn matches(&self, competition_id: u32, season_id: u32) -> Result<Vec<Match>, SourceError> {
        let (path, body) = self.read(&matches_path(competition_id, season_id)).await?;
        data::decode_matches(&body).map_err(|source| SourceError::Decode {
            origin: path.display().to_string(),
            source,
        })
    }

    async fn events(&self, match_id: u64) -> Result<Vec<Event>, SourceError> {
        let (path, body) = self.read(&events_path(match_id)).await?;
        data::decode_events(&body, match_id).map_err(|source| SourceError::Decode {
            origin: path.display().to_string(),
            source,
        })
    }
}
