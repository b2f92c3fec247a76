use shotmap::timed::Timed;
use tracing::{debug, info};

use crate::config::MatchLimit;
use crate::domain::{Event, Match};
use crate::filter::{retain_events, PredicateClosure};
use crate::source::{EventSource, SourceError};

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub events: Vec<Event>,
    /// IDs of the matches whose events were fetched, in processing order.
    pub processed: Vec<u64>,
}

/// Fetches the events of each match in turn, keeping those admitted by the predicate, and stops
/// once `limit` matches have been processed. Matches past the limit are never fetched. The first
/// failed fetch aborts the aggregation.
pub async fn aggregate<S: EventSource>(
    source: &S,
    matches: &[&Match],
    closurelike: impl Into<PredicateClosure>,
    limit: MatchLimit,
) -> Result<Aggregation, SourceError> {
    let mut closure = closurelike.into();
    let mut events = vec![];
    let mut processed = vec![];
    for m in matches.iter().take(limit.count()) {
        let fetched = Timed::future(source.events(m.id)).await?;
        let total = fetched.value.len();
        let kept = retain_events(fetched.value, &mut closure);
        debug!(
            "match {} ({}): kept {} of {total} events, fetched in {:?}",
            m.id,
            m.fixture(),
            kept.len(),
            fetched.elapsed
        );
        events.extend(kept);
        processed.push(m.id);
    }
    info!(
        "processed {} of {} matches, kept {} events",
        processed.len(),
        matches.len(),
        events.len()
    );
    Ok(Aggregation { events, processed })
}
