use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use shotmap::file::{write_text, WriteJsonFile};
use shotmap_soccer::config::{self, Config, MatchLimit, ValidationError};
use shotmap_soccer::pipeline::Pipeline;
use shotmap_soccer::pitch::Canvas;
use shotmap_soccer::plot::ColourNorm;
use shotmap_soccer::print;
use shotmap_soccer::source::{EventSource, LocalSource, RemoteSource, OPEN_DATA_URL};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// competition ID
    #[clap(short = 'c', long, default_value_t = config::DEFAULT_COMPETITION_ID)]
    competition: u32,

    /// season ID
    #[clap(short = 's', long, default_value_t = config::DEFAULT_SEASON_ID)]
    season: u32,

    /// team whose matches are analysed
    #[clap(short = 't', long, default_value = config::DEFAULT_TEAM)]
    team: String,

    /// player whose events are plotted
    #[clap(short = 'p', long, default_value = config::DEFAULT_PLAYER)]
    player: String,

    /// event type to select
    #[clap(short = 'e', long = "event-type", default_value = config::DEFAULT_EVENT_TYPE)]
    event_type: String,

    /// number of the team's matches to process ('all' for the whole season)
    #[clap(short = 'n', long = "match-limit", default_value_t = config::DEFAULT_MATCH_LIMIT)]
    match_limit: MatchLimit,

    /// process every match of the season
    #[clap(long = "all-matches", conflicts_with = "match_limit")]
    all_matches: bool,

    /// local open-data directory to source the data from
    #[clap(short = 'd', long)]
    dir: Option<PathBuf>,

    /// base URL of the open-data service
    #[clap(long = "base-url", default_value = OPEN_DATA_URL)]
    base_url: String,

    /// HTTP request timeout, in seconds
    #[clap(long, default_value_t = 30)]
    timeout: u64,

    /// where to write the SVG shot map to
    #[clap(short = 'o', long, default_value = "shot_map.svg")]
    out: PathBuf,

    /// where to write the aggregated events to, as JSON
    #[clap(long)]
    dump: Option<PathBuf>,

    /// normalise xG colours across all outcomes, rather than within each outcome
    #[clap(long = "global-colour")]
    global_colour: bool,
}
impl Args {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout == 0 {
            return Err(anyhow!("timeout must be at least 1 second").into());
        }
        Ok(())
    }

    fn config(&self) -> Config {
        Config {
            competition_id: self.competition,
            season_id: self.season,
            team: self.team.clone(),
            player: self.player.clone(),
            event_type: self.event_type.clone(),
            match_limit: if self.all_matches {
                MatchLimit::All
            } else {
                self.match_limit
            },
            colour_norm: if self.global_colour {
                ColourNorm::Global
            } else {
                ColourNorm::PerOutcome
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");
    let pipeline = Pipeline::try_from(args.config())?;
    debug!("config: {:?}", pipeline.config());

    match &args.dir {
        Some(dir) => {
            info!("sourcing data from {}", dir.display());
            analyse(&pipeline, &LocalSource::new(dir), &args).await?;
        }
        None => {
            info!("sourcing data from {}", args.base_url);
            let source = RemoteSource::new(&args.base_url, Duration::from_secs(args.timeout))?;
            analyse(&pipeline, &source, &args).await?;
        }
    }
    Ok(())
}

async fn analyse<S: EventSource>(
    pipeline: &Pipeline,
    source: &S,
    args: &Args,
) -> anyhow::Result<()> {
    let analysis = pipeline.run(source).await?;
    let selected = analysis.selected.iter().collect::<Vec<_>>();
    debug!(
        "Matches:\n{}",
        Console::default().render(&print::tabulate_matches(
            &selected,
            &analysis.aggregation.processed
        ))
    );
    info!(
        "Shot outcome percentages:\n{}",
        Console::default().render(&print::tabulate_outcomes(&analysis.breakdown))
    );
    if analysis.breakdown.untabulated > 0 {
        warn!(
            "{} event(s) carried no outcome and were not tabulated",
            analysis.breakdown.untabulated
        );
    }
    info!(
        "Summary:\n{}",
        Console::default().render(&print::tabulate_summary(&analysis.summary))
    );

    let map = pipeline.plot(&analysis)?;
    if map.dropped_count() > 0 {
        warn!(
            "{} event(s) with unmapped outcomes left off the plot",
            map.dropped_count()
        );
    }
    debug!(
        "Plotted:\n{}",
        Console::default().render(&print::tabulate_plot(&map))
    );
    let svg = map.render(&Canvas::default());
    write_text(&args.out, &svg.render())
        .with_context(|| format!("writing shot map to {}", args.out.display()))?;
    info!("wrote {} shots to {}", map.points.len(), args.out.display());

    if let Some(dump) = &args.dump {
        analysis
            .aggregation
            .events
            .write_json_file(dump)
            .with_context(|| format!("dumping events to {}", dump.display()))?;
        info!(
            "dumped {} events to {}",
            analysis.aggregation.events.len(),
            dump.display()
        );
    }
    Ok(())
}
