//! ttscrape CLI
//!
//! Scrapes a rank range from the TwitchTracker leaderboard and writes the
//! usernames to a CSV file. Individual page failures are reported but do
//! not fail the run; only setup errors (bad range, unwritable output) do.

use std::path::PathBuf;

use clap::Parser;
use ttscrape::{
    error::Result,
    models::{Config, ItemRange},
    services::RankScraper,
    sink,
};

/// ttscrape - TwitchTracker username scraper
#[derive(Parser, Debug)]
#[command(name = "ttscrape", version, about = "TwitchTracker username scraper")]
struct Cli {
    /// Output CSV path
    #[arg(default_value = "twitch_usernames.csv")]
    output: PathBuf,

    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// First rank to fetch (overrides the configured range)
    #[arg(long)]
    start: Option<u64>,

    /// Last rank to fetch (overrides the configured range)
    #[arg(long)]
    end: Option<u64>,

    /// Language filter (e.g. "english")
    #[arg(short, long)]
    language: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.validate()?;

    if let Some(language) = cli.language {
        config.scraper.language = Some(language);
    }

    let start = cli.start.unwrap_or(config.range.start);
    let end = cli.end.unwrap_or(config.range.end);
    let range = ItemRange::new(start, end)?;

    log::info!(
        "Scraping ranks {}..{} from {}",
        range.start(),
        range.end(),
        config.scraper.base_url
    );

    let scraper = RankScraper::new(&config.scraper)?;
    let outcome = scraper.scrape(&range).await?;

    for failure in &outcome.failures {
        log::warn!("Page {} failed: {}", failure.page, failure.reason);
    }

    sink::write_csv(&outcome.usernames, &cli.output)?;

    log::info!(
        "Wrote {} usernames to {} ({} of {} pages failed)",
        outcome.usernames.len(),
        cli.output.display(),
        outcome.failures.len(),
        outcome.page_total
    );

    Ok(())
}
