use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cache::DEFAULT_CACHE_TTL;
use crate::feed::masters::DEFAULT_FEED_URL;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Team roster, `.json` or `.csv`.
    #[arg(
        short = 'r',
        long,
        value_name = "ROSTER",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub roster: PathBuf,
    /// Tournament year, substituted for `{year}` in the feed url.
    #[arg(short = 'y', long, value_name = "YEAR", default_value_t = 2025)]
    pub year: i32,
    #[arg(long, value_name = "FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,
    /// Never touch the network, score against the built-in sample players.
    #[arg(long, default_value_t = false)]
    pub offline: bool,
    /// Fail instead of serving sample players when the live feed is down.
    #[arg(long, default_value_t = false, conflicts_with = "offline")]
    pub no_fallback: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web leaderboard.
    Serve {
        #[arg(short = 'b', long, value_name = "ADDR", default_value = "0.0.0.0:5001")]
        bind: String,
        /// Seconds a computed leaderboard is served before it is rebuilt.
        #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_CACHE_TTL.num_seconds())]
        cache_ttl_secs: i64,
        /// Where generated reports are written.
        #[arg(long, value_name = "DIR", default_value = "data")]
        data_dir: PathBuf,
    },
    /// Print the ranked leaderboard once.
    Scoreboard {
        /// Also write the spreadsheet export into this directory.
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },
    /// Print each player's round statuses.
    RoundStatus {
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub roster: PathBuf,
    pub feed_url: String,
    pub offline: bool,
    pub no_fallback: bool,
    pub command: Command,
}
