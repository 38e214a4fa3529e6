use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, Command};

use crate::feed::masters::feed_url_for_year;

/// Parses and validates the command line, exiting with a usage error if it is invalid.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    let ttl = match &args.command {
        Command::Serve { cache_ttl_secs, .. } => Some(*cache_ttl_secs),
        _ => None,
    };
    let feed_url = feed_url_for_year(&args.feed_url, args.year);
    if let Err(msg) = validation::validate(&feed_url, ttl) {
        Args::command().error(ErrorKind::ValueValidation, msg).exit();
    }
    CleanArgs::new(args, feed_url)
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args, feed_url: String) -> Self {
        CleanArgs {
            roster: args.roster,
            feed_url,
            offline: args.offline,
            no_fallback: args.no_fallback,
            command: args.command,
        }
    }
}
