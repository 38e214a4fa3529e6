use masters_pool::args::{self, CleanArgs, Command};
use masters_pool::controller::score::AppState;
use masters_pool::controller::score::http_handlers::configure;
use masters_pool::feed::{MastersFeedClient, SampleFeed, ScoreFeed};
use masters_pool::roster::FileRoster;
use masters_pool::score::{load_feed, load_leaderboard};
use masters_pool::view::export::export_scoreboard;
use masters_pool::view::round_status::{
    export_round_status, render_round_status_text, round_status_report,
};
use masters_pool::view::text::render_leaderboard_text;

use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = args::args_checks();

    let feed = build_feed(&args);
    let roster = FileRoster::new(args.roster.clone());
    info!("roster from {}", roster.path().display());

    match args.command.clone() {
        Command::Serve {
            bind,
            cache_ttl_secs,
            data_dir,
        } => {
            let state = AppState::new(
                Arc::new(roster),
                feed,
                chrono::Duration::seconds(cache_ttl_secs),
                data_dir,
            );
            info!("serving leaderboard on {bind}");
            HttpServer::new(move || {
                App::new()
                    .app_data(Data::new(state.clone()))
                    .configure(configure)
            })
            .bind(bind)?
            .run()
            .await?;
        }
        Command::Scoreboard { export } => {
            let leaderboard = load_leaderboard(&roster, feed.as_ref()).await?;
            print!("{}", render_leaderboard_text(&leaderboard.standings));
            for w in &leaderboard.warnings {
                warn!("{w}");
            }
            if let Some(dir) = export {
                let path = export_scoreboard(&dir, &leaderboard.standings)?;
                println!("Spreadsheet written to {}", path.display());
            }
        }
        Command::RoundStatus { export } => {
            let (players, source) = load_feed(feed.as_ref()).await?;
            info!("round status from {source}");
            let report = round_status_report(&players);
            print!("{}", render_round_status_text(&report));
            if let Some(dir) = export {
                let path = export_round_status(&dir, &report)?;
                println!("Round status written to {}", path.display());
            }
        }
    }
    Ok(())
}

fn build_feed(args: &CleanArgs) -> Arc<dyn ScoreFeed> {
    if args.offline {
        info!("offline mode, using sample players");
        Arc::new(SampleFeed)
    } else {
        let client = MastersFeedClient::new(args.feed_url.clone());
        let client = if args.no_fallback {
            client.without_fallback()
        } else {
            client
        };
        info!("scores from {}", client.url());
        Arc::new(client)
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
