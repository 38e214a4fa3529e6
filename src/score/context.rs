use tracing::{info, warn};

use super::{Outcome, adjust, aggregate, rank, reconcile};
use crate::error::PoolError;
use crate::feed::ScoreFeed;
use crate::model::{FeedSource, Leaderboard, PlayerScore, RosterSlot, TeamStanding};
use crate::roster::RosterSource;

/// reconcile -> adjust -> aggregate -> rank over complete in-memory snapshots.
#[must_use]
pub fn build_leaderboard(
    roster: &[RosterSlot],
    feed: &[PlayerScore],
) -> Outcome<Vec<TeamStanding>> {
    let reconciled = reconcile(roster, feed);
    let adjusted = adjust(&reconciled.value);
    let aggregated = aggregate(adjusted.value);

    let mut warnings = reconciled.warnings;
    warnings.extend(adjusted.warnings);
    warnings.extend(aggregated.warnings);

    Outcome {
        value: rank(aggregated.value),
        warnings,
    }
}

/// Fetches the feed, substituting the provider's fallback data if the fetch fails.
///
/// # Errors
///
/// Returns the fetch error when the provider has no fallback.
pub async fn load_feed(feed: &dyn ScoreFeed) -> Result<(Vec<PlayerScore>, FeedSource), PoolError> {
    match feed.fetch_scores().await {
        Ok(players) => {
            info!("fetched {} players from score feed", players.len());
            Ok((players, FeedSource::Live))
        }
        Err(err) => {
            if let Some(fallback) = feed.fallback_scores() {
                warn!("score feed failed: {err}. Falling back to sample data.");
                Ok((fallback, FeedSource::Fallback))
            } else {
                Err(err)
            }
        }
    }
}

/// Loads roster and feed, then builds the ranked leaderboard.
///
/// # Errors
///
/// Returns `Err` if the roster can't be loaded, or the feed fails with no fallback.
pub async fn load_leaderboard(
    roster: &dyn RosterSource,
    feed: &dyn ScoreFeed,
) -> Result<Leaderboard, PoolError> {
    let slots = roster.load_roster().await?;
    let (players, feed_source) = load_feed(feed).await?;
    let built = build_leaderboard(&slots, &players);
    info!(
        "built leaderboard for {} teams from {feed_source} ({} warnings)",
        built.value.len(),
        built.warnings.len()
    );
    Ok(Leaderboard {
        standings: built.value,
        warnings: built.warnings,
        feed_source,
    })
}
