mod common;

use chrono::{Duration, Utc};
use std::path::PathBuf;
use std::sync::Arc;

use common::{CountingFeed, DownFeed, feed_player, team_slots};
use masters_pool::controller::score::{AppState, get_data_for_leaderboard};
use masters_pool::error::PoolError;
use masters_pool::model::ParticipationStatus;
use masters_pool::roster::StaticRoster;

fn state_with(feed: Arc<CountingFeed>, ttl: Duration) -> AppState {
    let roster = StaticRoster(team_slots("Aces", 0, ["a", "b", "c", "d", "e", "f"]));
    AppState::new(Arc::new(roster), feed, ttl, PathBuf::from("data"))
}

fn players() -> Vec<masters_pool::model::PlayerScore> {
    ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|n| feed_player(n, ParticipationStatus::Active, ["E"; 4]))
        .collect()
}

#[tokio::test]
async fn test3_fresh_cache_is_reused() -> Result<(), PoolError> {
    let feed = Arc::new(CountingFeed::new(players()));
    let state = state_with(feed.clone(), Duration::minutes(5));

    let (first, _) = get_data_for_leaderboard(&state).await?;
    let (second, age) = get_data_for_leaderboard(&state).await?;

    assert_eq!(feed.calls(), 1);
    assert_eq!(first.standings, second.standings);
    assert!(age.ends_with("seconds") || age.ends_with("second"));
    Ok(())
}

#[tokio::test]
async fn test3_stale_cache_is_refreshed() -> Result<(), PoolError> {
    let feed = Arc::new(CountingFeed::new(players()));
    let state = state_with(feed.clone(), Duration::minutes(5));

    get_data_for_leaderboard(&state).await?;
    {
        let mut guard = state.cache.write().await;
        if let Some(cached) = guard.as_mut() {
            cached.computed_at = Utc::now() - Duration::minutes(6);
        }
    }
    let (_, age) = get_data_for_leaderboard(&state).await?;

    assert_eq!(feed.calls(), 2);
    assert!(!age.contains("minute"));
    Ok(())
}

#[tokio::test]
async fn test3_failed_refresh_leaves_cache_empty() {
    let roster = StaticRoster(team_slots("Aces", 0, ["a", "b", "c", "d", "e", "f"]));
    let state = AppState::new(
        Arc::new(roster),
        Arc::new(DownFeed { with_fallback: false }),
        Duration::minutes(5),
        PathBuf::from("data"),
    );

    assert!(get_data_for_leaderboard(&state).await.is_err());
    assert!(state.cache.read().await.is_none());
}
