use chrono::{Duration, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::cache::{ScoreboardCache, SharedCache, new_shared_cache};
use crate::error::PoolError;
use crate::feed::ScoreFeed;
use crate::model::Leaderboard;
use crate::roster::RosterSource;
use crate::score::load_leaderboard;

/// Everything the web handlers share.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<dyn RosterSource>,
    pub feed: Arc<dyn ScoreFeed>,
    pub cache: SharedCache<Leaderboard>,
    pub cache_ttl: Duration,
    pub data_dir: PathBuf,
    pub title: String,
}

impl AppState {
    #[must_use]
    pub fn new(
        roster: Arc<dyn RosterSource>,
        feed: Arc<dyn ScoreFeed>,
        cache_ttl: Duration,
        data_dir: PathBuf,
    ) -> Self {
        Self {
            roster,
            feed,
            cache: new_shared_cache(),
            cache_ttl,
            data_dir,
            title: crate::view::index::DEFAULT_INDEX_TITLE.to_string(),
        }
    }
}

/// Serves the cached leaderboard, recomputing it once it is older than the TTL.
/// Returns the leaderboard and how long ago it was computed.
///
/// # Errors
///
/// Will return `Err` if the leaderboard has to be rebuilt and the roster or feed fails
pub async fn get_data_for_leaderboard(
    state: &AppState,
) -> Result<(Leaderboard, String), PoolError> {
    {
        let guard = state.cache.read().await;
        if let Some(cached) = guard.as_ref() {
            let now = Utc::now();
            if !cached.is_stale(now, state.cache_ttl) {
                return Ok((cached.value.clone(), cached.age_text(now)));
            }
        }
    }

    let mut guard = state.cache.write().await;
    // another request may have refreshed while we waited for the write lock
    if let Some(cached) = guard.as_ref() {
        let now = Utc::now();
        if !cached.is_stale(now, state.cache_ttl) {
            return Ok((cached.value.clone(), cached.age_text(now)));
        }
    }

    info!("refreshing leaderboard cache");
    let leaderboard = load_leaderboard(state.roster.as_ref(), state.feed.as_ref()).await?;
    let fresh = ScoreboardCache::new(leaderboard, Utc::now());
    let out = (fresh.value.clone(), fresh.age_text(fresh.computed_at));
    *guard = Some(fresh);
    Ok(out)
}
