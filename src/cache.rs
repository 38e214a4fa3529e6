use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::format_time_ago;

pub const DEFAULT_CACHE_TTL: Duration = Duration::minutes(5);

/// A computed value and when it was computed.
#[derive(Debug, Clone)]
pub struct ScoreboardCache<T> {
    pub value: T,
    pub computed_at: DateTime<Utc>,
}

impl<T> ScoreboardCache<T> {
    #[must_use]
    pub fn new(value: T, computed_at: DateTime<Utc>) -> Self {
        Self { value, computed_at }
    }

    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        is_stale(now, self.computed_at, ttl)
    }

    /// "4 minutes" style age for display.
    #[must_use]
    pub fn age_text(&self, now: DateTime<Utc>) -> String {
        format_time_ago(now - self.computed_at)
    }
}

/// Stale once the age strictly exceeds `ttl`.
#[must_use]
pub fn is_stale(now: DateTime<Utc>, computed_at: DateTime<Utc>, ttl: Duration) -> bool {
    now - computed_at > ttl
}

/// Shared slot owned by the web layer; one writer refreshes, readers clone.
pub type SharedCache<T> = Arc<RwLock<Option<ScoreboardCache<T>>>>;

#[must_use]
pub fn new_shared_cache<T>() -> SharedCache<T> {
    Arc::new(RwLock::new(None))
}
