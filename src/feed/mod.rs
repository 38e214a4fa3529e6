pub mod masters;
pub mod sample;

use async_trait::async_trait;

use crate::error::PoolError;
use crate::model::PlayerScore;

pub use masters::{MastersFeedClient, parse_feed};
pub use sample::{SampleFeed, sample_players};

/// Live per-player scoring source.
#[async_trait]
pub trait ScoreFeed: Send + Sync {
    async fn fetch_scores(&self) -> Result<Vec<PlayerScore>, PoolError>;

    /// Data to fall back on when `fetch_scores` fails. `None` means propagate the failure.
    fn fallback_scores(&self) -> Option<Vec<PlayerScore>> {
        None
    }
}
