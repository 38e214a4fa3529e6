use async_trait::async_trait;

use super::ScoreFeed;
use crate::error::PoolError;
use crate::model::{ParticipationStatus, PlayerScore, RawScore, RoundResult, RoundStatus};

fn round(score: Option<i64>, round_status: RoundStatus) -> RoundResult {
    RoundResult {
        score: score.map(RawScore::Int),
        round_status,
    }
}

fn sample_player(name: &str, position: &str, total: &str, rounds: [Option<i64>; 3]) -> PlayerScore {
    let [r1, r2, r3] = rounds;
    PlayerScore {
        name: name.to_string(),
        position: position.to_string(),
        status: ParticipationStatus::Active,
        rounds: [
            round(r1, RoundStatus::Finished),
            round(r2, RoundStatus::Finished),
            round(r3, RoundStatus::Playing),
            round(None, RoundStatus::Pre),
        ],
        total: Some(RawScore::Text(total.to_string())),
        country: "USA".to_string(),
        amateur: false,
        past_champion: name == "Scottie Scheffler",
    }
}

/// A handful of hard-coded players used when the live feed can't be reached.
#[must_use]
pub fn sample_players() -> Vec<PlayerScore> {
    vec![
        sample_player("Scottie Scheffler", "1", "-7", [Some(-6), Some(0), Some(-1)]),
        sample_player("Collin Morikawa", "2", "-6", [Some(-1), Some(-2), Some(-3)]),
        sample_player("Max Homa", "T3", "-5", [Some(-5), Some(-1), Some(1)]),
    ]
}

/// Feed that never touches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleFeed;

#[async_trait]
impl ScoreFeed for SampleFeed {
    async fn fetch_scores(&self) -> Result<Vec<PlayerScore>, PoolError> {
        Ok(sample_players())
    }
}
