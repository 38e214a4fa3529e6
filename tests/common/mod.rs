#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use masters_pool::error::PoolError;
use masters_pool::feed::{ScoreFeed, sample_players};
use masters_pool::model::{
    ParticipationStatus, PlayerScore, RawScore, RosterSlot, RoundResult, RoundStatus,
};

pub fn finished(score: &str) -> RoundResult {
    RoundResult {
        score: Some(RawScore::Text(score.to_string())),
        round_status: RoundStatus::Finished,
    }
}

pub fn feed_player(name: &str, status: ParticipationStatus, rounds: [&str; 4]) -> PlayerScore {
    PlayerScore {
        name: name.to_string(),
        position: if status == ParticipationStatus::Cut {
            String::new()
        } else {
            "T10".to_string()
        },
        status,
        rounds: rounds.map(finished),
        total: None,
        country: "USA".to_string(),
        amateur: false,
        past_champion: false,
    }
}

pub fn team_slots(team: &str, tie_breaker: i64, players: [&str; 6]) -> Vec<RosterSlot> {
    players
        .iter()
        .enumerate()
        .map(|(i, name)| RosterSlot {
            team: team.to_string(),
            tie_breaker: Some(tie_breaker),
            tier: u8::try_from(i + 1).unwrap(),
            player_name: (*name).to_string(),
        })
        .collect()
}

/// Feed returning a fixed list and counting how often it was asked.
pub struct CountingFeed {
    pub players: Vec<PlayerScore>,
    pub calls: AtomicUsize,
}

impl CountingFeed {
    pub fn new(players: Vec<PlayerScore>) -> Self {
        Self {
            players,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoreFeed for CountingFeed {
    async fn fetch_scores(&self) -> Result<Vec<PlayerScore>, PoolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.players.clone())
    }
}

/// Feed that is always down, optionally with the sample-data fallback.
pub struct DownFeed {
    pub with_fallback: bool,
}

#[async_trait]
impl ScoreFeed for DownFeed {
    async fn fetch_scores(&self) -> Result<Vec<PlayerScore>, PoolError> {
        Err(PoolError::FeedUnavailable("connection refused".to_string()))
    }

    fn fallback_scores(&self) -> Option<Vec<PlayerScore>> {
        self.with_fallback.then(sample_players)
    }
}
