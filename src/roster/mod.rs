pub mod file;

use ahash::RandomState;
use async_trait::async_trait;
use std::collections::HashSet;

use crate::error::PoolError;
use crate::model::{RosterSlot, TEAM_SIZE};

pub use file::{FileRoster, parse_roster_csv, parse_roster_json};

/// Source of the drafted teams.
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn load_roster(&self) -> Result<Vec<RosterSlot>, PoolError>;
}

/// Roster kept in memory, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticRoster(pub Vec<RosterSlot>);

#[async_trait]
impl RosterSource for StaticRoster {
    async fn load_roster(&self) -> Result<Vec<RosterSlot>, PoolError> {
        Ok(self.0.clone())
    }
}

/// One registered team before it is split into tier slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    pub team: String,
    pub tie_breaker: Option<i64>,
    pub players: Vec<String>,
}

/// Checks team names and player counts, then expands each team into six tier slots.
///
/// # Errors
///
/// Returns `InvalidRoster` for an empty or repeated team name, or a team without exactly six named players.
pub fn into_slots(entries: Vec<TeamEntry>) -> Result<Vec<RosterSlot>, PoolError> {
    let mut seen: HashSet<String, RandomState> = HashSet::default();
    let mut slots = Vec::with_capacity(entries.len() * TEAM_SIZE);

    for entry in entries {
        let team = entry.team.trim().to_string();
        if team.is_empty() {
            return Err(PoolError::InvalidRoster("team with an empty name".to_string()));
        }
        if !seen.insert(team.clone()) {
            return Err(PoolError::InvalidRoster(format!("team '{team}' listed twice")));
        }
        if entry.players.len() != TEAM_SIZE {
            return Err(PoolError::InvalidRoster(format!(
                "team '{team}' has {} players, expected {TEAM_SIZE}",
                entry.players.len()
            )));
        }

        for (i, name) in entry.players.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                return Err(PoolError::InvalidRoster(format!(
                    "team '{team}' has no player in tier {}",
                    i + 1
                )));
            }
            slots.push(RosterSlot {
                team: team.clone(),
                tie_breaker: entry.tie_breaker,
                tier: u8::try_from(i + 1).unwrap_or(u8::MAX),
                player_name: name.to_string(),
            });
        }
    }

    Ok(slots)
}
