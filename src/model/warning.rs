use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable data-quality problems found while scoring. None of these stop a pass.
#[derive(Error, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    #[error("{player} (team {team}, tier {tier}) not found in feed, normalized as '{normalized}'")]
    UnmatchedPlayer {
        team: String,
        player: String,
        tier: u8,
        normalized: String,
    },
    #[error("feed has more than one player normalizing to '{normalized}', keeping the last one")]
    DuplicateFeedName { normalized: String },
    #[error("could not convert round {round} score '{raw}' for {player}, using 0")]
    UnparseableScore {
        player: String,
        round: usize,
        raw: String,
    },
    #[error("team {team} has only {scored} scored players, score pending")]
    IncompleteTeam { team: String, scored: usize },
}
