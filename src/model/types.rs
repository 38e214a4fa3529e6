use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::warning::Warning;

pub const ROUND_COUNT: usize = 4;
pub const TEAM_SIZE: usize = 6;

/// A round value exactly as the feed sent it: a JSON number or a token such as `"E"`, `"+3"`, `"-"`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawScore {
    Int(i64),
    Text(String),
}

impl fmt::Display for RawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawScore::Int(i) => write!(f, "{i}"),
            RawScore::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundStatus {
    #[default]
    Pre,
    Playing,
    Finished,
}

impl RoundStatus {
    #[must_use]
    pub fn from_feed(s: &str) -> Self {
        match s {
            "Finished" => RoundStatus::Finished,
            "Playing" => RoundStatus::Playing,
            _ => RoundStatus::Pre,
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundStatus::Pre => "Pre",
            RoundStatus::Playing => "Playing",
            RoundStatus::Finished => "Finished",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct RoundResult {
    pub score: Option<RawScore>,
    pub round_status: RoundStatus,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipationStatus {
    Active,
    Cut,
    Withdrawn,
    NotPlaying,
    Unknown,
}

impl ParticipationStatus {
    /// Short note shown next to a player, empty when nothing noteworthy.
    #[must_use]
    pub fn note(self) -> &'static str {
        match self {
            ParticipationStatus::Cut => "CUT",
            ParticipationStatus::Withdrawn => "WD",
            ParticipationStatus::NotPlaying => "DNP",
            ParticipationStatus::Active | ParticipationStatus::Unknown => "",
        }
    }
}

impl fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParticipationStatus::Active => "active",
            ParticipationStatus::Cut => "cut",
            ParticipationStatus::Withdrawn => "withdrawn",
            ParticipationStatus::NotPlaying => "not playing",
            ParticipationStatus::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// One player as reported by the live feed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerScore {
    pub name: String,
    pub position: String,
    pub status: ParticipationStatus,
    pub rounds: [RoundResult; ROUND_COUNT],
    /// The feed's own to-par aggregate. Shown for reference only, scoring always re-sums the rounds.
    pub total: Option<RawScore>,
    pub country: String,
    pub amateur: bool,
    pub past_champion: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RosterSlot {
    pub team: String,
    pub tie_breaker: Option<i64>,
    pub tier: u8,
    pub player_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReconciledPlayer {
    pub team: String,
    pub tie_breaker: Option<i64>,
    pub tier: u8,
    pub name: String,
    pub status: ParticipationStatus,
    pub position: String,
    #[serde(skip)]
    pub raw_rounds: [Option<RawScore>; ROUND_COUNT],
    pub rounds: [Option<i32>; ROUND_COUNT],
    pub total: Option<i32>,
}

impl ReconciledPlayer {
    /// A roster slot with no feed entry behind it.
    #[must_use]
    pub fn unscored(slot: &RosterSlot) -> Self {
        Self {
            team: slot.team.clone(),
            tie_breaker: slot.tie_breaker,
            tier: slot.tier,
            name: slot.player_name.clone(),
            status: ParticipationStatus::Unknown,
            position: String::new(),
            raw_rounds: Default::default(),
            rounds: [None; ROUND_COUNT],
            total: None,
        }
    }

    #[must_use]
    pub fn from_feed(slot: &RosterSlot, player: &PlayerScore) -> Self {
        Self {
            team: slot.team.clone(),
            tie_breaker: slot.tie_breaker,
            tier: slot.tier,
            name: slot.player_name.clone(),
            status: player.status,
            position: player.position.clone(),
            raw_rounds: player.rounds.clone().map(|r| r.score),
            rounds: [None; ROUND_COUNT],
            total: None,
        }
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.total.is_some()
    }
}

/// Team score after best-4-of-6 aggregation. Serializes as `null` when pending so it never reads as `0`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(from = "Option<i32>", into = "Option<i32>")]
pub enum TeamScore {
    Scored(i32),
    Pending,
}

impl TeamScore {
    #[must_use]
    pub fn value(self) -> Option<i32> {
        match self {
            TeamScore::Scored(v) => Some(v),
            TeamScore::Pending => None,
        }
    }
}

impl From<Option<i32>> for TeamScore {
    fn from(value: Option<i32>) -> Self {
        value.map_or(TeamScore::Pending, TeamScore::Scored)
    }
}

impl From<TeamScore> for Option<i32> {
    fn from(value: TeamScore) -> Self {
        value.value()
    }
}

impl fmt::Display for TeamScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamScore::Scored(v) => write!(f, "{v}"),
            TeamScore::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamStanding {
    pub rank: usize,
    pub team: String,
    pub tie_breaker: Option<i64>,
    pub score: TeamScore,
    pub players: Vec<ReconciledPlayer>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedSource {
    Live,
    Fallback,
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedSource::Live => "live feed",
            FeedSource::Fallback => "sample data",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Leaderboard {
    pub standings: Vec<TeamStanding>,
    pub warnings: Vec<Warning>,
    pub feed_source: FeedSource,
}
