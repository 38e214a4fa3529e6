use serde::Serialize;
use serde_json::{Value, json};

use crate::model::{Leaderboard, PlayerScore, ROUND_COUNT, ReconciledPlayer, TeamStanding, Warning};

#[derive(Serialize, Debug)]
pub struct PlayerView<'a> {
    pub name: &'a str,
    pub tier: u8,
    pub status: &'static str,
    pub position: &'a str,
    /// `null` for an unscored round, never folded into 0.
    pub rounds: [Option<i32>; ROUND_COUNT],
    pub total: Option<i32>,
}

#[derive(Serialize, Debug)]
pub struct TeamView<'a> {
    pub rank: usize,
    pub team: &'a str,
    pub tie_breaker: Option<i64>,
    /// `null` while the team score is pending.
    pub score: Option<i32>,
    pub players: Vec<PlayerView<'a>>,
}

impl<'a> From<&'a ReconciledPlayer> for PlayerView<'a> {
    fn from(p: &'a ReconciledPlayer) -> Self {
        Self {
            name: &p.name,
            tier: p.tier,
            status: p.status.note(),
            position: &p.position,
            rounds: p.rounds,
            total: p.total,
        }
    }
}

impl<'a> From<&'a TeamStanding> for TeamView<'a> {
    fn from(t: &'a TeamStanding) -> Self {
        Self {
            rank: t.rank,
            team: &t.team,
            tie_breaker: t.tie_breaker,
            score: t.score.value(),
            players: t.players.iter().map(PlayerView::from).collect(),
        }
    }
}

#[must_use]
pub fn team_views(standings: &[TeamStanding]) -> Vec<TeamView<'_>> {
    standings.iter().map(TeamView::from).collect()
}

#[must_use]
pub fn team_scores_json(leaderboard: &Leaderboard, last_refresh: &str) -> Value {
    json!({
        "success": true,
        "data": team_views(&leaderboard.standings),
        "warnings": leaderboard.warnings.iter().map(Warning::to_string).collect::<Vec<_>>(),
        "feed_source": leaderboard.feed_source.to_string(),
        "last_refresh": last_refresh,
    })
}

#[must_use]
pub fn feed_json(players: &[PlayerScore]) -> Value {
    json!({ "success": true, "data": players })
}

#[must_use]
pub fn error_json(message: &str) -> Value {
    json!({ "success": false, "error": message })
}
