use tracing::{debug, warn};

use super::Outcome;
use super::grouping::group_by_team;
use crate::model::{ReconciledPlayer, TeamScore, TeamStanding, Warning};

/// Totals that count toward a team score; the rest are dropped.
pub const COUNTED_TOTALS: usize = 4;

/// Best-4 team score. Unscored totals sort after every real total; a team whose best four
/// would include one of them is pending.
#[must_use]
pub fn team_score(totals: &[Option<i32>]) -> TeamScore {
    let mut sorted = totals.to_vec();
    sorted.sort_by_key(|t| (t.is_none(), *t));

    let best: Option<Vec<i32>> = sorted.into_iter().take(COUNTED_TOTALS).collect();
    match best {
        Some(best) if best.len() == COUNTED_TOTALS => {
            TeamScore::Scored(best.iter().fold(0i32, |acc, t| acc.saturating_add(*t)))
        }
        _ => TeamScore::Pending,
    }
}

/// Groups scored players into unranked team standings.
#[must_use]
pub fn aggregate(players: Vec<ReconciledPlayer>) -> Outcome<Vec<TeamStanding>> {
    let mut warnings = Vec::new();
    let mut standings = Vec::new();

    for (team, members) in group_by_team(players) {
        let totals: Vec<Option<i32>> = members.iter().map(|p| p.total).collect();
        let score = team_score(&totals);
        debug!("team {team} totals {totals:?} -> {score}");

        if score == TeamScore::Pending {
            let w = Warning::IncompleteTeam {
                team: team.clone(),
                scored: totals.iter().flatten().count(),
            };
            warn!("{w}");
            warnings.push(w);
        }

        standings.push(TeamStanding {
            rank: 0,
            tie_breaker: members.first().and_then(|p| p.tie_breaker),
            team,
            score,
            players: members,
        });
    }

    Outcome {
        value: standings,
        warnings,
    }
}
