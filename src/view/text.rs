use std::fmt::Write as _;

use crate::model::{TeamStanding, format_to_par};

fn cell(v: Option<i32>) -> String {
    v.map_or_else(|| "-".to_string(), format_to_par)
}

/// Plain-text leaderboard for the terminal.
#[must_use]
pub fn render_leaderboard_text(standings: &[TeamStanding]) -> String {
    let mut out = String::new();
    for team in standings {
        let tie = team
            .tie_breaker
            .map_or_else(String::new, |t| format!(" (tie breaker {t})"));
        let _ = writeln!(
            out,
            "{:>3}. {:<28} {:>8}{tie}",
            team.rank,
            team.team,
            team.score.value().map_or_else(|| "pending".to_string(), format_to_par)
        );
        for p in &team.players {
            let [r1, r2, r3, r4] = p.rounds.map(cell);
            let _ = writeln!(
                out,
                "      {} {:<26} {:>4} {r1:>4} {r2:>4} {r3:>4} {r4:>4} = {:>4}",
                p.tier,
                p.name,
                p.status.note(),
                cell(p.total)
            );
        }
        out.push('\n');
    }
    out
}
