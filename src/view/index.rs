use maud::{DOCTYPE, Markup, html};

use crate::model::{Leaderboard, ReconciledPlayer, TeamStanding, format_to_par};

pub const DEFAULT_INDEX_TITLE: &str = "Masters Pool Leaderboard";

fn score_cell(v: Option<i32>) -> String {
    v.map_or_else(|| "-".to_string(), format_to_par)
}

fn player_row(p: &ReconciledPlayer) -> Markup {
    html! {
        tr.unscored[p.total.is_none()] {
            td { (p.tier) }
            td { (p.name) }
            td class="status" { (p.status.note()) }
            @for r in &p.rounds {
                td class="round" { (score_cell(*r)) }
            }
            td class="total" { (score_cell(p.total)) }
        }
    }
}

fn team_table(team: &TeamStanding) -> Markup {
    html! {
        div class="team" {
            h2 {
                span class="rank" { (team.rank) ". " }
                (team.team)
                " "
                span class="team-score" {
                    (team.score.value().map_or_else(|| "pending".to_string(), format_to_par))
                }
            }
            @if let Some(tie) = team.tie_breaker {
                p class="tie-breaker" { "Tie breaker: " (tie) }
            }
            table {
                thead {
                    tr {
                        th { "Tier" } th { "Player" } th { "" }
                        th { "Rd1" } th { "Rd2" } th { "Rd3" } th { "Rd4" } th { "Total" }
                    }
                }
                tbody {
                    @for p in &team.players {
                        (player_row(p))
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_leaderboard_page(
    title: &str,
    leaderboard: &Leaderboard,
    last_refresh: &str,
) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
        }
        body {
            h1 { (title) }
            p class="refresh" {
                "Updated " (last_refresh) " ago from " (leaderboard.feed_source.to_string())
            }
            @for team in &leaderboard.standings {
                (team_table(team))
            }
            @if !leaderboard.warnings.is_empty() {
                details class="warnings" {
                    summary { (leaderboard.warnings.len()) " data warnings" }
                    ul {
                        @for w in &leaderboard.warnings {
                            li { (w.to_string()) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FeedSource, TeamScore};

    #[test]
    fn renders_pending_team() {
        let lb = Leaderboard {
            standings: vec![TeamStanding {
                rank: 1,
                team: "Aces".to_string(),
                tie_breaker: Some(-8),
                score: TeamScore::Pending,
                players: vec![],
            }],
            warnings: vec![],
            feed_source: FeedSource::Fallback,
        };
        let page = render_leaderboard_page(DEFAULT_INDEX_TITLE, &lb, "3 minutes").into_string();
        assert!(page.contains("Aces"));
        assert!(page.contains("pending"));
        assert!(page.contains("Tie breaker: -8"));
        assert!(page.contains("sample data"));
    }
}
