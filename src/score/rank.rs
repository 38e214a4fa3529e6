use crate::model::TeamStanding;

/// Orders teams by ascending score with pending teams last, then numbers them 1..N.
///
/// Equal scores keep their input order and still get distinct ranks. The tie-breaker
/// value rides along as data and does not affect ordering.
#[must_use]
pub fn rank(teams: Vec<TeamStanding>) -> Vec<TeamStanding> {
    let mut sorted = teams;
    // stable sort keeps input order among equal scores
    sorted.sort_by_key(|t| {
        let score = t.score.value();
        (score.is_none(), score)
    });

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, team)| TeamStanding { rank: i + 1, ..team })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TeamScore;

    fn team(name: &str, score: TeamScore) -> TeamStanding {
        TeamStanding {
            rank: 0,
            team: name.to_string(),
            tie_breaker: None,
            score,
            players: vec![],
        }
    }

    #[test]
    fn ties_get_sequential_ranks_in_input_order() {
        let ranked = rank(vec![
            team("a", TeamScore::Scored(-7)),
            team("b", TeamScore::Scored(-3)),
            team("c", TeamScore::Scored(-7)),
        ]);
        let got: Vec<(&str, usize)> = ranked.iter().map(|t| (t.team.as_str(), t.rank)).collect();
        assert_eq!(got, vec![("a", 1), ("c", 2), ("b", 3)]);
    }

    #[test]
    fn pending_ranks_after_numeric() {
        let ranked = rank(vec![
            team("p", TeamScore::Pending),
            team("big", TeamScore::Scored(500)),
            team("small", TeamScore::Scored(-500)),
        ]);
        let names: Vec<&str> = ranked.iter().map(|t| t.team.as_str()).collect();
        assert_eq!(names, vec!["small", "big", "p"]);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn empty_input() {
        assert!(rank(vec![]).is_empty());
    }
}
