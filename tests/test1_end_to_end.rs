mod common;

use common::{feed_player, team_slots};
use masters_pool::build_leaderboard;
use masters_pool::model::{ParticipationStatus, TEAM_SIZE, TeamScore, Warning};
use masters_pool::score::CUT_PENALTY;

use ParticipationStatus::{Active, Cut};

#[test]
fn test1_two_teams_with_unmatched_and_cut() -> Result<(), Box<dyn std::error::Error>> {
    let mut roster = team_slots(
        "Fore Play",
        -12,
        [
            "Scottie Scheffler",
            "Rory McIlroy",
            "Ludvig Aberg",
            "Nicolai Hojgaard",
            "Tom Kim",
            "Ghost One",
        ],
    );
    roster.extend(team_slots(
        "Bogey Men",
        -8,
        [
            "Xander Schauffele",
            "Jon Rahm",
            "J.T. Poston",
            "Sergio Garcia",
            "Max Homa",
            "Ghost Two",
        ],
    ));

    let feed = vec![
        feed_player("Scottie Scheffler", Active, ["-4", "-3", "E", "-2"]),
        feed_player("Rory McIlroy", Active, ["+1", "-5", "-1", "-1"]),
        feed_player("Ludvig Åberg", Active, ["-2", "E", "+2", "-1"]),
        feed_player("Nicolai Højgaard", Cut, ["+4", "+3", "-", "-"]),
        feed_player("Tom Kim", Active, ["E", "E", "E", "E"]),
        feed_player("Xander Schauffele", Active, ["-3", "-1", "-2", "E"]),
        feed_player("Jon Rahm", Active, ["+2", "+1", "E", "-1"]),
        feed_player("J. T. Poston", Active, ["-1", "-1", "-1", "-1"]),
        feed_player("Sergio García", Active, ["+3", "E", "+1", "+2"]),
        feed_player("Max Homa", Active, ["-1", "+1", "-1", "+1"]),
    ];

    let out = build_leaderboard(&roster, &feed);
    let standings = out.value;

    assert_eq!(standings.len(), 2);
    for team in &standings {
        assert_eq!(team.players.len(), TEAM_SIZE);
        let tiers: Vec<u8> = team.players.iter().map(|p| p.tier).collect();
        assert_eq!(tiers, vec![1, 2, 3, 4, 5, 6]);
        assert!(matches!(team.score, TeamScore::Scored(_)));
    }

    // Fore Play: -9, -6, -1, 23 (cut), 0, unscored -> best four -9-6-1+0 = -16
    // Bogey Men: -6, 2, -4, 6, 0, unscored -> best four -6-4+0+2 = -8
    assert_eq!(standings[0].team, "Fore Play");
    assert_eq!(standings[0].score, TeamScore::Scored(-16));
    assert_eq!(standings[0].rank, 1);
    assert_eq!(standings[0].tie_breaker, Some(-12));
    assert_eq!(standings[1].team, "Bogey Men");
    assert_eq!(standings[1].score, TeamScore::Scored(-8));
    assert_eq!(standings[1].rank, 2);

    let cut = standings[0]
        .players
        .iter()
        .find(|p| p.name == "Nicolai Hojgaard")
        .ok_or("cut player missing")?;
    assert_eq!(cut.status, Cut);
    assert_eq!(cut.rounds, [Some(4), Some(3), Some(CUT_PENALTY), Some(CUT_PENALTY)]);
    assert_eq!(cut.total, Some(23));

    for team in &standings {
        let ghost = &team.players[5];
        assert_eq!(ghost.rounds, [None; 4]);
        assert_eq!(ghost.total, None);
        assert_eq!(ghost.status, ParticipationStatus::Unknown);
    }

    let unmatched = out
        .warnings
        .iter()
        .filter(|w| matches!(w, Warning::UnmatchedPlayer { .. }))
        .count();
    assert_eq!(unmatched, 2);
    assert!(
        !out.warnings
            .iter()
            .any(|w| matches!(w, Warning::IncompleteTeam { .. }))
    );

    Ok(())
}

#[test]
fn test1_empty_feed_marks_all_teams_pending() {
    let roster = team_slots("Lonely", 0, ["a", "b", "c", "d", "e", "f"]);
    let out = build_leaderboard(&roster, &[]);
    assert_eq!(out.value.len(), 1);
    assert_eq!(out.value[0].players.len(), 6);
    assert_eq!(out.value[0].score, TeamScore::Pending);
    assert_eq!(out.value[0].rank, 1);
    assert!(
        out.warnings
            .iter()
            .any(|w| matches!(w, Warning::IncompleteTeam { scored: 0, .. }))
    );
}

#[test]
fn test1_pending_team_ranks_last() {
    let mut roster = team_slots("Nobody Home", 0, ["a", "b", "c", "d", "e", "f"]);
    roster.extend(team_slots("Bad But Real", 0, ["g", "h", "i", "j", "k", "l"]));
    let feed: Vec<_> = ["g", "h", "i", "j", "k", "l"]
        .iter()
        .map(|n| feed_player(n, Active, ["+9", "+9", "+9", "+9"]))
        .collect();

    let standings = build_leaderboard(&roster, &feed).value;
    assert_eq!(standings[0].team, "Bad But Real");
    assert_eq!(standings[0].score, TeamScore::Scored(144));
    assert_eq!(standings[1].team, "Nobody Home");
    assert_eq!(standings[1].score, TeamScore::Pending);
    assert_eq!(standings[1].rank, 2);
}
