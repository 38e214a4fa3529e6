use ahash::RandomState;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::Outcome;
use super::grouping::group_by_team;
use super::normalize::normalize_name;
use crate::model::{PlayerScore, ReconciledPlayer, RosterSlot, Warning};

pub type FeedIndex<'a> = HashMap<String, &'a PlayerScore, RandomState>;

/// Feed players keyed by normalized name. On a key collision the later entry wins.
#[must_use]
pub fn index_feed<'a>(feed: &'a [PlayerScore], warnings: &mut Vec<Warning>) -> FeedIndex<'a> {
    let mut index: FeedIndex<'a> = HashMap::default();
    for player in feed {
        let key = normalize_name(&player.name);
        if !player.status.note().is_empty() {
            debug!("{}: {}", key, player.status.note());
        }
        if index.insert(key.clone(), player).is_some() {
            let w = Warning::DuplicateFeedName { normalized: key };
            warn!("{w}");
            warnings.push(w);
        }
    }
    index
}

/// Joins one roster slot to its feed entry.
///
/// # Errors
///
/// Returns `Warning::UnmatchedPlayer` if no feed player has the same normalized name.
pub fn match_slot(slot: &RosterSlot, index: &FeedIndex<'_>) -> Result<ReconciledPlayer, Warning> {
    let key = normalize_name(&slot.player_name);
    match index.get(&key) {
        Some(player) => Ok(ReconciledPlayer::from_feed(slot, player)),
        None => Err(Warning::UnmatchedPlayer {
            team: slot.team.clone(),
            player: slot.player_name.clone(),
            tier: slot.tier,
            normalized: key,
        }),
    }
}

/// One `ReconciledPlayer` per roster slot, grouped by team with tiers ascending.
/// Unmatched slots come back unscored with a warning; the pass never fails.
#[must_use]
pub fn reconcile(roster: &[RosterSlot], feed: &[PlayerScore]) -> Outcome<Vec<ReconciledPlayer>> {
    let mut warnings = Vec::new();
    let index = index_feed(feed, &mut warnings);

    let mut players = Vec::with_capacity(roster.len());
    for (_team, slots) in group_by_team(roster.to_vec()) {
        for slot in &slots {
            match match_slot(slot, &index) {
                Ok(player) => players.push(player),
                Err(w) => {
                    warn!("{w}");
                    warnings.push(w);
                    players.push(ReconciledPlayer::unscored(slot));
                }
            }
        }
    }

    Outcome {
        value: players,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParticipationStatus, RawScore, RoundResult, RoundStatus};

    fn feed_player(name: &str, r1: i64) -> PlayerScore {
        let mut rounds: [RoundResult; 4] = Default::default();
        rounds[0] = RoundResult {
            score: Some(RawScore::Int(r1)),
            round_status: RoundStatus::Finished,
        };
        PlayerScore {
            name: name.to_string(),
            position: "T1".to_string(),
            status: ParticipationStatus::Active,
            rounds,
            total: None,
            country: String::new(),
            amateur: false,
            past_champion: false,
        }
    }

    fn slot(team: &str, tier: u8, name: &str) -> RosterSlot {
        RosterSlot {
            team: team.to_string(),
            tie_breaker: Some(-10),
            tier,
            player_name: name.to_string(),
        }
    }

    #[test]
    fn matches_through_normalization() {
        let feed = vec![feed_player("Nicolai Højgaard", -2)];
        let roster = vec![slot("a", 1, "NICOLAI HOJGAARD")];
        let out = reconcile(&roster, &feed);
        assert!(out.warnings.is_empty());
        assert_eq!(out.value[0].status, ParticipationStatus::Active);
        assert_eq!(out.value[0].raw_rounds[0], Some(RawScore::Int(-2)));
        assert_eq!(out.value[0].name, "NICOLAI HOJGAARD");
    }

    #[test]
    fn empty_feed_keeps_every_slot() {
        let roster: Vec<RosterSlot> = (1..=6).map(|t| slot("a", t, "Nobody")).collect();
        let out = reconcile(&roster, &[]);
        assert_eq!(out.value.len(), roster.len());
        assert_eq!(out.warnings.len(), 6);
        assert!(
            out.value
                .iter()
                .all(|p| p.status == ParticipationStatus::Unknown && p.total.is_none())
        );
    }

    #[test]
    fn duplicate_feed_name_last_wins() {
        let feed = vec![feed_player("Tom Kim", 1), feed_player("tom kim", 5)];
        let roster = vec![slot("a", 1, "Tom Kim")];
        let out = reconcile(&roster, &feed);
        assert_eq!(out.value[0].raw_rounds[0], Some(RawScore::Int(5)));
        assert!(matches!(
            out.warnings.as_slice(),
            [Warning::DuplicateFeedName { .. }]
        ));
    }
}
