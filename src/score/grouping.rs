use ahash::RandomState;
use std::collections::HashMap;

use crate::model::{ReconciledPlayer, RosterSlot};

/// Anything that sits in a team's tier slot.
pub trait TeamMember {
    fn team(&self) -> &str;
    fn tier(&self) -> u8;
}

impl TeamMember for RosterSlot {
    fn team(&self) -> &str {
        &self.team
    }
    fn tier(&self) -> u8 {
        self.tier
    }
}

impl TeamMember for ReconciledPlayer {
    fn team(&self) -> &str {
        &self.team
    }
    fn tier(&self) -> u8 {
        self.tier
    }
}

/// Groups members by their own `team` field, teams in first-appearance order, tiers ascending.
#[must_use]
pub fn group_by_team<T: TeamMember>(items: Vec<T>) -> Vec<(String, Vec<T>)> {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<T>, RandomState> = HashMap::default();

    for item in items {
        let team = item.team().to_string();
        if !grouped.contains_key(&team) {
            order.push(team.clone());
        }
        grouped.entry(team).or_default().push(item);
    }

    order
        .into_iter()
        .filter_map(|team| {
            let mut members = grouped.remove(&team)?;
            members.sort_by_key(|m| m.tier());
            Some((team, members))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(team: &str, tier: u8) -> RosterSlot {
        RosterSlot {
            team: team.to_string(),
            tie_breaker: None,
            tier,
            player_name: format!("{team}-{tier}"),
        }
    }

    #[test]
    fn keeps_team_order_and_sorts_tiers() {
        let slots = vec![slot("b", 2), slot("a", 3), slot("b", 1), slot("a", 1)];
        let grouped = group_by_team(slots);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "b");
        assert_eq!(
            grouped[0].1.iter().map(|s| s.tier).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(grouped[1].0, "a");
        assert_eq!(
            grouped[1].1.iter().map(|s| s.tier).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }
}
