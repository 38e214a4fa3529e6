use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{RosterSource, TeamEntry, into_slots};
use crate::error::PoolError;
use crate::model::{RosterSlot, TEAM_SIZE};

/// Roster read from a `.json` or `.csv` file on every load.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_csv(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
    }
}

#[async_trait]
impl RosterSource for FileRoster {
    async fn load_roster(&self) -> Result<Vec<RosterSlot>, PoolError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PoolError::RosterUnavailable(format!("{}: {e}", self.path.display()))
        })?;

        let entries = if self.is_csv() {
            parse_roster_csv(&text)?
        } else {
            parse_roster_json(&text)?
        };
        let slots = into_slots(entries)?;
        info!(
            "loaded {} teams from {}",
            slots.len() / TEAM_SIZE,
            self.path.display()
        );
        Ok(slots)
    }
}

#[derive(Deserialize)]
struct JsonTeam {
    team: String,
    #[serde(default)]
    tie_breaker: Option<i64>,
    players: Vec<String>,
}

/// format we expect is this:
/// [{ "team": "Name", "tie_breaker": <int>, "players": ["Tier 1", "Tier 2", ..., "Tier 6"] }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in that shape
pub fn parse_roster_json(text: &str) -> Result<Vec<TeamEntry>, PoolError> {
    let teams: Vec<JsonTeam> = serde_json::from_str(text)
        .map_err(|e| PoolError::InvalidRoster(format!("roster json: {e}")))?;
    Ok(teams
        .into_iter()
        .map(|t| TeamEntry {
            team: t.team,
            tie_breaker: t.tie_breaker,
            players: t.players,
        })
        .collect())
}

fn parse_tie_breaker(cell: &str, team: &str) -> Option<i64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let parsed = cell
        .parse::<i64>()
        .ok()
        .or_else(|| cell.parse::<f64>().ok().map(|f| f.round() as i64));
    if parsed.is_none() {
        warn!("team {team}: tie breaker '{cell}' is not a number, ignoring");
    }
    parsed
}

/// Spreadsheet-style roster: header `Paid,Team #,Name,Tie Breaker,1,2,3,4,5,6`.
/// Rows after the first `End` in the `Paid` column are ignored.
///
/// # Errors
///
/// Will return `Err` if the csv can't be read or a required column is missing
pub fn parse_roster_csv(text: &str) -> Result<Vec<TeamEntry>, PoolError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| -> Result<usize, PoolError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| PoolError::InvalidRoster(format!("roster csv has no '{name}' column")))
    };

    let paid_col = headers.iter().position(|h| h.trim() == "Paid");
    let name_col = column("Name")?;
    let tie_col = headers.iter().position(|h| h.trim() == "Tie Breaker");
    let tier_cols = (1..=TEAM_SIZE)
        .map(|t| column(&t.to_string()))
        .collect::<Result<Vec<usize>, PoolError>>()?;

    let mut entries = Vec::new();
    let mut saw_end = false;
    for record in reader.records() {
        let record = record?;
        let cell = |i: usize| record.get(i).unwrap_or("").trim();

        if paid_col.is_some_and(|c| cell(c).eq_ignore_ascii_case("end")) {
            saw_end = true;
            break;
        }
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let team = cell(name_col).to_string();
        entries.push(TeamEntry {
            tie_breaker: tie_col.and_then(|c| parse_tie_breaker(cell(c), &team)),
            players: tier_cols.iter().map(|&c| cell(c).to_string()).collect(),
            team,
        });
    }

    if !saw_end {
        warn!("no 'End' marker in roster Paid column, using all rows");
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_stops_at_end_marker() {
        let text = "\
Paid,Team #,Name,Tie Breaker,1,2,3,4,5,6
Y,1,Aces,-12,A1,A2,A3,A4,A5,A6
Y,2,Birdies,,B1,B2,B3,B4,B5,B6
End,,,,,,,,,
N,3,Ghost,0,G1,G2,G3,G4,G5,G6
";
        let entries = parse_roster_csv(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].team, "Aces");
        assert_eq!(entries[0].tie_breaker, Some(-12));
        assert_eq!(entries[1].tie_breaker, None);
        assert_eq!(entries[1].players[5], "B6");
    }

    #[test]
    fn csv_float_tie_breaker() {
        let text = "Name,Tie Breaker,1,2,3,4,5,6\nAces,280.0,a,b,c,d,e,f\n";
        let entries = parse_roster_csv(text).unwrap();
        assert_eq!(entries[0].tie_breaker, Some(280));
    }

    #[test]
    fn csv_missing_tier_column() {
        let text = "Name,1,2,3\nAces,a,b,c\n";
        assert!(matches!(
            parse_roster_csv(text),
            Err(PoolError::InvalidRoster(_))
        ));
    }

    #[test]
    fn json_roster() {
        let text = r#"[{"team": "Aces", "tie_breaker": -9, "players": ["a","b","c","d","e","f"]},
                      {"team": "Birdies", "players": ["g","h","i","j","k","l"]}]"#;
        let entries = parse_roster_json(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tie_breaker, Some(-9));
        assert_eq!(entries[1].tie_breaker, None);
    }
}
