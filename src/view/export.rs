use chrono::{DateTime, Local};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::PoolError;
use crate::model::TeamStanding;

pub const SCOREBOARD_HEADER: [&str; 10] = [
    "Team",
    "Score",
    "Tie Breaker",
    "Player",
    "Tier",
    "Rd1",
    "Rd2",
    "Rd3",
    "Rd4",
    "Total",
];

fn opt_cell<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// Spreadsheet rows: team columns filled on a team's first row only, a blank row after each team.
#[must_use]
pub fn scoreboard_rows(standings: &[TeamStanding]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for team in standings {
        for (i, p) in team.players.iter().enumerate() {
            let (name, score, tie) = if i == 0 {
                (
                    team.team.clone(),
                    team.score.to_string(),
                    opt_cell(team.tie_breaker),
                )
            } else {
                (String::new(), String::new(), String::new())
            };
            let mut row = vec![name, score, tie, p.name.clone(), p.tier.to_string()];
            row.extend(p.rounds.iter().map(|r| opt_cell(*r)));
            row.push(opt_cell(p.total));
            rows.push(row);
        }
        rows.push(vec![String::new(); SCOREBOARD_HEADER.len()]);
    }
    rows
}

/// # Errors
///
/// Will return `Err` if writing to `w` fails
pub fn write_scoreboard_csv<W: Write>(w: W, standings: &[TeamStanding]) -> Result<(), PoolError> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(SCOREBOARD_HEADER)?;
    for row in scoreboard_rows(standings) {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// `<prefix>_<YYYYmmdd_HHMMSS>.csv` inside `dir`.
#[must_use]
pub fn timestamped_path(dir: &Path, prefix: &str, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("{prefix}_{}.csv", now.format("%Y%m%d_%H%M%S")))
}

/// Writes the scoreboard export into `dir`, creating it if needed, and returns the file path.
///
/// # Errors
///
/// Will return `Err` if the directory or file can't be written
pub fn export_scoreboard(dir: &Path, standings: &[TeamStanding]) -> Result<PathBuf, PoolError> {
    std::fs::create_dir_all(dir)?;
    let path = timestamped_path(dir, "masters_pool_scoreboard", Local::now());
    let file = std::fs::File::create(&path)?;
    write_scoreboard_csv(file, standings)?;
    info!("scoreboard exported to {}", path.display());
    Ok(path)
}
