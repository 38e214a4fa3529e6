use chrono::Local;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::export::timestamped_path;
use crate::error::PoolError;
use crate::model::{PlayerScore, ROUND_COUNT, RoundStatus};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RoundStatusRow {
    pub player: String,
    pub rounds: [RoundStatus; ROUND_COUNT],
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RoundStatusReport {
    pub rows: Vec<RoundStatusRow>,
    /// Every player has finished all four rounds.
    pub all_finished: bool,
}

#[must_use]
pub fn round_status_report(feed: &[PlayerScore]) -> RoundStatusReport {
    let rows: Vec<RoundStatusRow> = feed
        .iter()
        .map(|p| RoundStatusRow {
            player: p.name.clone(),
            rounds: p.rounds.clone().map(|r| r.round_status),
        })
        .collect();
    let all_finished = rows
        .iter()
        .all(|r| r.rounds.iter().all(|s| *s == RoundStatus::Finished));
    RoundStatusReport { rows, all_finished }
}

#[must_use]
pub fn render_round_status_text(report: &RoundStatusReport) -> String {
    let rule = "-".repeat(70);
    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<30} {:<9} {:<9} {:<9} {:<9}",
        "Player", "Rd1", "Rd2", "Rd3", "Rd4"
    );
    let _ = writeln!(out, "{rule}");
    for row in &report.rows {
        let [r1, r2, r3, r4] = row.rounds.map(|s| s.to_string());
        let _ = writeln!(out, "{:<30} {r1:<9} {r2:<9} {r3:<9} {r4:<9}", row.player);
    }
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "All players finished all rounds: {}", report.all_finished);
    out
}

/// # Errors
///
/// Will return `Err` if writing to `w` fails
pub fn write_round_status_csv<W: Write>(w: W, report: &RoundStatusReport) -> Result<(), PoolError> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(["Player", "Round 1", "Round 2", "Round 3", "Round 4"])?;
    for row in &report.rows {
        let mut record = vec![row.player.clone()];
        record.extend(row.rounds.iter().map(ToString::to_string));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the directory or file can't be written
pub fn export_round_status(dir: &Path, report: &RoundStatusReport) -> Result<PathBuf, PoolError> {
    std::fs::create_dir_all(dir)?;
    let path = timestamped_path(dir, "masters_round_status", Local::now());
    write_round_status_csv(std::fs::File::create(&path)?, report)?;
    Ok(path)
}
