use tracing::{debug, warn};

use super::Outcome;
use crate::model::{ParticipationStatus, ROUND_COUNT, RawScore, ReconciledPlayer, Warning};

/// Strokes over par charged for each of rounds 3 and 4 after a missed cut.
pub const CUT_PENALTY: i32 = 8;

/// Largest magnitude accepted for a single round; anything beyond is feed garbage.
pub const ROUND_SCORE_LIMIT: i32 = 200;

/// Tolerant round-score parser.
///
/// `"E"` and the lone dash `"-"` are even par, a leading `+` is dropped, anything
/// else must be a signed integer within `ROUND_SCORE_LIMIT`. A missing value is 0.
///
/// # Errors
///
/// Returns the offending text when the value can't be read as a score.
pub fn coerce_score(raw: Option<&RawScore>) -> Result<i32, String> {
    let parsed = match raw {
        None => return Ok(0),
        Some(RawScore::Int(i)) => i32::try_from(*i).ok(),
        Some(RawScore::Text(s)) => match s.trim() {
            "E" | "-" => Some(0),
            t => t.strip_prefix('+').unwrap_or(t).parse::<i32>().ok(),
        },
    };
    parsed
        .filter(|v| (-ROUND_SCORE_LIMIT..=ROUND_SCORE_LIMIT).contains(v))
        .ok_or_else(|| raw.map(ToString::to_string).unwrap_or_default())
}

/// Scores one player: coerce, apply the cut penalty, then re-sum. Unmatched players stay unscored.
#[must_use]
pub fn adjust_player(player: &ReconciledPlayer) -> (ReconciledPlayer, Vec<Warning>) {
    let mut adjusted = player.clone();
    let mut warnings = Vec::new();

    if player.status == ParticipationStatus::Unknown {
        adjusted.rounds = [None; ROUND_COUNT];
        adjusted.total = None;
        return (adjusted, warnings);
    }

    let mut rounds = [0i32; ROUND_COUNT];
    for (i, raw) in player.raw_rounds.iter().enumerate() {
        rounds[i] = coerce_score(raw.as_ref()).unwrap_or_else(|bad| {
            let w = Warning::UnparseableScore {
                player: player.name.clone(),
                round: i + 1,
                raw: bad,
            };
            warn!("{w}");
            warnings.push(w);
            0
        });
    }

    if player.status == ParticipationStatus::Cut {
        debug!("{} missed the cut, rounds 3 and 4 set to {CUT_PENALTY}", player.name);
        rounds[2] = CUT_PENALTY;
        rounds[3] = CUT_PENALTY;
    }

    adjusted.rounds = rounds.map(Some);
    adjusted.total = Some(rounds.iter().sum());
    (adjusted, warnings)
}

/// Scores every player. Returns new values and leaves the input untouched.
#[must_use]
pub fn adjust(players: &[ReconciledPlayer]) -> Outcome<Vec<ReconciledPlayer>> {
    let mut warnings = Vec::new();
    let mut cut_count = 0usize;
    let value = players
        .iter()
        .map(|p| {
            let (adjusted, mut w) = adjust_player(p);
            if p.status == ParticipationStatus::Cut {
                cut_count += 1;
            }
            warnings.append(&mut w);
            adjusted
        })
        .collect();
    debug!("applied cut penalty to {cut_count} players");
    Outcome { value, warnings }
}
