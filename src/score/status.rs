use crate::model::ParticipationStatus;

/// Participation status from the feed's one-letter status code and leaderboard position.
///
/// First match wins: `C` is a missed cut; `A` or `N` with no position are a withdrawal
/// or a did-not-play; anything else is treated as active and gets no adjustment.
#[must_use]
pub fn classify(raw_status: Option<char>, position: &str) -> ParticipationStatus {
    match (raw_status, position.is_empty()) {
        (Some('C'), _) => ParticipationStatus::Cut,
        (Some('A'), true) => ParticipationStatus::Withdrawn,
        (Some('N'), true) => ParticipationStatus::NotPlaying,
        _ => ParticipationStatus::Active,
    }
}
