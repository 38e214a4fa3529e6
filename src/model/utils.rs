use chrono::Duration as ChronoDuration;

/// Human-readable age of a cached leaderboard, e.g. "4 minutes".
#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let (n, unit) = if secs >= DAY {
        (secs / DAY, "day")
    } else if secs >= HOUR {
        (secs / HOUR, "hour")
    } else if secs >= MINUTE {
        (secs / MINUTE, "minute")
    } else {
        (secs, "second")
    };

    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Golf-style relative-to-par text: `E`, `+3`, `-2`.
#[must_use]
pub fn format_to_par(score: i32) -> String {
    match score {
        0 => "E".to_string(),
        s if s > 0 => format!("+{s}"),
        s => s.to_string(),
    }
}
