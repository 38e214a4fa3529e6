use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, REFERER, USER_AGENT};
use serde_json::Value;
use tracing::{debug, warn};

use super::{ScoreFeed, sample_players};
use crate::error::PoolError;
use crate::model::{PlayerScore, ROUND_COUNT, RawScore, RoundResult, RoundStatus};
use crate::score::classify;

pub const DEFAULT_FEED_URL: &str = "https://www.masters.com/en_US/scores/feeds/{year}/scores.json";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fills `{year}` in a feed URL template.
#[must_use]
pub fn feed_url_for_year(template: &str, year: i32) -> String {
    template.replace("{year}", &year.to_string())
}

pub struct MastersFeedClient {
    client: Client,
    url: String,
    use_fallback: bool,
}

impl MastersFeedClient {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            use_fallback: true,
        }
    }

    /// Turns the sample-data fallback off so fetch failures surface to the caller.
    #[must_use]
    pub fn without_fallback(mut self) -> Self {
        self.use_fallback = false;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ScoreFeed for MastersFeedClient {
    async fn fetch_scores(&self) -> Result<Vec<PlayerScore>, PoolError> {
        debug!("fetching scores from {}", self.url);
        let resp = self
            .client
            .get(&self.url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "application/json")
            .header(REFERER, "https://www.masters.com/")
            .send()
            .await?
            .error_for_status()?;
        let json: Value = resp.json().await?;
        parse_feed(&json)
    }

    fn fallback_scores(&self) -> Option<Vec<PlayerScore>> {
        self.use_fallback.then(sample_players)
    }
}

fn raw_score(v: Option<&Value>) -> Option<RawScore> {
    match v? {
        Value::Number(n) => Some(
            n.as_i64()
                .map_or_else(|| RawScore::Text(n.to_string()), RawScore::Int),
        ),
        Value::String(s) => Some(RawScore::Text(s.clone())),
        Value::Null => None,
        other => Some(RawScore::Text(other.to_string())),
    }
}

fn text_field(player: &Value, key: &str) -> String {
    match player.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn parse_round(round: Option<&Value>) -> RoundResult {
    let round_status = round
        .and_then(|r| r.get("roundStatus"))
        .and_then(Value::as_str)
        .map(RoundStatus::from_feed)
        .unwrap_or_default();

    // before a round starts the feed carries placeholders, not scores
    let score = match round_status {
        RoundStatus::Finished | RoundStatus::Playing => {
            raw_score(round.and_then(|r| r.get("fantasy")))
        }
        RoundStatus::Pre => None,
    };

    RoundResult {
        score,
        round_status,
    }
}

fn parse_player(player: &Value) -> Option<PlayerScore> {
    let name = player.get("full_name").and_then(Value::as_str)?.to_string();
    let position = text_field(player, "pos");
    let status_code = player
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.chars().next());

    let rounds: [RoundResult; ROUND_COUNT] =
        std::array::from_fn(|i| parse_round(player.get(format!("round{}", i + 1))));

    Some(PlayerScore {
        status: classify(status_code, &position),
        name,
        position,
        rounds,
        total: raw_score(player.get("topar")),
        country: text_field(player, "countryCode"),
        amateur: player.get("amateur").and_then(Value::as_bool).unwrap_or(false),
        past_champion: player.get("past").and_then(Value::as_bool).unwrap_or(false),
    })
}

/// Reads `data.player[]` from a Masters scores document.
///
/// # Errors
///
/// Returns `FeedUnavailable` if the document has no player list or no usable players.
pub fn parse_feed(json: &Value) -> Result<Vec<PlayerScore>, PoolError> {
    let entries = json
        .get("data")
        .and_then(|d| d.get("player"))
        .and_then(Value::as_array)
        .ok_or_else(|| PoolError::FeedUnavailable("no player list in feed".to_string()))?;

    let players: Vec<PlayerScore> = entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let parsed = parse_player(entry);
            if parsed.is_none() {
                warn!("skipping feed entry {i}: no full_name");
            }
            parsed
        })
        .collect();

    if players.is_empty() {
        return Err(PoolError::FeedUnavailable(
            "feed contained no player data".to_string(),
        ));
    }
    Ok(players)
}
