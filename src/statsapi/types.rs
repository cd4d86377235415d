//! Typed wire models for the live-feed boxscore.
//!
//! The feed is permissive: stat counts are simply absent when zero, and
//! players who didn't bat or pitch still carry `"batting": {}` /
//! `"pitching": {}` placeholders. The decoders here normalize both cases so
//! callers work with plain `Option`s and zero-defaulted counts.

use std::collections::BTreeMap;

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

use crate::cli::TeamSide;
use crate::error::{BoxscoreError, Result};


/// Decode a stat block, mapping an absent or empty object to `None`.
fn de_nonempty_block<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw: Option<serde_json::Map<String, Value>> = Deserialize::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(block) if block.is_empty() => Ok(None),
        Some(block) => serde_json::from_value(Value::Object(block))
            .map(Some)
            .map_err(D::Error::custom),
    }
}

fn default_innings() -> String {
    "0.0".to_owned()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    /// Display name. Required; a feed entry without one is malformed.
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// One entry in a team's `players` map.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub person: Person,
    /// Lineup slot encoded as a string of digits, e.g. "100" for the leadoff
    /// hitter. Absent for players out of the batting order.
    #[serde(rename = "battingOrder", default)]
    pub batting_order: Option<String>,
    #[serde(default)]
    pub stats: PlayerSplits,
}

/// A player's in-game stat blocks. At most one of the two is meaningful for
/// summarization; both may be `None` for inactive players.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerSplits {
    #[serde(default, deserialize_with = "de_nonempty_block")]
    pub batting: Option<BattingStats>,
    #[serde(default, deserialize_with = "de_nonempty_block")]
    pub pitching: Option<PitchingStats>,
}

/// Per-game batting counts. Counts the feed omits are zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BattingStats {
    /// Raw "hits-atBats" form, e.g. "1-4".
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub doubles: u32,
    #[serde(default)]
    pub triples: u32,
    #[serde(rename = "homeRuns", default)]
    pub home_runs: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub rbi: u32,
    #[serde(rename = "baseOnBalls", default)]
    pub base_on_balls: u32,
    #[serde(rename = "strikeOuts", default)]
    pub strike_outs: u32,
}

/// Per-game pitching counts. Counts the feed omits are zero, innings "0.0".
#[derive(Debug, Clone, Deserialize)]
pub struct PitchingStats {
    /// Whole-plus-partial-inning decimal, e.g. "5.2" for 5 2/3 innings.
    #[serde(rename = "inningsPitched", default = "default_innings")]
    pub innings_pitched: String,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(rename = "earnedRuns", default)]
    pub earned_runs: u32,
    #[serde(rename = "baseOnBalls", default)]
    pub base_on_balls: u32,
    #[serde(rename = "strikeOuts", default)]
    pub strike_outs: u32,
    #[serde(rename = "pitchesThrown", default)]
    pub pitches_thrown: u32,
    #[serde(default)]
    pub strikes: u32,
}

impl Default for PitchingStats {
    fn default() -> Self {
        Self {
            innings_pitched: default_innings(),
            hits: 0,
            runs: 0,
            earned_runs: 0,
            base_on_balls: 0,
            strike_outs: 0,
            pitches_thrown: 0,
            strikes: 0,
        }
    }
}

/// Navigate a live-feed document to one team's player map and decode it.
///
/// Fails with [`BoxscoreError::Format`] when the document doesn't carry the
/// `liveData.boxscore.teams.<side>.players` path or a player entry doesn't
/// decode (missing `person.fullName`, wrong value types).
pub fn team_players(feed: &Value, side: TeamSide) -> Result<BTreeMap<String, PlayerRecord>> {
    let pointer = format!("/liveData/boxscore/teams/{}/players", side.key());
    let players = feed.pointer(&pointer).ok_or_else(|| {
        BoxscoreError::Format(format!(
            "missing liveData.boxscore.teams.{}.players",
            side.key()
        ))
    })?;
    let decoded = serde_json::from_value(players.clone())?;
    Ok(decoded)
}
