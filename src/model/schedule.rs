use serde::{Deserialize, Deserializer};

use crate::model::Matchup;
use crate::model::live::Linescore;
use crate::model::team::TeamRef;

/// Body of the `/schedule` endpoint, with or without `expand=schedule.linescore`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    #[serde(default)]
    pub total_games: u32,
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDate {
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGame {
    pub game_pk: i64,
    #[serde(default)]
    pub link: String,
    pub game_date: String,
    pub status: GameStatus,
    pub teams: Matchup<GameSide>,
    #[serde(default)]
    pub linescore: Option<Linescore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    #[serde(deserialize_with = "status_code")]
    pub status_code: u32,
}

#[derive(Debug, Deserialize)]
pub struct GameSide {
    #[serde(default)]
    pub score: u32,
    pub team: TeamRef,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNum {
    Num(u32),
    Str(String),
}

// The API sends status codes as strings ("1", "7"); older payloads used numbers.
fn status_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    match StringOrNum::deserialize(deserializer)? {
        StringOrNum::Num(n) => Ok(n),
        StringOrNum::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
