use serde::Deserialize;

use crate::model::Matchup;

/// Body of a game's live feed (the `link` of a schedule entry).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveFeed {
    pub live_data: LiveData,
}

#[derive(Debug, Deserialize)]
pub struct LiveData {
    pub linescore: Linescore,
}

/// Live in-game summary, shared by the live feed and the expanded schedule.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    #[serde(default)]
    pub current_period: u8,
    #[serde(default)]
    pub current_period_ordinal: Option<String>,
    // Absent between periods and before puck drop.
    #[serde(default)]
    pub current_period_time_remaining: Option<String>,
    #[serde(default)]
    pub teams: Option<Matchup<LinescoreSide>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinescoreSide {
    #[serde(default)]
    pub shots_on_goal: u32,
    #[serde(default)]
    pub power_play: bool,
}
