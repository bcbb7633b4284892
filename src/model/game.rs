use serde::Serialize;

/// A game on today's schedule.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    pub game_id: i64,
    pub full_stats_link: String,
    pub home_team_id: u32,
    pub home_score: u32,
    pub away_team_id: u32,
    pub away_score: u32,
    pub game_status: u32,
    pub game_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LiveStats {
    pub current_period: u8,
    pub home_sog: u32,
    pub away_sog: u32,
    pub home_powerplay: bool,
    pub away_powerplay: bool,
    pub time_remaining: String,
}

/// Live summary of a team's game today.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameOverview {
    pub period: String,
    pub time: String,
    pub home_team_id: u32,
    pub home_score: u32,
    pub away_team_id: u32,
    pub away_score: u32,
    pub game_status: u32,
    pub game_time: String,
}

/// Schedule-only view of a team's game today.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSchedule {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub game_time: String,
}
