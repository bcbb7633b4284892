use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::colors::Rgb;
use crate::model::team::TeamRef;

/// Standings type of the per-conference wildcard race.
pub const WILD_CARD: &str = "wildCard";

/// Body of `/standings/wildCardWithLeaders`.
#[derive(Debug, Default, Deserialize)]
pub struct StandingsDocument {
    #[serde(default)]
    pub records: Vec<StandingsRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRecord {
    #[serde(default)]
    pub standings_type: String,
    #[serde(default)]
    pub conference: Option<GroupId>,
    #[serde(default)]
    pub division: Option<GroupId>,
    #[serde(default)]
    pub team_records: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GroupId {
    pub id: u32,
}

/// One team's line in a standings record. Everything besides the team
/// reference (points, ranks, streaks...) is carried through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    pub team: TeamRef,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}

/// Team reference with the abbreviation and color the standings endpoint leaves out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsTeam {
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub abbreviation: String,
    #[serde(flatten)]
    pub rgb: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsEntry {
    pub team: StandingsTeam,
    #[serde(flatten)]
    pub stats: Map<String, Value>,
}

/// Wildcard race and division table for one team.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Standings {
    pub wildcard: Vec<StandingsEntry>,
    pub division: Vec<StandingsEntry>,
}
