use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::colors::Rgb;

/// Body of `/teams` and `/teams/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsDocument {
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// A franchise as the stats API describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub abbreviation: String,
    pub conference: Grouping,
    pub division: Grouping,
}

/// Conference or division reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

/// Minimal team reference embedded in schedule and standings payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Flattened team record handed to the scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamInfo {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub abbreviation: String,
    pub conference: String,
    pub division: String,
    pub rgb: Rgb,
}

/// Team id -> flattened team record.
pub type TeamDirectory = BTreeMap<u32, TeamInfo>;
