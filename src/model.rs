pub mod game;
pub mod live;
pub mod schedule;
pub mod standings;
pub mod team;

/// Both sides of a matchup; the stats API nests most per-team data this way.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Matchup<T> {
    pub home: T,
    pub away: T,
}
