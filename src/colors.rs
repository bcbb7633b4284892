use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Primary jersey color of every NHL franchise, keyed by the stats API team id.
/// Values are decimal `"R,G,B"` triples.
pub const TEAM_COLORS: &[(u32, &str)] = &[
    (1, "206,17,38"),
    (2, "0,83,155"),
    (3, "0,56,168"),
    (4, "247,73,2"),
    (5, "252,181,20"),
    (6, "252,181,20"),
    (7, "0,38,84"),
    (8, "175,30,45"),
    (9, "197,32,50"),
    (10, "0,32,91"),
    (12, "226,24,54"),
    (13, "4,30,66"),
    (14, "0,40,104"),
    (15, "200,16,46"),
    (16, "207,10,44"),
    (17, "206,17,38"),
    (18, "255,184,28"),
    (19, "0,47,135"),
    (20, "200,16,46"),
    (21, "111,38,61"),
    (22, "252,76,0"),
    (23, "0,32,91"),
    (24, "252,76,2"),
    (25, "0,104,71"),
    (26, "162,170,173"),
    (28, "0,109,117"),
    (29, "0,38,84"),
    (30, "2,73,48"),
    (52, "4,30,66"),
    (53, "140,38,51"),
    (54, "185,151,91"),
];

static COLOR_TABLE: LazyLock<HashMap<u32, Rgb>> = LazyLock::new(|| {
    TEAM_COLORS
        .iter()
        .filter_map(|(id, raw)| Rgb::parse(raw).map(|rgb| (*id, rgb)))
        .collect()
});

/// An 8-bit RGB triple, serialized as flat `r`/`g`/`b` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `"R,G,B"` string. Returns None unless there are exactly three channels in 0..=255.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut channels = raw.split(',').map(|c| c.trim().parse::<u8>());
        let rgb = match (channels.next(), channels.next(), channels.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b))) => Rgb { r, g, b },
            _ => return None,
        };
        if channels.next().is_some() {
            return None;
        }
        Some(rgb)
    }
}

/// Look up a team's color by its stats API id.
pub fn lookup(team_id: u32) -> Option<Rgb> {
    COLOR_TABLE.get(&team_id).copied()
}

/// Every team id the color table knows about, in table order.
pub fn team_ids() -> impl Iterator<Item = u32> {
    TEAM_COLORS.iter().map(|(id, _)| *id)
}
