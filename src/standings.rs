use crate::fetch::FetchError;
use crate::model::standings::{
    Standings, StandingsDocument, StandingsEntry, StandingsTeam, TeamRecord, WILD_CARD,
};
use crate::model::team::{Team, TeamDirectory};

/// Pick the wildcard race of `team`'s conference and the table of its division
/// out of a `wildCardWithLeaders` document, and attach each listed team's
/// abbreviation and color from `directory`.
///
/// When several records match, the last one wins. Records that match nothing
/// leave the corresponding list empty.
pub fn enrich(
    team: &Team,
    directory: &TeamDirectory,
    document: StandingsDocument,
) -> Result<Standings, FetchError> {
    let mut wildcard: Vec<TeamRecord> = Vec::new();
    let mut division: Vec<TeamRecord> = Vec::new();

    for record in document.records {
        let is_wildcard = record.standings_type == WILD_CARD
            && record.conference.map(|c| c.id) == Some(team.conference.id);
        let is_division = record.division.map(|d| d.id) == Some(team.division.id);

        match (is_wildcard, is_division) {
            (true, true) => {
                division = record.team_records.clone();
                wildcard = record.team_records;
            }
            (true, false) => wildcard = record.team_records,
            (false, true) => division = record.team_records,
            (false, false) => {}
        }
    }

    Ok(Standings {
        wildcard: annotate(wildcard, directory)?,
        division: annotate(division, directory)?,
    })
}

fn annotate(records: Vec<TeamRecord>, directory: &TeamDirectory) -> Result<Vec<StandingsEntry>, FetchError> {
    records
        .into_iter()
        .map(|record| {
            let info = directory
                .get(&record.team.id)
                .ok_or(FetchError::UnknownTeam(record.team.id))?;
            Ok::<_, FetchError>(StandingsEntry {
                team: StandingsTeam {
                    id: record.team.id,
                    name: record.team.name,
                    link: record.team.link,
                    abbreviation: info.abbreviation.clone(),
                    rgb: info.rgb,
                },
                stats: record.stats,
            })
        })
        .collect()
}
