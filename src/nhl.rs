use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::{info, info_span, instrument};

use crate::colors;
use crate::fetch::{Fetch, FetchError};
use crate::model::game::{Game, GameOverview, GameSchedule, LiveStats};
use crate::model::live::LiveFeed;
use crate::model::schedule::{ScheduleDocument, ScheduleGame};
use crate::model::standings::{Standings, StandingsDocument};
use crate::model::team::{Team, TeamDirectory, TeamInfo, TeamsDocument};
use crate::standings;

/// Host of the public NHL stats API.
pub const NHL_API_HOST: &str = "http://statsapi.web.nhl.com";
const API_PATH: &str = "/api/v1";

/// Zone game start times are rendered in unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Blocking client for the NHL stats API.
///
/// Every public operation issues its request(s) immediately and returns a
/// [`Fetch`]; failures are logged and never propagated as errors. The
/// `*_from_json` associated functions do the same reshaping on a raw body
/// without touching the network.
#[derive(Debug, Clone)]
pub struct NhlApi {
    host: String,
    tz: Tz,
}

impl Default for NhlApi {
    fn default() -> Self {
        Self::new()
    }
}

impl NhlApi {
    pub fn new() -> Self {
        Self { host: NHL_API_HOST.to_string(), tz: DEFAULT_TIMEZONE }
    }

    /// Point the client at another host (scheme and authority, no path).
    pub fn with_base_url(mut self, host: impl Into<String>) -> Self {
        let host = host.into();
        self.host = host.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}/{}", self.host, API_PATH, path)
    }

    fn get_body(&self, url: &str) -> Result<String, FetchError> {
        let response = {
            let _span = info_span!("nhl_fetch", url = %url).entered();
            match ureq::get(url).call() {
                Ok(response) => response,
                // Unknown ids come back as 404 with a JSON error body
                Err(ureq::Error::StatusCode(404)) => return Err(FetchError::NotFound(url.to_string())),
                Err(e) => return Err(e.into()),
            }
        };
        let mut body_reader = response.into_body();
        Ok(body_reader.read_to_string()?)
    }

    /// Fetch every team, keyed by id, with its color from the static table.
    #[instrument(level = "info", skip(self))]
    pub fn get_teams(&self) -> Fetch<TeamDirectory> {
        Fetch::settle("get_teams", self.team_directory())
    }

    fn team_directory(&self) -> Result<TeamDirectory, FetchError> {
        let body = self.get_body(&self.api_url("teams"))?;
        Self::teams_from_json(&body)
    }

    /// Build the team directory from a `/teams` body. Fails on any team the color table lacks.
    pub fn teams_from_json(body: &str) -> Result<TeamDirectory, FetchError> {
        let doc: TeamsDocument = serde_json::from_str(body)?;
        doc.teams
            .into_iter()
            .map(|team| {
                let rgb = colors::lookup(team.id).ok_or(FetchError::UnknownTeamColor(team.id))?;
                let info = TeamInfo {
                    id: team.id,
                    name: team.team_name,
                    location: team.location_name,
                    abbreviation: team.abbreviation,
                    conference: team.conference.name,
                    division: team.division.name,
                    rgb,
                };
                Ok::<_, FetchError>((info.id, info))
            })
            .collect()
    }

    /// Period, shots and power-play state of a game in progress.
    /// `link` is the game's feed path as found in the schedule (`/api/v1/game/{id}/feed/live`).
    #[instrument(level = "info", skip(self))]
    pub fn fetch_live_stats(&self, link: &str) -> Fetch<LiveStats> {
        let result = self
            .get_body(&format!("{}{}", self.host, link))
            .and_then(|body| Self::live_stats_from_json(&body));
        Fetch::settle("fetch_live_stats", result)
    }

    pub fn live_stats_from_json(body: &str) -> Result<LiveStats, FetchError> {
        let feed: LiveFeed = serde_json::from_str(body)?;
        let linescore = feed.live_data.linescore;
        let teams = linescore
            .teams
            .ok_or_else(|| FetchError::no_game("liveData.linescore.teams"))?;
        Ok(LiveStats {
            current_period: linescore.current_period,
            home_sog: teams.home.shots_on_goal,
            away_sog: teams.away.shots_on_goal,
            home_powerplay: teams.home.power_play,
            away_powerplay: teams.away.power_play,
            time_remaining: linescore
                .current_period_time_remaining
                .unwrap_or_else(|| "00:00".to_string()),
        })
    }

    /// Every game on today's league schedule. No games today is `Ok` with an empty list.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_games(&self) -> Fetch<Vec<Game>> {
        let result = self
            .get_body(&self.api_url("schedule"))
            .and_then(|body| Self::games_from_json(&body, self.tz));
        Fetch::settle("fetch_games", result)
    }

    pub fn games_from_json(body: &str, tz: Tz) -> Result<Vec<Game>, FetchError> {
        let doc: ScheduleDocument = serde_json::from_str(body)?;
        let Some(date) = doc.dates.into_iter().next() else {
            info!("No game today");
            return Ok(Vec::new());
        };
        date.games
            .into_iter()
            .map(|game| {
                Ok::<_, FetchError>(Game {
                    game_time: format_game_time(&game.game_date, tz)?,
                    game_id: game.game_pk,
                    full_stats_link: game.link,
                    home_team_id: game.teams.home.team.id,
                    home_score: game.teams.home.score,
                    away_team_id: game.teams.away.team.id,
                    away_score: game.teams.away.score,
                    game_status: game.status.status_code,
                })
            })
            .collect()
    }

    /// Score and clock of `team_id`'s game today.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_overview(&self, team_id: u32) -> Fetch<GameOverview> {
        let url = self.api_url(&format!("schedule?expand=schedule.linescore&teamId={}", team_id));
        let result = self
            .get_body(&url)
            .and_then(|body| Self::overview_from_json(&body, self.tz));
        Fetch::settle("fetch_overview", result)
    }

    pub fn overview_from_json(body: &str, tz: Tz) -> Result<GameOverview, FetchError> {
        let doc: ScheduleDocument = serde_json::from_str(body)?;
        let game = first_game(doc)?;
        let linescore = game
            .linescore
            .ok_or_else(|| FetchError::no_game("linescore"))?;
        let period = linescore
            .current_period_ordinal
            .ok_or_else(|| FetchError::no_game("linescore.currentPeriodOrdinal"))?;
        let time = linescore
            .current_period_time_remaining
            .ok_or_else(|| FetchError::no_game("linescore.currentPeriodTimeRemaining"))?;
        Ok(GameOverview {
            period,
            time,
            home_team_id: game.teams.home.team.id,
            home_score: game.teams.home.score,
            away_team_id: game.teams.away.team.id,
            away_score: game.teams.away.score,
            game_status: game.status.status_code,
            game_time: format_game_time(&game.game_date, tz)?,
        })
    }

    /// Who `team_id` plays on `date` and when.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_fav_team_schedule(&self, team_id: u32, date: NaiveDate) -> Fetch<GameSchedule> {
        let result = self
            .get_body(&self.team_schedule_url(team_id, date))
            .and_then(|body| Self::schedule_from_json(&body, self.tz));
        Fetch::settle("fetch_fav_team_schedule", result)
    }

    pub fn schedule_from_json(body: &str, tz: Tz) -> Result<GameSchedule, FetchError> {
        let doc: ScheduleDocument = serde_json::from_str(body)?;
        let game = first_game(doc)?;
        Ok(GameSchedule {
            home_team_id: game.teams.home.team.id,
            away_team_id: game.teams.away.team.id,
            game_time: format_game_time(&game.game_date, tz)?,
        })
    }

    /// Status code of `team_id`'s game on `date`, or `NotScheduled` when it has none.
    #[instrument(level = "info", skip(self))]
    pub fn check_if_game(&self, team_id: u32, date: NaiveDate) -> Fetch<u32> {
        let result = self
            .get_body(&self.team_schedule_url(team_id, date))
            .and_then(|body| Self::game_status_from_json(&body));
        Fetch::settle("check_if_game", result)
    }

    pub fn game_status_from_json(body: &str) -> Result<u32, FetchError> {
        let doc: ScheduleDocument = serde_json::from_str(body)?;
        if doc.total_games == 0 {
            return Err(FetchError::no_game("totalGames is 0"));
        }
        Ok(first_game(doc)?.status.status_code)
    }

    fn team_schedule_url(&self, team_id: u32, date: NaiveDate) -> String {
        self.api_url(&format!("schedule?teamId={}&date={}", team_id, date.format("%Y-%m-%d")))
    }

    /// Full record of one team, including its conference and division ids.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_team(&self, team_id: u32) -> Fetch<Team> {
        Fetch::settle("fetch_team", self.team(team_id))
    }

    fn team(&self, team_id: u32) -> Result<Team, FetchError> {
        let body = self.get_body(&self.api_url(&format!("teams/{}", team_id)))?;
        Self::team_from_json(&body)
    }

    pub fn team_from_json(body: &str) -> Result<Team, FetchError> {
        let doc: TeamsDocument = serde_json::from_str(body)?;
        doc.teams
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::no_game("teams[0]"))
    }

    /// Wildcard race of `team_id`'s conference and the table of its division,
    /// each entry carrying abbreviation and color.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_wildcard_standings(&self, team_id: u32) -> Fetch<Standings> {
        Fetch::settle("fetch_wildcard_standings", self.wildcard_standings(team_id))
    }

    fn wildcard_standings(&self, team_id: u32) -> Result<Standings, FetchError> {
        let team = self.team(team_id)?;
        let directory = self.team_directory()?;
        let body = self.get_body(&self.api_url("standings/wildCardWithLeaders"))?;
        Self::standings_from_json(&team, &directory, &body)
    }

    pub fn standings_from_json(
        team: &Team,
        directory: &TeamDirectory,
        body: &str,
    ) -> Result<Standings, FetchError> {
        let doc: StandingsDocument = serde_json::from_str(body)?;
        let standings = standings::enrich(team, directory, doc)?;
        info!(
            team_id = team.id,
            wildcard = standings.wildcard.len(),
            division = standings.division.len(),
            "Built wildcard standings"
        );
        Ok(standings)
    }
}

fn first_game(doc: ScheduleDocument) -> Result<ScheduleGame, FetchError> {
    doc.dates
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::no_game("dates[0]"))?
        .games
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::no_game("dates[0].games[0]"))
}

/// Render an RFC 3339 `gameDate` as a 12-hour `HH:MM` clock time in `tz`.
pub fn format_game_time(game_date: &str, tz: Tz) -> Result<String, FetchError> {
    let dt = chrono::DateTime::parse_from_rfc3339(game_date).map_err(|source| {
        FetchError::BadTimestamp { value: game_date.to_string(), source }
    })?;
    Ok(dt.with_timezone(&tz).format("%I:%M").to_string())
}
