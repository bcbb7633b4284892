use nhl_scoreboard_feed::model::game::{GameOverview, GameSchedule};
use nhl_scoreboard_feed::nhl::format_game_time;
use nhl_scoreboard_feed::{FetchError, NhlApi};

fn load(name: &str) -> String {
    std::fs::read_to_string(format!("tests/{}", name)).expect("failed to read fixture")
}

#[test]
fn lists_every_game_with_its_own_status() {
    let json = load("schedule_response.json");
    let games = NhlApi::games_from_json(&json, chrono_tz::UTC).expect("games_from_json failed");

    assert_eq!(games.len(), 2);
    let first = &games[0];
    assert_eq!(first.game_id, 2019020001);
    assert_eq!(first.full_stats_link, "/api/v1/game/2019020001/feed/live");
    assert_eq!(first.home_team_id, 10);
    assert_eq!(first.home_score, 5);
    assert_eq!(first.away_team_id, 9);
    assert_eq!(first.away_score, 3);
    assert_eq!(first.game_status, 7);
    assert_eq!(first.game_time, "11:00");

    // Status comes from the second game itself, not the first one
    let second = &games[1];
    assert_eq!(second.game_status, 3);
    assert_eq!(second.game_time, "02:00");
}

#[test]
fn game_times_follow_the_requested_zone() {
    let json = load("schedule_response.json");
    let games = NhlApi::games_from_json(&json, chrono_tz::America::Los_Angeles).expect("games_from_json failed");
    assert_eq!(games[0].game_time, "04:00");
    assert_eq!(games[1].game_time, "07:00");
}

#[test]
fn no_dates_means_no_games_not_failure() {
    let json = load("schedule_empty.json");
    let games = NhlApi::games_from_json(&json, chrono_tz::UTC).expect("empty schedule should succeed");
    assert!(games.is_empty());
}

#[test]
fn overview_of_game_in_progress() {
    let json = load("schedule_linescore.json");
    let overview = NhlApi::overview_from_json(&json, chrono_tz::America::New_York).expect("overview_from_json failed");
    assert_eq!(
        overview,
        GameOverview {
            period: "2nd".to_string(),
            time: "08:41".to_string(),
            home_team_id: 5,
            home_score: 4,
            away_team_id: 1,
            away_score: 2,
            game_status: 3,
            game_time: "07:00".to_string(),
        }
    );
}

#[test]
fn overview_before_puck_drop_is_missing_data() {
    let json = load("schedule_preview.json");
    let err = NhlApi::overview_from_json(&json, chrono_tz::UTC).expect_err("game has not begun");
    assert!(matches!(err, FetchError::NoGame(_)), "error was: {}", err);
}

#[test]
fn overview_without_game_today_is_missing_data() {
    let json = load("schedule_empty.json");
    let err = NhlApi::overview_from_json(&json, chrono_tz::UTC).expect_err("no game today");
    assert!(matches!(err, FetchError::NoGame(_)), "error was: {}", err);
}

#[test]
fn favourite_team_schedule() {
    let json = load("schedule_preview.json");
    let schedule = NhlApi::schedule_from_json(&json, chrono_tz::UTC).expect("schedule_from_json failed");
    assert_eq!(
        schedule,
        GameSchedule { home_team_id: 5, away_team_id: 1, game_time: "11:00".to_string() }
    );

    let err = NhlApi::schedule_from_json(&load("schedule_empty.json"), chrono_tz::UTC)
        .expect_err("no game today");
    assert!(matches!(err, FetchError::NoGame(_)));
}

#[test]
fn game_status_of_first_game_or_missing() {
    assert_eq!(NhlApi::game_status_from_json(&load("schedule_preview.json")).unwrap(), 1);
    assert_eq!(NhlApi::game_status_from_json(&load("schedule_response.json")).unwrap(), 7);

    let err = NhlApi::game_status_from_json(&load("schedule_empty.json")).expect_err("zero games");
    assert!(matches!(err, FetchError::NoGame(_)));
}

#[test]
fn status_code_accepts_numbers() {
    let body = r#"{"totalGames": 1, "dates": [{"games": [{
        "gamePk": 1, "gameDate": "2020-01-01T00:00:00Z",
        "status": {"statusCode": 5},
        "teams": {"home": {"team": {"id": 1}}, "away": {"team": {"id": 2}}}
    }]}]}"#;
    assert_eq!(NhlApi::game_status_from_json(body).unwrap(), 5);
}

#[test]
fn malformed_status_code_is_a_decode_error() {
    let body = r#"{"totalGames": 1, "dates": [{"games": [{
        "gamePk": 1, "gameDate": "2020-01-01T00:00:00Z",
        "status": {"statusCode": "final"},
        "teams": {"home": {"team": {"id": 1}}, "away": {"team": {"id": 2}}}
    }]}]}"#;
    let err = NhlApi::game_status_from_json(body).expect_err("status code is not numeric");
    assert!(matches!(err, FetchError::Decode(_)), "error was: {}", err);
}

#[test]
fn formats_game_time_as_twelve_hour_clock() {
    assert_eq!(format_game_time("2019-10-02T23:00:00Z", chrono_tz::UTC).unwrap(), "11:00");
    assert_eq!(format_game_time("2019-10-02T09:30:00Z", chrono_tz::UTC).unwrap(), "09:30");
    assert!(matches!(
        format_game_time("tonight", chrono_tz::UTC),
        Err(FetchError::BadTimestamp { .. })
    ));
}
