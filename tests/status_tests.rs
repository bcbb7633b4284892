use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use nhl_scoreboard_feed::{Fetch, NhlApi};

/// Serve `count` requests with a canned status line and JSON body, returning the base URL.
fn serve(status: &'static str, body: &'static str, count: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");
    thread::spawn(move || {
        for stream in listener.incoming().take(count) {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            // Drain the request head
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}", addr)
}

const NOT_FOUND_BODY: &str = r#"{"messageNumber":10,"message":"Object not found"}"#;

#[test]
fn unknown_team_answered_with_404_is_not_scheduled() {
    let api = NhlApi::new().with_base_url(serve("404 Not Found", NOT_FOUND_BODY, 1));
    assert_eq!(api.fetch_team(999), Fetch::NotScheduled);
}

#[test]
fn standings_for_unknown_team_is_not_scheduled() {
    // The team lookup is the first request, so one answer is enough
    let api = NhlApi::new().with_base_url(serve("404 Not Found", NOT_FOUND_BODY, 1));
    assert!(api.fetch_wildcard_standings(999).is_not_scheduled());
}

#[test]
fn server_error_is_unreachable() {
    let api = NhlApi::new().with_base_url(serve("500 Internal Server Error", "{}", 1));
    assert_eq!(api.fetch_team(5), Fetch::Unreachable);
}

#[test]
fn team_lookup_over_http() {
    let body = r#"{"teams": [{"id": 5, "abbreviation": "PIT", "teamName": "Penguins",
        "locationName": "Pittsburgh", "division": {"id": 18, "name": "Metropolitan"},
        "conference": {"id": 6, "name": "Eastern"}}]}"#;
    let api = NhlApi::new().with_base_url(serve("200 OK", body, 1));
    let team = api.fetch_team(5).ok().expect("team lookup should succeed");
    assert_eq!(team.abbreviation, "PIT");
    assert_eq!(team.division.id, 18);
}
