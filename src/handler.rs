use std::collections::BTreeMap;

use chrono_tz::Tz;
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::nhl::NhlApi;
use crate::season;

/// One panel of the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Games,
    Overview,
    Schedule,
    Standings,
    Season,
    Check,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub team_id: u32,
    #[serde(default)]
    pub views: Vec<View>,
    /// IANA zone name used to render game start times.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Alternative API host, e.g. a mirror of the stats API.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Request {
    /// Build the API client this request asks for. An unknown zone name falls back to the default.
    pub fn client(&self) -> NhlApi {
        let mut api = NhlApi::new();
        if let Some(url) = &self.base_url {
            api = api.with_base_url(url.as_str());
        }
        match self.timezone.as_deref().map(str::parse::<Tz>) {
            Some(Ok(tz)) => api.with_timezone(tz),
            Some(Err(e)) => {
                warn!(error = %e, timezone = ?self.timezone, "Unknown timezone, using default");
                api
            }
            None => api,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    #[serde(default)]
    pub views: BTreeMap<View, Value>,
}

/// Fetch one view for `team_id` and serialize it for the scoreboard.
pub fn run_view(api: &NhlApi, team_id: u32, view: View) -> Value {
    let today = chrono::Utc::now().with_timezone(&api.timezone()).date_naive();
    let value = match view {
        View::Games => serde_json::to_value(api.fetch_games()),
        View::Overview => serde_json::to_value(api.fetch_overview(team_id)),
        View::Schedule => serde_json::to_value(api.fetch_fav_team_schedule(team_id, today)),
        View::Standings => serde_json::to_value(api.fetch_wildcard_standings(team_id)),
        View::Season => serde_json::to_value(season::is_in_season(today)),
        View::Check => serde_json::to_value(api.check_if_game(team_id, today)),
    };
    value.unwrap_or_else(|e| {
        error!(error = %e, ?view, "Failed to serialize view");
        Value::Null
    })
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;
    let api = payload.client();
    let team_id = payload.team_id;

    // Default to the live panels when no views are requested
    let views = if payload.views.is_empty() {
        vec![View::Games, View::Overview]
    } else {
        payload.views.clone()
    };

    let mut handles: Vec<(View, tokio::task::JoinHandle<Value>)> = Vec::new();
    for view in views {
        // The blocking task must own its client
        let api = api.clone();
        let handle = tokio::task::spawn_blocking(move || run_view(&api, team_id, view));
        handles.push((view, handle));
    }

    let mut results: BTreeMap<View, Value> = BTreeMap::new();
    let mut failures: Vec<String> = Vec::new();
    for (view, h) in handles {
        match h.await {
            Ok(value) => {
                results.insert(view, value);
            }
            Err(e) => {
                error!(error = %e, ?view, "View task failed");
                failures.push(format!("{:?} task join error: {}", view, e));
            }
        }
    }

    let message = if failures.is_empty() {
        format!("Fetched {} view(s) for team {}", results.len(), team_id)
    } else {
        format!(
            "Fetched {} view(s) for team {}; {}",
            results.len(),
            team_id,
            failures.join("; ")
        )
    };
    info!(message = %message, "Prepared scoreboard response");

    Ok(Response { message, views: results })
}
