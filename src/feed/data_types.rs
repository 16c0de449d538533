use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::common::{Fixture, FixtureKey};
use crate::feed::FetchError;

/// An article as returned by the news API. Only the fields the crate acts on
/// are typed; everything else rides along in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub match_date: String,
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArticleSummary {
    /// Publish time, if `created_at` is a readable ISO 8601 datetime.
    /// Values without an offset are taken as UTC.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// A passthrough field, when it is a string
    #[must_use]
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn fixture_label(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

impl Fixture for ArticleSummary {
    fn fixture_key(&self) -> FixtureKey<'_> {
        FixtureKey {
            home_team: &self.home_team,
            away_team: &self.away_team,
            match_date: &self.match_date,
        }
    }
}

/// The envelope every API endpoint answers with
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope: `data` on success, the server's message otherwise
    pub fn into_result(self) -> Result<T, FetchError> {
        if !self.success {
            return Err(FetchError::Api(
                self.error.unwrap_or_else(|| String::from("request failed")),
            ));
        }
        self.data
            .ok_or_else(|| FetchError::Api(String::from("response carried no data")))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameweekSummary {
    pub total_matches: u32,
    pub total_goals: u32,
    pub avg_goals_per_match: f64,
    pub gameweek_complete: bool,
}

/// Match reports for one matchday, one report per fixture
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameweekReport {
    pub matchday: u32,
    pub match_reports: Vec<ArticleSummary>,
    pub summary: GameweekSummary,
}

/// One fixture of the gameweek strip, pointing at its match report
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StripCard {
    /// Article ID of the match report
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub fixture_id: u64,
    #[serde(default)]
    pub fixture_label: String,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    /// `"{home}-{away}"`, empty while the score is unknown
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub match_date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameweekStrip {
    pub matchday: u32,
    pub total_matches: u32,
    #[serde(default)]
    pub strip_cards: Vec<StripCard>,
}
