use std::{num::NonZeroU32, time::Duration};

use serde::de::DeserializeOwned;
use url::Url;

use crate::feed::{ApiResponse, ArticleSummary, FetchError, GameweekReport, GameweekStrip};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything a client needs to reach the API; passed in, never read from globals
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Source of paginated article lists, in server order
pub trait ArticleFeed {
    async fn fetch_articles(
        &self,
        page_size: NonZeroU32,
        offset: u32,
    ) -> Result<Vec<ArticleSummary>, FetchError>;
}

pub struct RemoteFeedClient {
    http: reqwest::Client,
    api_base: Url,
}

impl RemoteFeedClient {
    /// Create a client for the API at `config.base_url`. The base may carry a
    /// path prefix but no query or fragment.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let api_base = Url::parse(&config.base_url)?;
        if api_base.cannot_be_a_base() || api_base.query().is_some() || api_base.fragment().is_some() {
            return Err(FetchError::InvalidUrl(format!(
                "{api_base} cannot be used as an API base"
            )));
        }
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { http, api_base })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_base.as_str().trim_end_matches('/')
    }

    /// `{base}/{segments..}`, each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        // new() only accepts bases that can carry a path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Articles of a single fixture, newest first
    pub async fn fetch_fixture_articles(
        &self,
        fixture_id: &str,
        page_size: NonZeroU32,
        offset: u32,
    ) -> Result<Vec<ArticleSummary>, FetchError> {
        let mut url = self.endpoint(&["api", "articles"]);
        url.query_pairs_mut()
            .append_pair("fixture_id", fixture_id)
            .append_pair("limit", &page_size.to_string())
            .append_pair("offset", &offset.to_string());
        self.get(url).await
    }

    /// Fetch a single article by its ID
    pub async fn fetch_article(&self, id: &str) -> Result<ArticleSummary, FetchError> {
        self.get(self.endpoint(&["api", "articles", id])).await
    }

    /// The most recent article, which the site shows as its hero
    pub async fn fetch_featured(&self) -> Result<ArticleSummary, FetchError> {
        self.get(self.endpoint(&["api", "featured"])).await
    }

    /// Match reports of the given matchday, or of the latest one with reports
    pub async fn fetch_gameweek(&self, matchday: Option<u32>) -> Result<GameweekReport, FetchError> {
        let url = match matchday {
            Some(n) => self.endpoint(&["api", "gameweek", &n.to_string()]),
            None => self.endpoint(&["api", "gameweek", "latest"]),
        };
        self.get(url).await
    }

    /// One result card per fixture of the latest completed gameweek
    pub async fn fetch_gameweek_strip(&self) -> Result<GameweekStrip, FetchError> {
        let strip: GameweekStrip = self.get(self.endpoint(&["api", "gameweek", "strip"])).await?;
        tracing::info!(matchday = strip.matchday, cards = strip.strip_cards.len(), "fetched gameweek strip");

        Ok(strip)
    }

    /// GET `url` and unwrap the API envelope. Error statuses still carry an
    /// envelope, so the body is read regardless of the status code.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        tracing::debug!(%url, "requesting");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: ApiResponse<T> = serde_json::from_str(&body).inspect_err(|e| {
            tracing::warn!(%url, %status, "unreadable response: {e}");
        })?;
        envelope.into_result().inspect_err(|e| {
            tracing::warn!(%url, %status, "request failed: {e}");
        })
    }
}

impl ArticleFeed for RemoteFeedClient {
    /// Fetch one page of articles; the server's order is kept as is
    async fn fetch_articles(
        &self,
        page_size: NonZeroU32,
        offset: u32,
    ) -> Result<Vec<ArticleSummary>, FetchError> {
        let mut url = self.endpoint(&["api", "articles"]);
        url.query_pairs_mut()
            .append_pair("limit", &page_size.to_string())
            .append_pair("offset", &offset.to_string());
        let articles: Vec<ArticleSummary> = self.get(url).await?;
        tracing::info!(count = articles.len(), offset, "fetched articles");

        Ok(articles)
    }
}
