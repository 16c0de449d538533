use std::{fmt::Write, num::NonZeroU32};

use chrono::{DateTime, Utc};

use crate::{
    common::select_unique_fixtures,
    feed::{ArticleFeed, ArticleSummary, FetchError, GameweekReport, GameweekStrip},
    formatting::{format_kickoff, format_match_date, format_relative, format_short_date},
};

/// Fetch the first page of the feed and keep one article per fixture
pub async fn trending<F: ArticleFeed>(
    feed: &F,
    page_size: NonZeroU32,
    limit: usize,
) -> Result<Vec<ArticleSummary>, FetchError> {
    let page = feed.fetch_articles(page_size, 0).await?;
    let unique = select_unique_fixtures(&page, limit);
    tracing::info!(fetched = page.len(), kept = unique.len(), "selected trending fixtures");

    Ok(unique)
}

fn time_ago(article: &ArticleSummary, now: DateTime<Utc>) -> String {
    article
        .published_at()
        .map_or_else(|| String::from("-"), |ts| format_relative(ts, now))
}

fn byline(article: &ArticleSummary, now: DateTime<Utc>) -> String {
    format!(
        "{author} • {ago}",
        author = article.author.as_deref().unwrap_or("-"),
        ago = time_ago(article, now)
    )
}

/// Convert a trending list to a plain text string
#[must_use]
pub fn render_trending(items: &[ArticleSummary], now: DateTime<Utc>) -> String {
    let mut body = String::from("Trending\n\n");
    if items.is_empty() {
        body.push_str("No recent articles\n");
        return body;
    }
    for item in items {
        let _ = writeln!(body, "* {title} - {byline}", title = item.title, byline = byline(item, now));
    }
    body
}

/// A single article with its date, kick-off and related articles
#[must_use]
pub fn render_article(
    article: &ArticleSummary,
    related: &[ArticleSummary],
    now: DateTime<Utc>,
) -> String {
    let mut body = format!("{}\n{}\n", article.title, byline(article, now));

    let _ = write!(
        body,
        "\n{fixture} | {date}",
        fixture = article.fixture_label(),
        date = format_match_date(&article.match_date)
    );
    let kickoff = format_kickoff(article.extra_str("match_time").unwrap_or_default());
    if !kickoff.is_empty() {
        let _ = write!(body, " | {kickoff}");
    }
    body.push('\n');

    if let Some(content) = article.extra_str("content").or(article.extra_str("excerpt")) {
        let _ = write!(body, "\n{content}\n");
    }

    if !related.is_empty() {
        body.push_str("\nMore from this fixture:\n");
        for item in related {
            let _ = writeln!(body, "* {title} - {ago}", title = item.title, ago = time_ago(item, now));
        }
    }
    body
}

/// Articles of one fixture, as listed on the fixture page
#[must_use]
pub fn render_fixture(articles: &[ArticleSummary], now: DateTime<Utc>) -> String {
    let Some(first) = articles.first() else {
        return String::from("No articles for this fixture\n");
    };

    let mut body = format!(
        "{fixture}\n{date}\n\n",
        fixture = first.fixture_label(),
        date = format_match_date(&first.match_date)
    );
    for item in articles {
        let _ = writeln!(body, "* {title} - {byline}", title = item.title, byline = byline(item, now));
    }
    body
}

/// Scoreboard of a gameweek's match reports with the summary line
#[must_use]
pub fn render_gameweek(report: &GameweekReport) -> String {
    let mut body = format!("Matchday {}\n\n", report.matchday);
    for item in &report.match_reports {
        let score = item
            .extra_str("score_display")
            .or(item.extra_str("score"))
            .filter(|s| !s.is_empty())
            .unwrap_or("v");
        let _ = writeln!(
            body,
            "* {home} {score} {away} - {title}",
            home = item.home_team,
            away = item.away_team,
            title = item.title
        );
    }

    let summary = &report.summary;
    let _ = write!(
        body,
        "\n{matches} matches, {goals} goals, {avg:.1} per match{complete}\n",
        matches = summary.total_matches,
        goals = summary.total_goals,
        avg = summary.avg_goals_per_match,
        complete = if summary.gameweek_complete { "" } else { " (in progress)" }
    );
    body
}

/// Results strip of the latest gameweek, one line per fixture
#[must_use]
pub fn render_strip(strip: &GameweekStrip) -> String {
    let mut body = format!(
        "Matchday {} Results ({} matches)\n\n",
        strip.matchday, strip.total_matches
    );
    if strip.strip_cards.is_empty() {
        body.push_str("No match results available\n");
        return body;
    }
    for card in &strip.strip_cards {
        let _ = write!(body, "* {}", card.fixture_label);
        if !card.score.is_empty() {
            let _ = write!(body, " {}", card.score);
        }
        let _ = writeln!(
            body,
            " ({date}) - article {id}",
            date = format_short_date(&card.match_date),
            id = card.id
        );
    }
    body
}

#[cfg(test)]
mod test {
    use std::num::NonZeroU32;

    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    use super::{
        render_article, render_fixture, render_gameweek, render_strip, render_trending, trending,
    };
    use crate::{
        common::fixtures::article,
        feed::{
            ArticleFeed, ArticleSummary, FetchError, GameweekReport, GameweekStrip, GameweekSummary,
            StripCard,
        },
    };

    struct StaticFeed {
        page: Vec<ArticleSummary>,
    }

    impl ArticleFeed for StaticFeed {
        async fn fetch_articles(
            &self,
            page_size: NonZeroU32,
            offset: u32,
        ) -> Result<Vec<ArticleSummary>, FetchError> {
            Ok(self
                .page
                .iter()
                .skip(offset as usize)
                .take(page_size.get() as usize)
                .cloned()
                .collect())
        }
    }

    struct FailingFeed;

    impl ArticleFeed for FailingFeed {
        async fn fetch_articles(
            &self,
            _page_size: NonZeroU32,
            _offset: u32,
        ) -> Result<Vec<ArticleSummary>, FetchError> {
            Err(FetchError::Api("rate limited".to_string()))
        }
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 17, 21, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_trending_dedupes_first_page() {
        let feed = StaticFeed {
            page: vec![
                article("1", "Arsenal", "Wolves", "2025-08-16"),
                article("2", "Arsenal", "Wolves", "2025-08-16"),
                article("3", "Leeds", "Everton", "2025-08-18"),
                article("4", "Chelsea", "Fulham", "2025-08-30"),
            ],
        };
        let items = trending(&feed, NonZeroU32::new(3).unwrap(), 5).await.unwrap();
        let ids: Vec<&str> = items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"], "Only the first page should be considered");
    }

    #[tokio::test]
    async fn test_trending_propagates_errors() {
        let result = trending(&FailingFeed, NonZeroU32::new(20).unwrap(), 5).await;
        assert!(matches!(result, Err(FetchError::Api(m)) if m == "rate limited"));
    }

    #[test]
    fn test_render_trending() {
        let mut second = article("2", "Leeds", "Everton", "2025-08-18");
        second.created_at = "not a date".to_string();
        second.author = None;
        let body = render_trending(&[article("1", "Arsenal", "Wolves", "2025-08-16"), second], now());

        assert_eq!(
            body,
            "Trending\n\n\
             * Arsenal v Wolves - Final Whistle AI • 3 hrs ago\n\
             * Leeds v Everton - - • -\n"
        );
        assert!(render_trending(&[], now()).contains("No recent articles"));
    }

    #[test]
    fn test_render_article_with_related() {
        let mut main = article("1", "Arsenal", "Wolves", "2025-08-16");
        main.extra
            .insert("match_time".to_string(), Value::from("17:30:00"));
        main.extra
            .insert("content".to_string(), Value::from("A late header settled it."));
        let related = vec![article("2", "Arsenal", "Wolves", "2025-08-16")];

        let body = render_article(&main, &related, now());
        assert!(body.starts_with("Arsenal v Wolves\nFinal Whistle AI • 3 hrs ago\n"));
        assert!(body.contains("Arsenal vs Wolves | Saturday, 16 August 2025 | 17:30\n"));
        assert!(body.contains("\nA late header settled it.\n"));
        assert!(body.ends_with("More from this fixture:\n* Arsenal v Wolves - 3 hrs ago\n"));

        let lone = render_article(&article("9", "Leeds", "Everton", "2025-08-18"), &[], now());
        assert!(!lone.contains("More from this fixture"));
        assert!(lone.contains("Leeds vs Everton | Monday, 18 August 2025\n"));
    }

    #[test]
    fn test_render_fixture() {
        let articles = vec![
            article("1", "Arsenal", "Wolves", "2025-08-16"),
            article("2", "Arsenal", "Wolves", "2025-08-16"),
        ];
        let body = render_fixture(&articles, now());
        assert!(body.starts_with("Arsenal vs Wolves\nSaturday, 16 August 2025\n\n"));
        assert_eq!(body.matches("* Arsenal v Wolves").count(), 2);
        assert_eq!(render_fixture(&[], now()), "No articles for this fixture\n");
    }

    #[test]
    fn test_render_gameweek() {
        let mut played = article("1", "Arsenal", "Wolves", "2025-08-16");
        played
            .extra
            .insert("score_display".to_string(), Value::from("2-1"));
        let pending = article("2", "Leeds", "Everton", "2025-08-18");
        let report = GameweekReport {
            matchday: 1,
            match_reports: vec![played, pending],
            summary: GameweekSummary {
                total_matches: 2,
                total_goals: 3,
                avg_goals_per_match: 1.5,
                gameweek_complete: false,
            },
        };

        let body = render_gameweek(&report);
        assert_eq!(
            body,
            "Matchday 1\n\n\
             * Arsenal 2-1 Wolves - Arsenal v Wolves\n\
             * Leeds v Everton - Leeds v Everton\n\
             \n2 matches, 3 goals, 1.5 per match (in progress)\n"
        );
    }

    fn card(id: &str, home: &str, away: &str, score: &str, date: &str) -> StripCard {
        StripCard {
            id: id.to_string(),
            title: format!("{home} v {away}"),
            fixture_id: 1000,
            fixture_label: format!("{home} vs {away}"),
            home_team: home.to_string(),
            away_team: away.to_string(),
            score: score.to_string(),
            image: None,
            match_date: date.to_string(),
        }
    }

    #[test]
    fn test_render_strip() {
        let strip = GameweekStrip {
            matchday: 1,
            total_matches: 2,
            strip_cards: vec![
                card("a1f3", "Arsenal", "Wolves", "2-1", "2025-08-16"),
                card("c9", "Leeds", "Everton", "", "2025-08-18"),
            ],
        };
        assert_eq!(
            render_strip(&strip),
            "Matchday 1 Results (2 matches)\n\n\
             * Arsenal vs Wolves 2-1 (16 Aug) - article a1f3\n\
             * Leeds vs Everton (18 Aug) - article c9\n"
        );

        let empty = GameweekStrip {
            matchday: 4,
            total_matches: 0,
            strip_cards: Vec::new(),
        };
        assert_eq!(
            render_strip(&empty),
            "Matchday 4 Results (0 matches)\n\nNo match results available\n"
        );
    }
}
