#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
use std::{path::Path, process::ExitCode};

use matchday_feed::{digest, logging::init_logging, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = &CmdArgs::parse(std::env::args().collect())?;
    let config_found = Path::new(&args.config).exists();
    let mut config = if config_found {
        AppConfig::from_file(&args.config)?
    } else {
        AppConfig::default()
    };

    init_logging(&config.log_level);
    if !config_found {
        tracing::warn!(path = %args.config, "config file not found, using defaults");
    }
    if let Some(url) = &args.api_url {
        config.api_base_url.clone_from(url);
    }

    let client = RemoteFeedClient::new(&config.client_config())?;
    match run(&client, &config, args).await {
        Ok(body) => {
            print!("{body}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(api = client.base_url(), "{e}");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(
    client: &RemoteFeedClient,
    config: &AppConfig,
    args: &CmdArgs,
) -> Result<String, FetchError> {
    let now = chrono::Utc::now();

    match args.get_action() {
        FeedOperation::Trending => {
            let limit = args.limit.unwrap_or(config.trending_limit);
            let items = digest::trending(client, config.page_size, limit).await?;
            Ok(digest::render_trending(&items, now))
        }
        FeedOperation::Article(id) => {
            let article = client.fetch_article(&id).await?;
            // Related articles are a nicety; a failure here leaves the list empty
            let related = match client.fetch_articles(config.page_size, 0).await {
                Ok(page) => related_articles(&article, &page, config.related_limit),
                Err(e) => {
                    tracing::warn!("could not fetch related articles: {e}");
                    Vec::new()
                }
            };
            Ok(digest::render_article(&article, &related, now))
        }
        FeedOperation::Featured => {
            let article = client.fetch_featured().await?;
            Ok(digest::render_article(&article, &[], now))
        }
        FeedOperation::Fixture(id) => {
            let articles = client
                .fetch_fixture_articles(&id, config.fixture_page_size, 0).await?;
            Ok(digest::render_fixture(&articles, now))
        }
        FeedOperation::Gameweek(matchday) => {
            let report = client.fetch_gameweek(matchday).await?;
            Ok(digest::render_gameweek(&report))
        }
        FeedOperation::Strip => {
            let strip = client.fetch_gameweek_strip().await?;
            Ok(digest::render_strip(&strip))
        }
    }
}
