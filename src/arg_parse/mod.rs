use std::io::Error;

/// What the CLI was asked to show
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOperation {
    Trending,
    Article(String),
    Featured,
    Fixture(String),
    /// `None` is the latest gameweek with reports
    Gameweek(Option<u32>),
    /// One result card per fixture of the latest gameweek
    Strip,
}

#[derive(Debug, Clone)]
pub struct CmdArgs {
    pub config: String,
    pub api_url: Option<String>,
    pub limit: Option<usize>,
    pub article: Option<String>,
    pub featured: bool,
    pub fixture: Option<String>,
    pub gameweek: bool,
    pub matchday: Option<u32>,
    pub strip: bool,
}

impl CmdArgs {
    pub fn parse(args: Vec<String>) -> Result<Self, Error> {
        let mut config = String::from("./config.json");
        let mut api_url: Option<String> = None;
        let mut limit: Option<usize> = None;
        let mut article: Option<String> = None;
        let mut featured = false;
        let mut fixture: Option<String> = None;
        let mut gameweek = false;
        let mut matchday: Option<u32> = None;
        let mut strip = false;
        {
            let mut ap = argparse::ArgumentParser::new();
            ap.set_description("Football match reports from the command line");
            ap.refer(&mut config).add_option(
                &["-c", "--config"],
                argparse::Store,
                "Config file path; default is config.json",
            );
            ap.refer(&mut api_url).add_option(
                &["-u", "--api-url"],
                argparse::StoreOption,
                "API base URL; overrides the config file",
            );
            ap.refer(&mut limit).add_option(
                &["-l", "--limit"],
                argparse::StoreOption,
                "Number of trending fixtures to show",
            );
            ap.refer(&mut article).add_option(
                &["-a", "--article"],
                argparse::StoreOption,
                "Show a single article and related ones",
            );
            ap.refer(&mut featured).add_option(
                &["-f", "--featured"],
                argparse::StoreTrue,
                "Show the featured article",
            );
            ap.refer(&mut fixture).add_option(
                &["-x", "--fixture"],
                argparse::StoreOption,
                "List the articles of a fixture",
            );
            ap.refer(&mut gameweek).add_option(
                &["-g", "--gameweek"],
                argparse::StoreTrue,
                "Show the latest gameweek's match reports",
            );
            ap.refer(&mut matchday).add_option(
                &["-m", "--matchday"],
                argparse::StoreOption,
                "Show the match reports of a specific matchday",
            );
            ap.refer(&mut strip).add_option(
                &["-s", "--strip"],
                argparse::StoreTrue,
                "Show the latest gameweek's results, one per fixture",
            );

            match ap.parse(args, &mut std::io::stdout(), &mut std::io::stderr()) {
                Ok(()) => {}
                Err(_) => {
                    return Err(Error::from(std::io::ErrorKind::InvalidInput));
                }
            }
        }

        Ok(CmdArgs {
            config,
            api_url,
            limit,
            article,
            featured,
            fixture,
            gameweek,
            matchday,
            strip,
        })
    }

    /// An explicit article wins over a fixture, which wins over the featured
    /// article, the results strip and the gameweek views
    #[must_use]
    pub fn get_action(&self) -> FeedOperation {
        if let Some(id) = &self.article {
            FeedOperation::Article(id.clone())
        } else if let Some(id) = &self.fixture {
            FeedOperation::Fixture(id.clone())
        } else if self.featured {
            FeedOperation::Featured
        } else if self.strip {
            FeedOperation::Strip
        } else if self.matchday.is_some() || self.gameweek {
            FeedOperation::Gameweek(self.matchday)
        } else {
            FeedOperation::Trending
        }
    }
}
