#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
pub mod arg_parse;
pub mod common;
pub mod config;
pub mod digest;
pub mod feed;
pub mod formatting;
pub mod logging;

pub mod prelude {
    pub use super::arg_parse::{CmdArgs, FeedOperation};
    pub use super::common::{related_articles, select_unique_fixtures, Fixture, FixtureKey};
    pub use super::config::AppConfig;
    pub use super::feed::*;
    pub use super::formatting::*;
}
