use std::{num::NonZeroU32, time::Duration};

use serde::{Deserialize, Serialize};

use crate::feed::{ClientConfig, DEFAULT_API_BASE_URL};

const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_FIXTURE_PAGE_SIZE: u32 = 50;
const DEFAULT_TRENDING_LIMIT: usize = 5;
const DEFAULT_RELATED_LIMIT: usize = 4;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout_secs: u64,
    /// How many articles to pull per page before picking unique fixtures
    pub page_size: NonZeroU32,
    pub fixture_page_size: NonZeroU32,
    pub trending_limit: usize,
    pub related_limit: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN),
            fixture_page_size: NonZeroU32::new(DEFAULT_FIXTURE_PAGE_SIZE).unwrap_or(NonZeroU32::MIN),
            trending_limit: DEFAULT_TRENDING_LIMIT,
            related_limit: DEFAULT_RELATED_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_file(file_name: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(file_name)?;
        let config: AppConfig = serde_json::from_str(&contents)?;

        Ok(config)
    }

    pub fn from_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: AppConfig = serde_json::from_str(contents)?;

        Ok(config)
    }

    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
