use thiserror::Error;

/// Failure of a single call against the news API
#[derive(Error, Debug)]
pub enum FetchError {
    /// No response was obtained: connection refused, timeout, broken body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with `success: false`
    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The base URL does not parse, or cannot have API paths appended
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::InvalidUrl(e.to_string())
    }
}

impl FetchError {
    /// Message suitable for showing to a reader, mirroring what the site displays
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network(_) => String::from("Network error: Unable to fetch articles"),
            FetchError::Api(message) => message.clone(),
            FetchError::Decode(_) => String::from("Received an unreadable response from the API"),
            FetchError::InvalidUrl(e) => format!("Invalid API address: {e}"),
        }
    }
}
