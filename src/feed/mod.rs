mod data_types;
mod error;
mod fetcher;

pub use data_types::*;
pub use error::FetchError;
pub use fetcher::*;
