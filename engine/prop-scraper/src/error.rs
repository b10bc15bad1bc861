//! Error types for the prop scraper

use name_normalizer::LookupError;
use thiserror::Error;

/// Result type for prop scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while building the directory or scraping a page
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP request to {url} failed with status: {status}")]
    Status { url: String, status: u16 },

    #[error("Unexpected page structure: {0}")]
    Structure(String),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Odds error: {0}")]
    Odds(#[from] OddsError),

    #[error("Invalid prop line '{0}'")]
    InvalidLine(String),

    #[error("Unknown sportsbook '{0}'")]
    UnknownSite(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors converting a moneyline into a probability
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OddsError {
    #[error("Invalid moneyline '{moneyline}'")]
    Invalid { moneyline: String },
}

impl ScrapeError {
    pub fn structure(msg: impl Into<String>) -> Self {
        Self::Structure(msg.into())
    }
}
