//! Prop Scraper - NFL player props to fantasy point projections
//!
//! Reads per-player prop tables from scoresandodds.com, converts the over
//! moneylines into implied probabilities and turns each stat line into
//! fantasy points for FanDuel or DraftKings scoring.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod markup;
pub mod odds;
pub mod scoring;
pub mod scraper;
pub mod types;

pub use config::ScraperConfig;
pub use error::{OddsError, Result, ScrapeError};
pub use fetcher::{HttpFetcher, PageFetcher, StaticFetcher};
pub use odds::{expected_value, implied_probability};
pub use scoring::Site;
pub use scraper::PropScraper;
pub use types::{
    Directory, PlayerProjection, PropOutcome, PropRow, ScoredProp, ScoredProps, ScrapeOptions,
};
