//! Configuration for the prop scraper

use crate::error::{Result, ScrapeError};
use crate::scoring::Site;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the prop scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Player directory page (one module per team)
    pub directory_url: String,

    /// Path component of `directory_url` that player links replace
    pub directory_path: String,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Pause between player page requests in milliseconds
    pub request_delay_ms: u64,

    /// Sportsbook whose scoring multipliers are applied
    pub site: Site,

    /// Zero the touchdown multiplier (touchdowns come from season data instead)
    pub mute_touchdowns: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            directory_url: "https://www.scoresandodds.com/nfl/players".to_string(),
            directory_path: "/nfl/players".to_string(),
            request_timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            request_delay_ms: 500,
            site: Site::FanDuel,
            mute_touchdowns: true,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PROPS_DIRECTORY_URL") {
            config.directory_url = url;
        }

        if let Ok(site) = std::env::var("PROPS_SITE") {
            config.site = site.parse()?;
        }

        if let Ok(mute) = std::env::var("PROPS_MUTE_TOUCHDOWNS") {
            config.mute_touchdowns = parse_env("PROPS_MUTE_TOUCHDOWNS", &mute)?;
        }

        if let Ok(delay) = std::env::var("PROPS_REQUEST_DELAY_MS") {
            config.request_delay_ms = parse_env("PROPS_REQUEST_DELAY_MS", &delay)?;
        }

        if let Ok(timeout) = std::env::var("PROPS_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = parse_env("PROPS_REQUEST_TIMEOUT_SECS", &timeout)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.directory_url.is_empty() {
            return Err(ScrapeError::Config("directory_url must not be empty".to_string()));
        }

        if self.directory_path.is_empty() || !self.directory_url.contains(&self.directory_path) {
            return Err(ScrapeError::Config(format!(
                "directory_url '{}' does not contain path '{}'",
                self.directory_url, self.directory_path
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ScrapeError::Config("request_timeout_secs must be positive".to_string()));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Absolute URL for a player link found on the directory page
    pub fn player_url(&self, href: &str) -> String {
        self.directory_url.replacen(&self.directory_path, href, 1)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ScrapeError::Config(format!("{key} has invalid value '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScraperConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.mute_touchdowns);
        assert_eq!(config.site, Site::FanDuel);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.request_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_player_url_replaces_directory_path() {
        let config = ScraperConfig::default();
        assert_eq!(
            config.player_url("/nfl/players/patrick-mahomes-12345"),
            "https://www.scoresandodds.com/nfl/players/patrick-mahomes-12345"
        );
    }

    #[test]
    fn test_validate_rejects_mismatched_path() {
        let config = ScraperConfig {
            directory_url: "https://example.com/players".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ScrapeError::Config(_))));

        let config = ScraperConfig { directory_url: String::new(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ScrapeError::Config(_))));
    }

    #[test]
    fn test_parse_env_values() {
        assert!(parse_env::<bool>("PROPS_MUTE_TOUCHDOWNS", "false").is_ok_and(|v| !v));
        assert_eq!(parse_env::<u64>("PROPS_REQUEST_DELAY_MS", " 250 ").unwrap(), 250);
        assert!(parse_env::<u64>("PROPS_REQUEST_DELAY_MS", "soon").is_err());
    }
}
