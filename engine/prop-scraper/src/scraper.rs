use crate::config::ScraperConfig;
use crate::error::Result;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::markup::{self, normalize_date_token, two_token_name};
use crate::scoring::{score_rows, Site};
use crate::types::{Directory, PlayerProjection, PropOutcome, ScrapeOptions};
use chrono::{Local, NaiveDate};
use name_normalizer::NameNormalizer;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// scoresandodds.com player prop scraper
///
/// Builds the player directory and turns each player's prop table into
/// fantasy points (`fpts`) and probability-weighted fantasy points (`e_fpts`).
pub struct PropScraper<F = HttpFetcher> {
    fetcher: F,
    config: ScraperConfig,
    normalizer: Arc<NameNormalizer>,
    /// Today as "MM/DD"; pages dated otherwise are stale
    current_date: String,
}

impl PropScraper<HttpFetcher> {
    /// Create a new scraper fetching over HTTP
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: PageFetcher> PropScraper<F> {
    /// Create a scraper reading pages from the given fetcher
    pub fn with_fetcher(config: ScraperConfig, fetcher: F) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            fetcher,
            config,
            normalizer: Arc::new(NameNormalizer::new()),
            current_date: Local::now().format("%m/%d").to_string(),
        })
    }

    /// Use a custom name normalizer
    pub fn with_normalizer(mut self, normalizer: Arc<NameNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Treat `date` as today when checking page freshness
    pub fn with_current_date(mut self, date: NaiveDate) -> Self {
        self.current_date = date.format("%m/%d").to_string();
        self
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    /// Build the team -> player -> prop page URL directory
    ///
    /// Fails as a whole on any malformed team module or unknown team name.
    pub async fn create_webpage_directory(&self) -> Result<Directory> {
        info!("Fetching player directory from: {}", self.config.directory_url);

        let html = self.fetcher.fetch(&self.config.directory_url).await?;
        let teams = markup::parse_directory(&html)?;

        let mut directory = Directory::new();
        for team in teams {
            let code = self.normalizer.team_name(&team.heading)?;

            let players: BTreeMap<String, String> = team
                .links
                .iter()
                .map(|link| {
                    let name = self.normalizer.player_name(&two_token_name(&link.text));
                    (name, self.config.player_url(&link.href))
                })
                .collect();

            debug!("{}: {} players", code, players.len());
            directory.insert(code, players);
        }

        info!(
            "Built directory with {} teams and {} players",
            directory.len(),
            directory.values().map(BTreeMap::len).sum::<usize>()
        );

        Ok(directory)
    }

    /// Scrape one player's prop page
    ///
    /// Empty pages and pages dated for another day are not errors; they come
    /// back as [`PropOutcome::NoData`] and [`PropOutcome::Stale`].
    pub async fn scrape_player_props(
        &self,
        name: &str,
        url: &str,
        site: Site,
        options: ScrapeOptions,
    ) -> Result<PropOutcome> {
        let html = self.fetcher.fetch(url).await?;
        let page = markup::parse_player_page(&html)?;

        if page.span_count == 0 {
            debug!("{} -> no spans on page", name);
            return Ok(PropOutcome::NoData);
        }

        // Make sure current
        let Some(token) = page.date_token else {
            debug!("{} -> page has {} spans but no date", name, page.span_count);
            return Ok(PropOutcome::NoData);
        };

        let page_date = normalize_date_token(&token);
        if page_date != self.current_date {
            debug!("{} -> props dated {}, today is {}", name, page_date, self.current_date);
            return Ok(PropOutcome::Stale { page_date });
        }

        let rows = page.prop_rows.unwrap_or_else(|| {
            warn!("{} -> prop table missing", name);
            Vec::new()
        });

        let props = score_rows(&rows, site, options.mute_touchdowns);
        let (fpts, e_fpts) = props.totals();
        debug!("{} -> {} props, {:.2} fpts, {:.2} e_fpts", name, props.len(), fpts, e_fpts);

        Ok(PropOutcome::Scored(props))
    }

    /// Scrape one player's prop page and return `(fpts, e_fpts)`
    pub async fn scrape_player_totals(
        &self,
        name: &str,
        url: &str,
        site: Site,
        options: ScrapeOptions,
    ) -> Result<(f64, f64)> {
        Ok(self.scrape_player_props(name, url, site, options).await?.totals())
    }

    /// Scrape every player in a directory, one page at a time
    ///
    /// A player whose page cannot be fetched is logged and left out.
    pub async fn scrape_directory(
        &self,
        directory: &Directory,
        site: Site,
        options: ScrapeOptions,
    ) -> Vec<PlayerProjection> {
        let total: usize = directory.values().map(BTreeMap::len).sum();
        info!("Scraping {} player pages for {}", total, site);

        let mut projections = Vec::with_capacity(total);
        let mut first = true;

        for (team, players) in directory {
            for (name, url) in players {
                if !first && !self.config.request_delay().is_zero() {
                    tokio::time::sleep(self.config.request_delay()).await;
                }
                first = false;

                match self.scrape_player_props(name, url, site, options).await {
                    Ok(outcome) => projections.push(PlayerProjection {
                        team: team.clone(),
                        name: name.clone(),
                        url: url.clone(),
                        outcome,
                    }),
                    Err(e) => {
                        warn!("Failed to scrape {} ({}): {}", name, team, e);
                        continue;
                    }
                }
            }
        }

        let scored = projections.iter().filter(|p| p.outcome.is_scored()).count();
        info!("Scraped {} players, {} with current props", projections.len(), scored);

        projections
    }
}
