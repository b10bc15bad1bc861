use anyhow::{Context, Result};
use prop_scraper::{Directory, PropScraper, ScrapeOptions, ScraperConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Usage: scrape_props [TEAM] [--json]
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let team = args.iter().find(|a| !a.starts_with("--"));

    let config = ScraperConfig::from_env().context("Failed to load scraper configuration")?;
    let site = config.site;
    let options = ScrapeOptions { mute_touchdowns: config.mute_touchdowns };

    info!("Starting prop scraper for {} (mute touchdowns: {})...", site, options.mute_touchdowns);

    let scraper = PropScraper::new(config)?;
    let mut directory =
        scraper.create_webpage_directory().await.context("Failed to build player directory")?;

    if let Some(team) = team {
        let code = scraper.normalizer().initials_issue(&team.to_uppercase());
        let name = scraper.normalizer().team_initials(&code)?;
        let players = directory
            .remove(&code)
            .with_context(|| format!("{name} not found on the directory page"))?;
        directory = Directory::from([(code, players)]);
    }

    let mut projections = scraper.scrape_directory(&directory, site, options).await;
    projections.sort_by(|a, b| b.e_fpts().total_cmp(&a.e_fpts()));

    if json {
        println!("{}", serde_json::to_string_pretty(&projections)?);
        return Ok(());
    }

    println!("\nPlayer Prop Projections ({site}, {}):", scraper.current_date());
    println!("{:<4} {:<24} {:<4} {:>8} {:>8}", "Rank", "Name", "Team", "FPTS", "E-FPTS");
    println!("{}", "-".repeat(52));

    for (rank, player) in projections.iter().filter(|p| p.outcome.is_scored()).enumerate() {
        println!(
            "{:<4} {:<24} {:<4} {:>8.2} {:>8.2}",
            rank + 1,
            player.name,
            player.team,
            player.fpts(),
            player.e_fpts()
        );
    }

    let scored = projections.iter().filter(|p| p.outcome.is_scored()).count();
    println!("\nSummary:");
    println!("- Player pages scraped: {}", projections.len());
    println!("- Players with current props: {scored}");

    info!("Scraping completed successfully!");
    Ok(())
}
