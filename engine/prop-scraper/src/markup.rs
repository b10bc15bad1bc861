//! Markup extraction for scoresandodds.com pages
//!
//! Every selector and positional assumption about the site's HTML lives here.
//! The rest of the crate only sees the plain values these functions return.

use crate::error::{Result, ScrapeError};
use crate::types::PropRow;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Index of the span holding "<weekday> <M/D> ..." on a player page
const DATE_SPAN_INDEX: usize = 18;

/// A team module on the directory page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamBlock {
    /// Heading text, e.g. "Kansas City Chiefs"
    pub heading: String,
    pub links: Vec<PlayerLink>,
}

/// A player link inside a team module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLink {
    /// Link text as displayed, e.g. "Patrick Mahomes II QB"
    pub text: String,
    /// Site-relative href, e.g. "/nfl/players/patrick-mahomes-ii-12345"
    pub href: String,
}

/// What a player prop page contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPage {
    /// Number of span elements on the page
    pub span_count: usize,
    /// Date token from the fixed date span, e.g. "10/6"
    pub date_token: Option<String>,
    /// Rows of the sticky prop table, `None` when the table is missing
    pub prop_rows: Option<Vec<PropRow>>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::structure(format!("Failed to create selector '{css}': {e}")))
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parse the player directory page into team modules
///
/// Any team module without a heading, a `module-body` or a player list, and
/// any link without an href, fails the whole parse.
pub fn parse_directory(html: &str) -> Result<Vec<TeamBlock>> {
    let document = Html::parse_document(html);

    let module_selector = selector("div.module")?;
    let heading_selector = selector("h3")?;
    let body_selector = selector("div.module-body")?;
    let list_selector = selector("ul")?;
    let link_selector = selector("a")?;

    let mut teams = Vec::new();

    for (index, module) in document.select(&module_selector).enumerate() {
        let heading = module
            .select(&heading_selector)
            .next()
            .map(|h| element_text(&h))
            .ok_or_else(|| ScrapeError::structure(format!("Team module {index} has no heading")))?;

        let body = module.select(&body_selector).next().ok_or_else(|| {
            ScrapeError::structure(format!("Team module '{heading}' has no module-body"))
        })?;

        let list = body.select(&list_selector).next().ok_or_else(|| {
            ScrapeError::structure(format!("Team module '{heading}' has no player list"))
        })?;

        let mut links = Vec::new();
        for anchor in list.select(&link_selector) {
            let text = element_text(&anchor);
            let href = anchor.value().attr("href").ok_or_else(|| {
                ScrapeError::structure(format!("Player link '{text}' in '{heading}' has no href"))
            })?;

            links.push(PlayerLink { text, href: href.to_string() });
        }

        teams.push(TeamBlock { heading, links });
    }

    Ok(teams)
}

/// Parse a player prop page
pub fn parse_player_page(html: &str) -> Result<PlayerPage> {
    let document = Html::parse_document(html);

    let span_selector = selector("span")?;
    let table_selector = selector("table.sticky")?;
    let body_selector = selector("tbody")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let spans: Vec<ElementRef> = document.select(&span_selector).collect();

    let date_token = spans.get(DATE_SPAN_INDEX).and_then(|span| {
        let text = span.text().collect::<String>();
        text.split_whitespace().nth(1).map(str::to_string)
    });

    let tbody = document
        .select(&table_selector)
        .next()
        .and_then(|table| table.select(&body_selector).next());

    let prop_rows = tbody.map(|tbody| {
        tbody
            .select(&row_selector)
            .filter_map(|row| {
                let cells: Vec<String> =
                    row.select(&cell_selector).map(|c| element_text(&c)).collect();

                // Form: Category Line Over Under
                match cells.as_slice() {
                    [stat, line, over, under, ..] => Some(PropRow::new(stat, line, over, under)),
                    _ => {
                        debug!("Ignoring prop row with {} cells", cells.len());
                        None
                    }
                }
            })
            .collect()
    });

    Ok(PlayerPage { span_count: spans.len(), date_token, prop_rows })
}

/// Zero-pad each "/"-separated component: "9/7" -> "09/07"
pub fn normalize_date_token(token: &str) -> String {
    token
        .split('/')
        .map(|part| if part.len() == 1 { format!("0{part}") } else { part.to_string() })
        .collect::<Vec<_>>()
        .join("/")
}

/// Reduce link text to "First Last" with periods stripped
pub fn two_token_name(text: &str) -> String {
    text.split_whitespace().take(2).collect::<Vec<_>>().join(" ").replace('.', "")
}
