//! Site scoring rules and per-row fantasy point math

use crate::error::{Result, ScrapeError};
use crate::odds::expected_value;
use crate::types::{PropRow, ScoredProp, ScoredProps};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Prop categories worth scoring. Steals and blocks exist on the page but
/// are noisy; season data covers them better.
const TARGET_CATEGORIES: [&str; 7] = [
    "Rushing Yards",
    "Receiving Yards",
    "Receptions",
    "Touchdowns",
    "Passing Tds",
    "Passing Yards",
    "Interceptions",
];

const TOUCHDOWN_POINTS: f64 = 6.0;

/// Daily fantasy sportsbook whose scoring is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    FanDuel,
    DraftKings,
}

impl Site {
    /// Category labels (as printed on the page) that are scored for this site
    pub fn target_categories(&self) -> &'static [&'static str] {
        match self {
            Site::FanDuel | Site::DraftKings => &TARGET_CATEGORIES,
        }
    }

    pub fn is_target(&self, category: &str) -> bool {
        self.target_categories().contains(&category)
    }

    /// Fantasy points per unit of a lower-cased stat category; 1.0 when unknown
    pub fn multiplier(&self, stat: &str, mute_touchdowns: bool) -> f64 {
        let receptions = match self {
            Site::FanDuel => 0.5,
            Site::DraftKings => 1.0,
        };
        let interceptions = match self {
            Site::FanDuel => -1.0,
            Site::DraftKings => -0.5,
        };

        match stat {
            "rushing yards" | "receiving yards" => 0.1,
            "receptions" => receptions,
            "touchdowns" if mute_touchdowns => 0.0,
            "touchdowns" => TOUCHDOWN_POINTS,
            "passing tds" => 4.0,
            "passing yards" => 0.04,
            "interceptions" => interceptions,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::FanDuel => write!(f, "fanduel"),
            Site::DraftKings => write!(f, "draftkings"),
        }
    }
}

impl FromStr for Site {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fanduel" => Ok(Site::FanDuel),
            "draftkings" => Ok(Site::DraftKings),
            _ => Err(ScrapeError::UnknownSite(s.to_string())),
        }
    }
}

/// Round to two decimal places, exact halves to even
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Score a single prop row
pub fn score_row(row: &PropRow, site: Site, mute_touchdowns: bool) -> Result<ScoredProp> {
    let stat = row.stat.to_lowercase().trim().to_string();
    let over_ml = row.over_ml.to_lowercase();

    let line = row.line.to_lowercase();
    let value = line
        .trim()
        .parse::<f64>()
        .map_err(|_| ScrapeError::InvalidLine(row.line.clone()))?
        + 0.0;

    let e_value = expected_value(value, &over_ml)?;
    let fpts = site.multiplier(&stat, mute_touchdowns) * value;
    let e_fpts = expected_value(fpts, &over_ml)?;

    Ok(ScoredProp {
        stat,
        value: round2(value),
        e_value: round2(e_value),
        fpts: round2(fpts),
        e_fpts: round2(e_fpts),
    })
}

/// Score every row in a site's target categories; other rows are dropped
pub fn score_rows(rows: &[PropRow], site: Site, mute_touchdowns: bool) -> ScoredProps {
    let mut scored = ScoredProps::default();

    for row in rows.iter().filter(|row| site.is_target(&row.stat)) {
        match score_row(row, site, mute_touchdowns) {
            Ok(prop) => scored.rows.push(prop),
            Err(e) => {
                warn!("Skipping {} row: {}", row.stat, e);
                continue;
            }
        }
    }

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::implied_probability;

    #[test]
    fn test_site_parsing() {
        assert_eq!("fanduel".parse::<Site>().unwrap(), Site::FanDuel);
        assert_eq!("DraftKings".parse::<Site>().unwrap(), Site::DraftKings);
        assert!(matches!("betmgm".parse::<Site>(), Err(ScrapeError::UnknownSite(_))));
        assert_eq!(Site::DraftKings.to_string(), "draftkings");
    }

    #[test]
    fn test_both_sites_share_targets() {
        assert_eq!(Site::FanDuel.target_categories(), Site::DraftKings.target_categories());
        assert_eq!(Site::FanDuel.target_categories().len(), 7);
        assert!(Site::FanDuel.is_target("Passing Tds"));
        assert!(!Site::FanDuel.is_target("passing tds"));
        assert!(!Site::FanDuel.is_target("Longest Reception"));
    }

    #[test]
    fn test_site_multipliers() {
        assert_eq!(Site::FanDuel.multiplier("receptions", true), 0.5);
        assert_eq!(Site::DraftKings.multiplier("receptions", true), 1.0);
        assert_eq!(Site::FanDuel.multiplier("interceptions", true), -1.0);
        assert_eq!(Site::DraftKings.multiplier("interceptions", true), -0.5);
        assert_eq!(Site::FanDuel.multiplier("passing yards", true), 0.04);
        assert_eq!(Site::FanDuel.multiplier("longest reception", true), 1.0);
    }

    #[test]
    fn test_fanduel_receptions_example() {
        let row = PropRow::new("Receptions", "4.5", "-110", "-110");
        let scored = score_row(&row, Site::FanDuel, true).unwrap();
        let p = implied_probability("-110").unwrap();

        assert_eq!(scored.stat, "receptions");
        assert_eq!(scored.value, 4.5);
        assert_eq!(scored.fpts, 2.25);
        assert_eq!(scored.e_value, round2(p * 4.5));
        assert_eq!(scored.e_fpts, round2(p * 2.25));
        assert_eq!(scored.e_value, 2.36);
        assert_eq!(scored.e_fpts, 1.18);
    }

    #[test]
    fn test_even_odds_halves_round_to_even() {
        let row = PropRow::new("Receptions", "4.5", "+100", "-120");
        let scored = score_row(&row, Site::FanDuel, true).unwrap();

        // 2.25 * 0.5 = 1.125
        assert_eq!(scored.fpts, 2.25);
        assert_eq!(scored.e_fpts, 1.12);
        assert_eq!(scored.e_value, 2.25);

        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_draftkings_touchdowns_muting() {
        let row = PropRow::new("Touchdowns", "0.5", "+150", "-190");

        let unmuted = score_row(&row, Site::DraftKings, false).unwrap();
        assert_eq!(Site::DraftKings.multiplier("touchdowns", false), 6.0);
        assert_eq!(unmuted.fpts, 3.0);
        assert_eq!(unmuted.e_fpts, 1.2);

        let muted = score_row(&row, Site::DraftKings, true).unwrap();
        assert_eq!(Site::DraftKings.multiplier("touchdowns", true), 0.0);
        assert_eq!(muted.fpts, 0.0);
        assert_eq!(muted.e_fpts, 0.0);
        assert_eq!(muted.value, 0.5);
    }

    #[test]
    fn test_score_rows_filters_non_targets() {
        let rows = vec![
            PropRow::new("Receiving Yards", "55.5", "-115", "-105"),
            PropRow::new("Longest Reception", "18.5", "-110", "-110"),
            PropRow::new("Receptions", "4.5", "-110", "-110"),
        ];

        let scored = score_rows(&rows, Site::FanDuel, true);
        assert_eq!(scored.len(), 2);
        assert!(scored.rows.iter().all(|r| r.stat != "longest reception"));

        let (fpts, e_fpts) = scored.totals();
        assert!((fpts - (5.55 + 2.25)).abs() < 1e-9);
        // 5.55 * 115/215 = 2.968..., 2.25 * 110/210 = 1.178...
        assert!((e_fpts - (2.97 + 1.18)).abs() < 1e-9);
    }

    #[test]
    fn test_score_rows_skips_unparseable_rows() {
        let rows = vec![
            PropRow::new("Rushing Yards", "OFF", "-110", "-110"),
            PropRow::new("Passing Yards", "250.5", "even", "-110"),
            PropRow::new("Passing Tds", "1.5", "+120", "-150"),
        ];

        let scored = score_rows(&rows, Site::DraftKings, true);
        assert_eq!(scored.len(), 1);
        assert_eq!(scored.rows[0].stat, "passing tds");
        assert_eq!(scored.rows[0].fpts, 6.0);
    }

    #[test]
    fn test_invalid_line_error() {
        let row = PropRow::new("Receptions", "n/a", "-110", "-110");
        assert!(matches!(score_row(&row, Site::FanDuel, true), Err(ScrapeError::InvalidLine(_))));
    }
}
