use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Team code -> player name -> player prop page URL
pub type Directory = BTreeMap<String, BTreeMap<String, String>>;

/// One stat line as read from a player's prop table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropRow {
    /// Category label (e.g. "Receiving Yards")
    pub stat: String,
    /// Over/under threshold, unparsed
    pub line: String,
    /// Moneyline for the over (e.g. "-110")
    pub over_ml: String,
    /// Moneyline for the under
    pub under_ml: String,
}

impl PropRow {
    pub fn new(stat: &str, line: &str, over_ml: &str, under_ml: &str) -> Self {
        Self {
            stat: stat.to_string(),
            line: line.to_string(),
            over_ml: over_ml.to_string(),
            under_ml: under_ml.to_string(),
        }
    }
}

/// A scored stat line; every numeric column is rounded to two decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProp {
    /// Lower-cased category label
    pub stat: String,
    /// Prop line
    pub value: f64,
    /// Prop line weighted by the over's implied probability
    pub e_value: f64,
    /// Fantasy points for hitting the line
    pub fpts: f64,
    /// Fantasy points weighted by the over's implied probability
    pub e_fpts: f64,
}

/// All scored stat lines for one player page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredProps {
    pub rows: Vec<ScoredProp>,
}

impl ScoredProps {
    /// Sum of the `fpts` and `e_fpts` columns
    pub fn totals(&self) -> (f64, f64) {
        self.rows
            .iter()
            .fold((0.0, 0.0), |(fpts, e_fpts), row| (fpts + row.fpts, e_fpts + row.e_fpts))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Result of scraping one player page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PropOutcome {
    /// Placeholder page with nothing to read
    NoData,
    /// Props are listed for another day
    Stale { page_date: String },
    /// Props for today, scored
    Scored(ScoredProps),
}

impl PropOutcome {
    /// `(fpts, e_fpts)`, zero for pages without current props
    pub fn totals(&self) -> (f64, f64) {
        match self {
            PropOutcome::Scored(props) => props.totals(),
            PropOutcome::NoData | PropOutcome::Stale { .. } => (0.0, 0.0),
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, PropOutcome::Scored(_))
    }
}

/// Per-call scraping options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeOptions {
    /// Zero the touchdown multiplier to avoid double counting season touchdown data
    pub mute_touchdowns: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { mute_touchdowns: true }
    }
}

/// One player's scrape result, as produced by a directory-wide run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProjection {
    /// Team code (e.g. "KC")
    pub team: String,
    /// Player name (e.g. "Travis Kelce")
    pub name: String,
    /// Prop page URL
    pub url: String,
    pub outcome: PropOutcome,
}

impl PlayerProjection {
    pub fn fpts(&self) -> f64 {
        self.outcome.totals().0
    }

    pub fn e_fpts(&self) -> f64 {
        self.outcome.totals().1
    }
}
