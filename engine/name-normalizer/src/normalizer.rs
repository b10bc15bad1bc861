use crate::tables::{CODE_CORRECTIONS, PLAYER_OVERRIDES, TEAMS};
use crate::types::LookupError;
use std::collections::HashMap;
use tracing::debug;

/// Name Normalizer - Translates odds-site names into fantasy-side names
///
/// All tables are built at construction and never mutated afterwards, so a
/// single instance can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    /// Map from team code to full team name
    names_by_code: HashMap<String, String>,

    /// Map from full team name to team code
    codes_by_name: HashMap<String, String>,

    /// Misspelled team codes and their corrections
    code_corrections: HashMap<String, String>,

    /// Odds-site player names and their fantasy-side spelling
    player_overrides: HashMap<String, String>,
}

impl NameNormalizer {
    /// Create a normalizer with the built-in tables
    pub fn new() -> Self {
        let names_by_code: HashMap<String, String> =
            TEAMS.iter().map(|(code, name)| (code.to_string(), name.to_string())).collect();

        // Invert
        let codes_by_name =
            names_by_code.iter().map(|(code, name)| (name.clone(), code.clone())).collect();

        Self {
            names_by_code,
            codes_by_name,
            code_corrections: pairs_to_map(&CODE_CORRECTIONS),
            player_overrides: pairs_to_map(&PLAYER_OVERRIDES),
        }
    }

    /// Create a normalizer with extra player overrides and code corrections on
    /// top of the built-in tables
    pub fn with_overrides<P, C>(players: P, codes: C) -> Result<Self, LookupError>
    where
        P: IntoIterator<Item = (String, String)>,
        C: IntoIterator<Item = (String, String)>,
    {
        let mut normalizer = Self::new();
        normalizer.player_overrides.extend(players);
        normalizer.code_corrections.extend(codes);

        check_no_chains(&normalizer.player_overrides)?;
        check_no_chains(&normalizer.code_corrections)?;

        debug!(
            "Built normalizer with {} player overrides and {} code corrections",
            normalizer.player_overrides.len(),
            normalizer.code_corrections.len()
        );
        Ok(normalizer)
    }

    /// Look up a full team name (e.g. "Kansas City Chiefs") and return its code
    pub fn team_name(&self, team: &str) -> Result<String, LookupError> {
        self.codes_by_name
            .get(team)
            .cloned()
            .ok_or_else(|| LookupError::UnknownTeamName(team.to_string()))
    }

    /// Look up a team code (e.g. "KC") and return the full team name
    pub fn team_initials(&self, code: &str) -> Result<String, LookupError> {
        self.names_by_code
            .get(code)
            .cloned()
            .ok_or_else(|| LookupError::UnknownTeamCode(code.to_string()))
    }

    /// Return the corrected player name, or the input when no override exists
    pub fn player_name(&self, name: &str) -> String {
        self.player_overrides.get(name).cloned().unwrap_or_else(|| name.to_string())
    }

    /// Correct a team code the odds site misspells; other codes pass through
    pub fn initials_issue(&self, code: &str) -> String {
        self.code_corrections.get(code).cloned().unwrap_or_else(|| code.to_string())
    }

    /// All known team codes
    pub fn team_codes(&self) -> impl Iterator<Item = &str> {
        self.names_by_code.keys().map(String::as_str)
    }

    /// Number of known teams
    pub fn team_count(&self) -> usize {
        self.names_by_code.len()
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn pairs_to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(from, to)| (from.to_string(), to.to_string())).collect()
}

fn check_no_chains(table: &HashMap<String, String>) -> Result<(), LookupError> {
    for (from, to) in table {
        // Identity entries are terminal, so pointing at one is fine
        if from != to && table.get(to).is_some_and(|next| next != to) {
            return Err(LookupError::ConflictingOverride { from: from.clone(), to: to.clone() });
        }
    }
    Ok(())
}
