use thiserror::Error;

/// Errors that can occur during name lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Full team name is not one of the league franchises
    #[error("Team name '{0}' not found in team table")]
    UnknownTeamName(String),

    /// Team code is not one of the league franchises
    #[error("Team code '{0}' not found in team table")]
    UnknownTeamCode(String),

    /// An override maps onto another override key, which would make lookups non-idempotent
    #[error("Override '{from}' -> '{to}' chains into another override")]
    ConflictingOverride { from: String, to: String },
}
