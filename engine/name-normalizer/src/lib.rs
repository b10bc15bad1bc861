//! Name Normalizer - Reconciles team and player names across data sources
//!
//! The odds site spells teams out in full and occasionally disagrees with the
//! fantasy side on player names and team codes. This crate holds the static
//! tables that translate between the two.

pub mod normalizer;
pub mod tables;
pub mod types;

pub use normalizer::NameNormalizer;
pub use types::LookupError;
