//! Error types for the forage-core crate.
//!
//! Classification and resolution are total over well-formed input, so the
//! only runtime errors are caller defects (a dispenser with nothing to dispense),
//! data-integrity violations in profile tables, and settings/config access.

use forage_types::{Category, ItemId};

/// Errors raised while classifying a candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// The candidate is a dispenser with no dispensed definition.
    #[error("dispenser {item} has no dispensed definition to classify")]
    MissingDefinition {
        /// The offending candidate.
        item: ItemId,
    },
}

/// Data-integrity violations in a profile table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// A category is listed more than once within one profile.
    #[error("profile {profile} lists {category} more than once")]
    DuplicateCategory {
        /// Name of the profile.
        profile: &'static str,
        /// The repeated category.
        category: Category,
    },

    /// A sentinel category appears in a group.
    #[error("profile {profile} lists sentinel category {category}")]
    SentinelInGroup {
        /// Name of the profile.
        profile: &'static str,
        /// The sentinel category.
        category: Category,
    },
}

/// Errors from the preference settings surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No toggle is persisted under this key.
    #[error("unknown setting key: {0}")]
    UnknownKey(String),
}
