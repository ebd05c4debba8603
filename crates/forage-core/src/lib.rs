//! Food classification and preference resolution for Forage.
//!
//! This crate is pure logic: it classifies item definitions into food
//! categories and picks a consumer's preferred candidate from static
//! profile tables. It performs no I/O apart from the explicit config
//! loader, and never reorders or mutates its inputs.
//!
//! # Modules
//!
//! - [`classifier`] -- Item facts to [`Category`](forage_types::Category) ([`Classifier`])
//! - [`config`] -- YAML configuration ([`ForageConfig`], [`DesignatedDefs`])
//! - [`error`] -- Error types ([`ClassifyError`], [`ProfileError`], [`SettingsError`])
//! - [`profile`] -- The five static preference profiles ([`Profile`], [`ProfileId`])
//! - [`resolver`] -- Tier walk over classified candidates ([`resolve`])
//! - [`selection`] -- End-to-end entry point ([`FoodSelector`])
//! - [`selector`] -- Consumer to profile mapping ([`select_profile`])
//! - [`settings`] -- Preference toggles and their settings surface ([`PreferenceSettings`])

pub mod classifier;
pub mod config;
pub mod error;
pub mod profile;
pub mod resolver;
pub mod selection;
pub mod selector;
pub mod settings;

// Re-export primary types at crate root for convenience.
pub use classifier::{Classifier, LUXURY_MIN_JOY};
pub use config::{ConfigError, DesignatedDefs, ForageConfig, LoggingConfig};
pub use error::{ClassifyError, ProfileError, SettingsError};
pub use profile::{Group, Profile, ProfileId, Tier};
pub use resolver::resolve;
pub use selection::{FoodSelector, Selection};
pub use selector::{select_profile, select_profile_id};
pub use settings::{PreferenceSettings, SETTING_CONTROLS, SETTINGS_TITLE_KEY, SettingControl};
