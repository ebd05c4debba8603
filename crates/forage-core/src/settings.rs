//! Consumer preference toggles and their settings surface.
//!
//! The host persists the two toggles in its own key/value store under the
//! fixed keys below, and renders them as two labelled checkboxes. This
//! module only maps between that store and [`PreferenceSettings`]; the value
//! is then passed explicitly into profile selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SettingsError;

/// Persist key for the human toggle.
pub const HUMAN_TOGGLE_KEY: &str = "sfsHumanPrefRawTastyOverMealSurvival";

/// Persist key for the ascetic toggle.
pub const ASCETIC_TOGGLE_KEY: &str = "sfsAsceticPrefRawTastyOverMealSurvival";

/// Translation key for the settings page title.
pub const SETTINGS_TITLE_KEY: &str = "SFS_Title";

/// A checkbox on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingControl {
    /// Persist key of the toggle the checkbox edits.
    pub key: &'static str,
    /// Translation key of the checkbox label.
    pub label_key: &'static str,
}

/// The checkboxes of the settings page, in display order.
pub const SETTING_CONTROLS: [SettingControl; 2] = [
    SettingControl {
        key: HUMAN_TOGGLE_KEY,
        label_key: "SFS_Human_RawTasty_Over_MealSurvival",
    },
    SettingControl {
        key: ASCETIC_TOGGLE_KEY,
        label_key: "SFS_Ascetic_RawTasty_Over_MealSurvival",
    },
];

/// The two process-wide preference toggles. Both default to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSettings {
    /// Humans rank raw tasty food above survival meals.
    #[serde(rename = "sfsHumanPrefRawTastyOverMealSurvival", default = "default_true")]
    pub human_prefers_raw_tasty: bool,

    /// Ascetics rank raw tasty food above survival meals.
    #[serde(rename = "sfsAsceticPrefRawTastyOverMealSurvival", default = "default_true")]
    pub ascetic_prefers_raw_tasty: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            human_prefers_raw_tasty: true,
            ascetic_prefers_raw_tasty: true,
        }
    }
}

impl PreferenceSettings {
    /// Load from a host key/value store. Missing keys keep their defaults.
    pub fn from_map(store: &BTreeMap<String, bool>) -> Self {
        let mut settings = Self::default();
        for (key, value) in store {
            if settings.set(key, *value).is_err() {
                warn!(key = key.as_str(), "ignoring unknown preference setting");
            }
        }
        settings
    }

    /// Write both toggles under their persist keys.
    pub fn to_map(self) -> BTreeMap<String, bool> {
        BTreeMap::from([
            (String::from(HUMAN_TOGGLE_KEY), self.human_prefers_raw_tasty),
            (String::from(ASCETIC_TOGGLE_KEY), self.ascetic_prefers_raw_tasty),
        ])
    }

    /// Read a toggle by persist key.
    pub fn get(self, key: &str) -> Result<bool, SettingsError> {
        match key {
            HUMAN_TOGGLE_KEY => Ok(self.human_prefers_raw_tasty),
            ASCETIC_TOGGLE_KEY => Ok(self.ascetic_prefers_raw_tasty),
            other => Err(SettingsError::UnknownKey(String::from(other))),
        }
    }

    /// Write a toggle by persist key.
    pub fn set(&mut self, key: &str, value: bool) -> Result<(), SettingsError> {
        match key {
            HUMAN_TOGGLE_KEY => self.human_prefers_raw_tasty = value,
            ASCETIC_TOGGLE_KEY => self.ascetic_prefers_raw_tasty = value,
            other => return Err(SettingsError::UnknownKey(String::from(other))),
        }
        Ok(())
    }
}
