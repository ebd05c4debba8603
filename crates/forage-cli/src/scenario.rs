//! Scenario files: one consumer and the candidates in its reach.
//!
//! ```yaml
//! consumer:
//!   flags: { ascetic: true }
//!   hunger: starving
//! candidates:
//!   - item: 0190a6d3-1c2b-7f00-8000-000000000001
//!     def:
//!       def_name: MealSurvivalPack
//!       ingestible: { nutrition: 0.9, preferability: meal_simple }
//! ```
//!
//! The consumer may give `role` directly or raw `flags`; `role` wins when
//! both are present. Every candidate needs an explicit `item` id so the same
//! file always yields the same report.

use std::path::Path;

use forage_core::{ClassifyError, FoodSelector, Selection};
use forage_types::{Candidate, ConsumerRole, ConsumerState, HungerLevel, RoleFlags};
use serde::Deserialize;

use crate::error::CliError;

/// A parsed scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    /// Who is choosing.
    pub consumer: ScenarioConsumer,
    /// What is available, in search order.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// The consumer section of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScenarioConsumer {
    /// Explicit role.
    #[serde(default)]
    pub role: Option<ConsumerRole>,
    /// Raw role flags, used when `role` is absent.
    #[serde(default)]
    pub flags: RoleFlags,
    /// Current hunger.
    #[serde(default)]
    pub hunger: HungerLevel,
}

impl ScenarioConsumer {
    /// The consumer state this section describes.
    pub fn state(self) -> ConsumerState {
        let role = self
            .role
            .unwrap_or_else(|| ConsumerRole::from_flags(self.flags));
        ConsumerState::new(role, self.hunger)
    }
}

impl Scenario {
    /// Load a scenario from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a scenario from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, CliError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Run the scenario through `selector`.
    pub fn evaluate(&self, selector: &FoodSelector) -> Result<Selection, ClassifyError> {
        selector.evaluate(self.consumer.state(), &self.candidates)
    }
}
