//! Item facts and consumer state supplied by the world layer.
//!
//! Everything here is read-only input to the classifier and resolver. The
//! core never mutates these values; the world layer builds them fresh for
//! each decision.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    Category, ConsumerRole, FoodType, HungerLevel, JoyKind, Origin, Preferability, TasteSentiment,
};
use crate::ids::ItemId;

// ---------------------------------------------------------------------------
// Item facts
// ---------------------------------------------------------------------------

/// Definition-level facts about a candidate item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ItemFacts {
    /// Definition identifier, e.g. `"MealSurvivalPack"`.
    pub def_name: String,

    /// The definition describes a living creature (it has a race).
    #[serde(default)]
    pub is_creature: bool,

    /// Ingestion facts. `None` means the item cannot be eaten at all.
    #[serde(default)]
    pub ingestible: Option<IngestibleFacts>,

    /// The definition is a corpse.
    #[serde(default)]
    pub is_corpse: bool,

    /// Where the item's flesh came from, if anywhere.
    #[serde(default)]
    pub origin: Origin,

    /// The item carries a hatcher (fertilized egg).
    #[serde(default)]
    pub can_hatch: bool,

    /// The item is tagged with the generic plant-matter category.
    #[serde(default)]
    pub is_plant_matter: bool,

    /// Growth facts for plants.
    #[serde(default)]
    pub plant: Option<PlantFacts>,
}

/// Facts about how an item is eaten.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngestibleFacts {
    /// Nutrition gained per unit.
    pub nutrition: f32,

    /// The item is a drug.
    #[serde(default)]
    pub is_drug: bool,

    /// Declared preferability.
    #[serde(default)]
    pub preferability: Preferability,

    /// Food-type flags.
    #[serde(default)]
    pub food_type: FoodTypeFlags,

    /// Recreation kind granted by eating.
    #[serde(default)]
    pub joy_kind: JoyKind,

    /// Recreation amount granted by eating.
    #[serde(default)]
    pub joy: f32,

    /// The thought triggered by tasting the item raw.
    #[serde(default)]
    pub taste_thought: Option<TasteThought>,
}

impl IngestibleFacts {
    /// Aggregate taste sentiment of this food.
    pub fn taste_sentiment(&self) -> TasteSentiment {
        self.taste_thought
            .as_ref()
            .map_or(TasteSentiment::Absent, TasteThought::sentiment)
    }
}

/// A set of [`FoodType`] flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodTypeFlags(pub BTreeSet<FoodType>);

impl FoodTypeFlags {
    /// An empty flag set.
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Whether `flag` is set.
    pub fn contains(&self, flag: FoodType) -> bool {
        self.0.contains(&flag)
    }
}

impl<const N: usize> From<[FoodType; N]> for FoodTypeFlags {
    fn from(flags: [FoodType; N]) -> Self {
        Self(BTreeSet::from(flags))
    }
}

/// A taste thought and the mood effect of each of its stages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TasteThought {
    /// Thought definition identifier.
    pub def_name: String,

    /// Base mood effect per stage.
    #[serde(default)]
    pub stage_mood_effects: Vec<f32>,
}

impl TasteThought {
    /// Derive the aggregate sentiment of this thought.
    ///
    /// The negative test runs first, so a thought with no stages reads as
    /// negative.
    pub fn sentiment(&self) -> TasteSentiment {
        if self.stage_mood_effects.iter().all(|m| *m < 0.0) {
            TasteSentiment::Negative
        } else if self.stage_mood_effects.iter().all(|m| *m >= 0.0) {
            TasteSentiment::NonNegative
        } else {
            TasteSentiment::Mixed
        }
    }
}

/// Growth facts for plant definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlantFacts {
    /// Tags describing where the plant can be sown.
    #[serde(default)]
    pub sow_tags: Vec<String>,

    /// Definition produced when the plant is harvested.
    #[serde(default)]
    pub harvested_def: Option<String>,
}

impl PlantFacts {
    /// Whether the plant is cultivated: sowable or yielding a harvest.
    pub fn is_cultivated(&self) -> bool {
        !self.sow_tags.is_empty() || self.harvested_def.is_some()
    }
}

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// An item offered to the selector.
///
/// In YAML or JSON the source sits beside `item` as either a `def` key or a
/// `dispenser` key:
///
/// ```yaml
/// - item: 0190a6d3-1c2b-7f00-8000-000000000001
///   dispenser:
///     building: NutrientPasteDispenser
///     dispensed: { def_name: MealNutrientPaste }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The item instance, supplied by the caller.
    pub item: ItemId,

    /// Where the candidate's definition comes from.
    #[serde(flatten)]
    pub source: CandidateSource,
}

/// What a candidate is, for classification purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// An ordinary item, classified by its own definition.
    Def(ItemFacts),
    /// A dispenser, classified by what it dispenses.
    Dispenser {
        /// Definition name of the dispensing building.
        building: String,
        /// What it would dispense. `None` is a caller defect.
        #[serde(default)]
        dispensed: Option<ItemFacts>,
    },
}

impl Candidate {
    /// An ordinary item with its own definition.
    pub const fn new(item: ItemId, def: ItemFacts) -> Self {
        Self {
            item,
            source: CandidateSource::Def(def),
        }
    }

    /// A dispenser that would dispense `dispensed`.
    pub const fn dispenser(item: ItemId, building: String, dispensed: ItemFacts) -> Self {
        Self {
            item,
            source: CandidateSource::Dispenser {
                building,
                dispensed: Some(dispensed),
            },
        }
    }

    /// Whether this candidate stands in for what it dispenses.
    pub const fn is_dispenser(&self) -> bool {
        matches!(self.source, CandidateSource::Dispenser { .. })
    }

    /// The definition to classify this candidate against.
    ///
    /// `None` only for a dispenser with nothing to dispense; the building's
    /// own definition is never used in its place.
    pub const fn facts(&self) -> Option<&ItemFacts> {
        match &self.source {
            CandidateSource::Def(def) => Some(def),
            CandidateSource::Dispenser { dispensed, .. } => dispensed.as_ref(),
        }
    }
}

/// A candidate after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClassifiedCandidate {
    /// The item instance.
    pub item: ItemId,
    /// Definition the category was derived from.
    pub def_name: String,
    /// The item's category.
    pub category: Category,
}

// ---------------------------------------------------------------------------
// Consumer
// ---------------------------------------------------------------------------

/// The dynamic facts about the entity choosing food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConsumerState {
    /// Which kind of consumer this is.
    pub role: ConsumerRole,
    /// Current hunger.
    #[serde(default)]
    pub hunger: HungerLevel,
}

impl ConsumerState {
    /// Build a consumer state.
    pub const fn new(role: ConsumerRole, hunger: HungerLevel) -> Self {
        Self { role, hunger }
    }

    /// The same consumer at a different hunger level.
    #[must_use]
    pub const fn with_hunger(self, hunger: HungerLevel) -> Self {
        Self { hunger, ..self }
    }
}

/// Raw role flags as reported by the world layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct RoleFlags {
    /// Tamed animal belonging to the player.
    #[serde(default)]
    pub pet: bool,
    /// Has the ascetic trait.
    #[serde(default)]
    pub ascetic: bool,
    /// Any animal.
    #[serde(default)]
    pub animal: bool,
    /// A wild human.
    #[serde(default)]
    pub wild_man: bool,
}

impl ConsumerRole {
    /// Collapse raw flags into a role.
    ///
    /// Pet wins over everything, then ascetic; a consumer that is neither an
    /// animal nor a wild man is an ordinary humanlike.
    pub const fn from_flags(flags: RoleFlags) -> Self {
        if flags.pet {
            Self::Pet
        } else if flags.ascetic {
            Self::Ascetic
        } else if !flags.animal && !flags.wild_man {
            Self::Humanlike
        } else {
            Self::Other
        }
    }
}
