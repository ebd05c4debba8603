//! Enumeration types for food classification and consumer state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A food category from the closed classification taxonomy.
///
/// Serialized as a `snake_case` name (`"meal_simple"`). Hosts that persist
/// numeric values use [`Category::code`] and [`Category::from_code`], which
/// are stable. The type is not `Ord`: a category's rank only ever comes from
/// its position inside a profile tier, never from declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Not classifiable as food.
    Null,
    /// Corpse of a humanlike creature.
    HumanlikeCorpse,
    /// Corpse of an insectoid creature.
    InsectCorpse,
    /// Any other edible corpse.
    Corpse,
    /// The designated hay item.
    Hay,
    /// Kibble.
    Kibble,
    /// Raw food that leaves a bad taste (negative mood on eating).
    RawBad,
    /// Raw food without a negative taste.
    RawTasty,
    /// Raw insect meat.
    RawInsect,
    /// Raw humanlike meat.
    RawHuman,
    /// Fertilized eggs (can hatch).
    FertEggs,
    /// Animal products such as milk or unfertilized eggs.
    AnimalProduct,
    /// Awful meals (e.g. nutrient paste).
    MealAwful,
    /// Survival meals and other designated meal replacements.
    MealSurvival,
    /// Simple meals.
    MealSimple,
    /// Fine meals.
    MealFine,
    /// Lavish meals.
    MealLavish,
    /// Sowable or harvestable plants.
    Plant,
    /// Items tagged as generic plant matter.
    PlantMatter,
    /// Wild plants with nothing to sow or harvest.
    Grass,
    /// Gluttonous recreational food.
    Luxury,
    /// A living creature that can be hunted.
    Hunt,
    /// Trees.
    Tree,
    /// Classifiable, but excluded from every profile.
    Ignore,
}

impl Category {
    /// Every category, sentinels included, in declaration order.
    pub const ALL: [Self; 24] = [
        Self::Null,
        Self::HumanlikeCorpse,
        Self::InsectCorpse,
        Self::Corpse,
        Self::Hay,
        Self::Kibble,
        Self::RawBad,
        Self::RawTasty,
        Self::RawInsect,
        Self::RawHuman,
        Self::FertEggs,
        Self::AnimalProduct,
        Self::MealAwful,
        Self::MealSurvival,
        Self::MealSimple,
        Self::MealFine,
        Self::MealLavish,
        Self::Plant,
        Self::PlantMatter,
        Self::Grass,
        Self::Luxury,
        Self::Hunt,
        Self::Tree,
        Self::Ignore,
    ];

    /// Whether this is `Null` or `Ignore`.
    ///
    /// Sentinel categories are never selectable by any profile.
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Null | Self::Ignore)
    }

    /// The stable numeric code of this category.
    pub const fn code(self) -> u8 {
        match self {
            Self::Null => 0,
            Self::HumanlikeCorpse => 1,
            Self::InsectCorpse => 2,
            Self::Corpse => 3,
            Self::Hay => 4,
            Self::Kibble => 5,
            Self::RawBad => 6,
            Self::RawTasty => 7,
            Self::RawInsect => 8,
            Self::RawHuman => 9,
            Self::FertEggs => 10,
            Self::AnimalProduct => 11,
            Self::MealAwful => 12,
            Self::MealSurvival => 13,
            Self::MealSimple => 14,
            Self::MealFine => 15,
            Self::MealLavish => 16,
            Self::Plant => 17,
            Self::PlantMatter => 18,
            Self::Grass => 19,
            Self::Luxury => 20,
            Self::Hunt => 21,
            Self::Tree => 22,
            Self::Ignore => 255,
        }
    }

    /// Look up a category by its stable numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

// ---------------------------------------------------------------------------
// Item definition enums
// ---------------------------------------------------------------------------

/// How desirable a food is as nutrition, as declared by its definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preferability {
    /// No preferability declared.
    #[default]
    Undefined,
    /// Never eaten for nutrition.
    NeverForNutrition,
    /// Only eaten when desperate.
    DesperateOnly,
    /// Raw food with a bad taste.
    RawBad,
    /// Raw food with an acceptable taste.
    RawTasty,
    /// Meal, awful.
    MealAwful,
    /// Meal, simple.
    MealSimple,
    /// Meal, fine.
    MealFine,
    /// Meal, lavish.
    MealLavish,
}

/// A single food-type flag. Definitions carry a set of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    /// Kibble.
    Kibble,
    /// Animal product (milk, eggs).
    AnimalProduct,
    /// Plant.
    Plant,
    /// Tree.
    Tree,
}

/// The recreation kind granted by eating a food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoyKind {
    /// No recreation.
    #[default]
    None,
    /// Gluttonous recreation (sweets, snacks).
    Gluttonous,
    /// Any other recreation kind.
    Other,
}

/// Where an item's flesh came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Not a creature product, or an ordinary animal.
    #[default]
    Unspecified,
    /// A humanlike corpse or meat derived from one.
    Humanlike,
    /// An insectoid creature.
    Insectoid,
    /// A mechanoid.
    Mechanoid,
}

/// Aggregate mood effect of eating an item, derived from its taste thought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TasteSentiment {
    /// The item has no taste thought.
    Absent,
    /// Every stage of the taste thought has a negative mood effect.
    Negative,
    /// Every stage of the taste thought has a non-negative mood effect.
    NonNegative,
    /// Stages disagree in sign.
    Mixed,
}

// ---------------------------------------------------------------------------
// Consumer enums
// ---------------------------------------------------------------------------

/// How hungry a consumer currently is. Totally ordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum HungerLevel {
    /// Not hungry.
    #[default]
    Fed,
    /// Hungry.
    Hungry,
    /// Urgently hungry.
    UrgentlyHungry,
    /// Starving.
    Starving,
}

impl HungerLevel {
    /// Every hunger level from least to most hungry.
    pub const ALL: [Self; 4] = [Self::Fed, Self::Hungry, Self::UrgentlyHungry, Self::Starving];
}

/// The role of a consumer, which decides its preference profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum ConsumerRole {
    /// A companion animal.
    Pet,
    /// A humanlike with the ascetic trait.
    Ascetic,
    /// An ordinary humanlike.
    Humanlike,
    /// Wild animals, wild humans and anything else.
    Other,
}

/// The preference tier a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    /// Always eligible.
    Good,
    /// Eligible when urgently hungry or worse.
    Bad,
    /// Eligible only when starving.
    Desperate,
}

impl TierKind {
    /// The least hunger level at which this tier may be used.
    pub const fn min_hunger(self) -> HungerLevel {
        match self {
            Self::Good => HungerLevel::Fed,
            Self::Bad => HungerLevel::UrgentlyHungry,
            Self::Desperate => HungerLevel::Starving,
        }
    }

    /// Whether a consumer at `hunger` may eat from this tier.
    pub fn is_eligible(self, hunger: HungerLevel) -> bool {
        hunger >= self.min_hunger()
    }
}

impl core::fmt::Display for TierKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Bad => write!(f, "bad"),
            Self::Desperate => write!(f, "desperate"),
        }
    }
}
