//! Static preference profiles.
//!
//! A [`Profile`] holds three [`Tier`]s in fixed order (Good, Bad, Desperate).
//! Each tier is an ordered list of groups, and each group is a set of
//! equal-rank categories. Rank comes only from group position; no category
//! may appear twice within one profile, which [`Profile::validate`] checks.
//!
//! The tables are data and are reproduced here as-is. The two
//! `PreferSurvivalMeal` variants differ from their base profiles only by
//! swapping `MealSurvival` and `RawTasty` in the Good tier.

use std::collections::HashSet;

use forage_types::{Category as C, HungerLevel, TierKind};

use crate::error::ProfileError;

/// A set of equal-rank categories.
pub type Group = &'static [C];

/// An ordered list of groups gated by hunger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    kind: TierKind,
    groups: &'static [Group],
}

impl Tier {
    const fn new(kind: TierKind, groups: &'static [Group]) -> Self {
        Self { kind, groups }
    }

    /// Which tier this is.
    pub const fn kind(&self) -> TierKind {
        self.kind
    }

    /// The groups of this tier, best first.
    pub const fn groups(&self) -> &'static [Group] {
        self.groups
    }

    /// Whether a consumer at `hunger` may eat from this tier.
    pub fn is_eligible(&self, hunger: HungerLevel) -> bool {
        self.kind.is_eligible(hunger)
    }

    /// Every category in this tier, in group order.
    pub fn categories(&self) -> impl Iterator<Item = C> + '_ {
        self.groups.iter().flat_map(|g| g.iter().copied())
    }

    /// Whether this tier lists `category`.
    pub fn contains(&self, category: C) -> bool {
        self.categories().any(|c| c == category)
    }
}

/// Identifies one of the static profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileId {
    /// Ordinary humanlikes preferring raw tasty food over survival meals.
    Human,
    /// Ordinary humanlikes preferring survival meals over raw tasty food.
    HumanPrefSurvival,
    /// Companion animals.
    Pet,
    /// Ascetics preferring raw tasty food over survival meals.
    Ascetic,
    /// Ascetics preferring survival meals over raw tasty food.
    AsceticPrefSurvival,
}

impl ProfileId {
    /// Every profile id.
    pub const ALL: [Self; 5] = [
        Self::Human,
        Self::HumanPrefSurvival,
        Self::Pet,
        Self::Ascetic,
        Self::AsceticPrefSurvival,
    ];

    /// The profile table for this id.
    pub const fn profile(self) -> &'static Profile {
        match self {
            Self::Human => &HUMAN,
            Self::HumanPrefSurvival => &HUMAN_PREF_SURVIVAL,
            Self::Pet => &PET,
            Self::Ascetic => &ASCETIC,
            Self::AsceticPrefSurvival => &ASCETIC_PREF_SURVIVAL,
        }
    }
}

/// A named, ranked preference table over categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    id: ProfileId,
    name: &'static str,
    tiers: [Tier; 3],
}

impl Profile {
    const fn new(
        id: ProfileId,
        name: &'static str,
        good: &'static [Group],
        bad: &'static [Group],
        desperate: &'static [Group],
    ) -> Self {
        Self {
            id,
            name,
            tiers: [
                Tier::new(TierKind::Good, good),
                Tier::new(TierKind::Bad, bad),
                Tier::new(TierKind::Desperate, desperate),
            ],
        }
    }

    /// Which profile this is.
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Display name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All tiers in decreasing order of preference.
    pub const fn tiers(&self) -> &[Tier; 3] {
        &self.tiers
    }

    /// The tier of the given kind.
    pub const fn tier(&self, kind: TierKind) -> &Tier {
        let [good, bad, desperate] = &self.tiers;
        match kind {
            TierKind::Good => good,
            TierKind::Bad => bad,
            TierKind::Desperate => desperate,
        }
    }

    /// Every category this profile cares about, in rank order.
    pub fn categories(&self) -> impl Iterator<Item = C> + '_ {
        self.tiers.iter().flat_map(Tier::categories)
    }

    /// Where `category` ranks: its tier and group index within that tier.
    pub fn rank_of(&self, category: C) -> Option<(TierKind, usize)> {
        self.tiers.iter().find_map(|tier| {
            tier.groups()
                .iter()
                .position(|g| g.contains(&category))
                .map(|index| (tier.kind(), index))
        })
    }

    /// Check that no category is listed twice and no sentinel is listed.
    ///
    /// # Errors
    ///
    /// Returns the first violation found in rank order.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let mut seen = HashSet::new();
        for category in self.categories() {
            if category.is_sentinel() {
                return Err(ProfileError::SentinelInGroup {
                    profile: self.name,
                    category,
                });
            }
            if !seen.insert(category) {
                return Err(ProfileError::DuplicateCategory {
                    profile: self.name,
                    category,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Profile tables
// ---------------------------------------------------------------------------

const HUMAN_BAD: &[Group] = &[&[C::FertEggs], &[C::RawBad, C::AnimalProduct], &[C::Luxury]];

const HUMAN_DESPERATE: &[Group] = &[
    &[C::Plant, C::PlantMatter],
    &[C::RawInsect],
    &[C::Kibble],
    &[C::Corpse],
    &[C::InsectCorpse],
    &[C::HumanlikeCorpse],
];

const ASCETIC_BAD: &[Group] = &[
    &[C::Plant, C::PlantMatter],
    &[C::MealFine],
    &[C::MealLavish],
    &[C::FertEggs],
];

const ASCETIC_DESPERATE: &[Group] = &[
    &[C::RawInsect],
    &[C::Kibble],
    &[C::Corpse],
    &[C::InsectCorpse],
    &[C::HumanlikeCorpse],
];

/// Ordinary humanlikes, raw tasty food before survival meals.
pub static HUMAN: Profile = Profile::new(
    ProfileId::Human,
    "Human",
    &[
        &[C::MealLavish],
        &[C::MealFine],
        &[C::MealSimple],
        &[C::RawTasty],
        &[C::MealSurvival],
        &[C::MealAwful],
    ],
    HUMAN_BAD,
    HUMAN_DESPERATE,
);

/// Ordinary humanlikes, survival meals before raw tasty food.
pub static HUMAN_PREF_SURVIVAL: Profile = Profile::new(
    ProfileId::HumanPrefSurvival,
    "HumanPreferSurvivalMeal",
    &[
        &[C::MealLavish],
        &[C::MealFine],
        &[C::MealSimple],
        &[C::MealSurvival],
        &[C::RawTasty],
        &[C::MealAwful],
    ],
    HUMAN_BAD,
    HUMAN_DESPERATE,
);

/// Companion animals.
pub static PET: Profile = Profile::new(
    ProfileId::Pet,
    "Pet",
    &[
        &[C::Tree, C::Grass],
        &[C::Hay],
        &[C::Kibble],
        &[C::MealAwful],
        &[C::RawInsect, C::InsectCorpse],
        &[C::RawHuman, C::HumanlikeCorpse],
        &[C::RawBad],
        &[C::Corpse],
        &[C::RawTasty, C::AnimalProduct],
    ],
    // TODO: keep pets from taking simple meals meant for training rewards.
    &[&[C::Hunt], &[C::MealSimple], &[C::Plant, C::PlantMatter]],
    &[&[C::FertEggs], &[C::MealFine], &[C::MealLavish]],
);

/// Ascetics, raw tasty food before survival meals.
pub static ASCETIC: Profile = Profile::new(
    ProfileId::Ascetic,
    "Ascetic",
    &[
        &[C::MealAwful],
        &[C::MealSimple],
        &[C::RawBad, C::AnimalProduct],
        &[C::RawTasty],
        &[C::MealSurvival],
    ],
    ASCETIC_BAD,
    ASCETIC_DESPERATE,
);

/// Ascetics, survival meals before raw tasty food.
pub static ASCETIC_PREF_SURVIVAL: Profile = Profile::new(
    ProfileId::AsceticPrefSurvival,
    "AsceticPreferSurvivalMeal",
    &[
        &[C::MealAwful],
        &[C::MealSimple],
        &[C::RawBad, C::AnimalProduct],
        &[C::MealSurvival],
        &[C::RawTasty],
    ],
    ASCETIC_BAD,
    ASCETIC_DESPERATE,
);
