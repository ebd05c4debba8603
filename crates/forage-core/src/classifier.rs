//! Item classification into food categories.
//!
//! [`Classifier::classify`] is a total function over [`ItemFacts`]. Rules
//! are guard clauses evaluated top to bottom and the first match wins; the
//! order is load-bearing, because real definitions routinely satisfy more
//! than one rule (a gluttonous plant, a kibble that is also an animal
//! product). Combinations that should not occur in valid data, such as a
//! corpse flagged as a plant, still resolve by the same first-match order.

use forage_types::{
    Candidate, Category, ClassifiedCandidate, FoodType, IngestibleFacts, ItemFacts, JoyKind,
    Origin, Preferability, TasteSentiment,
};
use tracing::trace;

use crate::config::DesignatedDefs;
use crate::error::ClassifyError;

/// Minimum recreation value for a gluttonous food to count as a luxury.
pub const LUXURY_MIN_JOY: f32 = 0.05;

/// Maps item definitions to food categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    designated: DesignatedDefs,
}

impl Classifier {
    /// Build a classifier that recognizes the given designated definitions.
    pub const fn new(designated: DesignatedDefs) -> Self {
        Self { designated }
    }

    /// The designated definitions this classifier recognizes.
    pub const fn designated(&self) -> &DesignatedDefs {
        &self.designated
    }

    /// Classify a definition.
    pub fn classify(&self, facts: &ItemFacts) -> Category {
        if facts.is_creature {
            return Category::Hunt;
        }

        let Some(ingestible) = facts.ingestible.as_ref() else {
            return Category::Null;
        };

        self.classify_ingestible(facts, ingestible)
    }

    /// Classify a candidate, following dispensers to what they dispense.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MissingDefinition`] for a dispenser with no
    /// dispensed definition. That is a caller defect, not a `Null` item.
    pub fn classify_candidate(
        &self,
        candidate: &Candidate,
    ) -> Result<ClassifiedCandidate, ClassifyError> {
        let facts = candidate.facts().ok_or(ClassifyError::MissingDefinition {
            item: candidate.item,
        })?;
        let category = self.classify(facts);
        trace!(
            item = %candidate.item,
            def_name = facts.def_name.as_str(),
            %category,
            "classified candidate"
        );
        Ok(ClassifiedCandidate {
            item: candidate.item,
            def_name: facts.def_name.clone(),
            category,
        })
    }

    fn classify_ingestible(&self, facts: &ItemFacts, ingestible: &IngestibleFacts) -> Category {
        if ingestible.nutrition <= 0.0 || ingestible.is_drug {
            return Category::Ignore;
        }

        let food_type = &ingestible.food_type;
        match ingestible.preferability {
            Preferability::NeverForNutrition => return Category::Ignore,
            Preferability::MealFine => return Category::MealFine,
            Preferability::MealAwful => return Category::MealAwful,
            Preferability::MealSimple => {
                return if self.designated.is_survival_meal(&facts.def_name) {
                    Category::MealSurvival
                } else {
                    Category::MealSimple
                };
            }
            Preferability::MealLavish => return Category::MealLavish,
            Preferability::Undefined
            | Preferability::DesperateOnly
            | Preferability::RawBad
            | Preferability::RawTasty => {}
        }

        if food_type.contains(FoodType::Kibble) {
            return Category::Kibble;
        }

        if food_type.contains(FoodType::AnimalProduct) {
            return if facts.can_hatch {
                Category::FertEggs
            } else {
                Category::AnimalProduct
            };
        }

        if ingestible.joy_kind == JoyKind::Gluttonous && ingestible.joy >= LUXURY_MIN_JOY {
            return Category::Luxury;
        }

        if food_type.contains(FoodType::Tree) {
            return Category::Tree;
        }

        if food_type.contains(FoodType::Plant) {
            return self.classify_plant(facts, ingestible);
        }

        if facts.is_corpse {
            return match facts.origin {
                Origin::Humanlike => Category::HumanlikeCorpse,
                Origin::Insectoid => Category::InsectCorpse,
                Origin::Mechanoid => Category::Ignore,
                Origin::Unspecified => Category::Corpse,
            };
        }

        match ingestible.taste_sentiment() {
            TasteSentiment::Negative => {
                let thought = ingestible.taste_thought.as_ref().map(|t| t.def_name.as_str());
                if facts.origin == Origin::Humanlike {
                    Category::RawHuman
                } else if self.designated.is_insect_meat(&facts.def_name, thought) {
                    Category::RawInsect
                } else {
                    Category::RawBad
                }
            }
            TasteSentiment::Absent | TasteSentiment::NonNegative => Category::RawTasty,
            TasteSentiment::Mixed => Category::Null,
        }
    }

    fn classify_plant(&self, facts: &ItemFacts, ingestible: &IngestibleFacts) -> Category {
        if self.designated.is_hay(&facts.def_name) {
            return Category::Hay;
        }
        if facts.is_plant_matter {
            return Category::PlantMatter;
        }
        if ingestible.preferability == Preferability::DesperateOnly {
            return Category::Ignore;
        }
        if facts.plant.as_ref().is_some_and(|p| p.is_cultivated()) {
            return Category::Plant;
        }
        Category::Grass
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use forage_types::{CandidateSource, FoodTypeFlags, ItemId, PlantFacts, TasteThought};

    use super::*;

    fn food(def_name: &str, preferability: Preferability, food_type: &[FoodType]) -> ItemFacts {
        ItemFacts {
            def_name: String::from(def_name),
            ingestible: Some(IngestibleFacts {
                nutrition: 0.5,
                preferability,
                food_type: FoodTypeFlags(food_type.iter().copied().collect()),
                ..IngestibleFacts::default()
            }),
            ..ItemFacts::default()
        }
    }

    fn with_taste(mut facts: ItemFacts, thought: &str, effects: &[f32]) -> ItemFacts {
        if let Some(ingestible) = facts.ingestible.as_mut() {
            ingestible.taste_thought = Some(TasteThought {
                def_name: String::from(thought),
                stage_mood_effects: effects.to_vec(),
            });
        }
        facts
    }

    fn classify(facts: &ItemFacts) -> Category {
        Classifier::default().classify(facts)
    }

    // -- rules 1-4 ----------------------------------------------------------

    #[test]
    fn creatures_are_hunted_before_anything_else() {
        let mut facts = food("Muffalo", Preferability::MealFine, &[FoodType::Plant]);
        facts.is_creature = true;
        assert_eq!(classify(&facts), Category::Hunt);

        let bare = ItemFacts {
            def_name: String::from("Boomrat"),
            is_creature: true,
            ..ItemFacts::default()
        };
        assert_eq!(classify(&bare), Category::Hunt);
    }

    #[test]
    fn non_ingestible_is_null() {
        let facts = ItemFacts {
            def_name: String::from("Steel"),
            ..ItemFacts::default()
        };
        assert_eq!(classify(&facts), Category::Null);
    }

    #[test]
    fn zero_nutrition_and_drugs_are_ignored() {
        let mut facts = food("MealFine", Preferability::MealFine, &[]);
        if let Some(i) = facts.ingestible.as_mut() {
            i.nutrition = 0.0;
        }
        assert_eq!(classify(&facts), Category::Ignore);

        let mut beer = food("Beer", Preferability::MealLavish, &[]);
        if let Some(i) = beer.ingestible.as_mut() {
            i.is_drug = true;
        }
        assert_eq!(classify(&beer), Category::Ignore);
    }

    #[test]
    fn never_for_nutrition_is_ignored() {
        let facts = food("Chocolate", Preferability::NeverForNutrition, &[FoodType::Plant]);
        assert_eq!(classify(&facts), Category::Ignore);
    }

    // -- rules 5-7: meals ---------------------------------------------------

    #[test]
    fn meals_by_preferability() {
        assert_eq!(classify(&food("MealFine", Preferability::MealFine, &[])), Category::MealFine);
        assert_eq!(
            classify(&food("MealNutrientPaste", Preferability::MealAwful, &[])),
            Category::MealAwful
        );
        assert_eq!(
            classify(&food("MealSimple", Preferability::MealSimple, &[])),
            Category::MealSimple
        );
        assert_eq!(
            classify(&food("MealLavish", Preferability::MealLavish, &[])),
            Category::MealLavish
        );
    }

    #[test]
    fn designated_simple_meals_are_survival() {
        assert_eq!(
            classify(&food("MealSurvivalPack", Preferability::MealSimple, &[])),
            Category::MealSurvival
        );
        assert_eq!(
            classify(&food("Pemmican", Preferability::MealSimple, &[])),
            Category::MealSurvival
        );
    }

    #[test]
    fn survival_designation_only_applies_to_simple_meals() {
        assert_eq!(
            classify(&food("Pemmican", Preferability::MealFine, &[])),
            Category::MealFine
        );
    }

    #[test]
    fn meal_preferability_beats_food_type_flags() {
        let facts = food("MealFine", Preferability::MealFine, &[FoodType::Kibble]);
        assert_eq!(classify(&facts), Category::MealFine);
    }

    // -- rules 8-11 ---------------------------------------------------------

    #[test]
    fn kibble_beats_animal_product() {
        let facts = food(
            "Kibble",
            Preferability::RawBad,
            &[FoodType::Kibble, FoodType::AnimalProduct],
        );
        assert_eq!(classify(&facts), Category::Kibble);
    }

    #[test]
    fn animal_products_split_on_hatching() {
        let milk = food("Milk", Preferability::RawTasty, &[FoodType::AnimalProduct]);
        assert_eq!(classify(&milk), Category::AnimalProduct);

        let mut egg = food("EggChickenFertilized", Preferability::RawTasty, &[FoodType::AnimalProduct]);
        egg.can_hatch = true;
        assert_eq!(classify(&egg), Category::FertEggs);
    }

    #[test]
    fn gluttonous_food_needs_enough_joy() {
        let mut facts = food("Ambrosia", Preferability::RawTasty, &[FoodType::Plant]);
        if let Some(i) = facts.ingestible.as_mut() {
            i.joy_kind = JoyKind::Gluttonous;
            i.joy = 0.05;
        }
        assert_eq!(classify(&facts), Category::Luxury);

        if let Some(i) = facts.ingestible.as_mut() {
            i.joy = 0.01;
        }
        assert_eq!(classify(&facts), Category::Grass);

        if let Some(i) = facts.ingestible.as_mut() {
            i.joy = 0.5;
            i.joy_kind = JoyKind::Other;
        }
        assert_eq!(classify(&facts), Category::Grass);
    }

    #[test]
    fn tree_beats_plant() {
        let facts = food("Plant_TreeOak", Preferability::DesperateOnly, &[FoodType::Tree, FoodType::Plant]);
        assert_eq!(classify(&facts), Category::Tree);
    }

    // -- rule 12: plants ----------------------------------------------------

    #[test]
    fn hay_is_recognized_first() {
        let mut hay = food("Hay", Preferability::DesperateOnly, &[FoodType::Plant]);
        hay.is_plant_matter = true;
        assert_eq!(classify(&hay), Category::Hay);
    }

    #[test]
    fn plant_matter_tag() {
        let mut facts = food("RawCorn", Preferability::RawTasty, &[FoodType::Plant]);
        facts.is_plant_matter = true;
        assert_eq!(classify(&facts), Category::PlantMatter);
    }

    #[test]
    fn desperate_only_plants_are_ignored() {
        let mut facts = food("Plant_Grass", Preferability::DesperateOnly, &[FoodType::Plant]);
        facts.plant = Some(PlantFacts {
            sow_tags: vec![String::from("Ground")],
            harvested_def: None,
        });
        assert_eq!(classify(&facts), Category::Ignore);
    }

    #[test]
    fn cultivated_plants_versus_grass() {
        let mut crop = food("Plant_Rice", Preferability::RawBad, &[FoodType::Plant]);
        crop.plant = Some(PlantFacts {
            sow_tags: Vec::new(),
            harvested_def: Some(String::from("RawRice")),
        });
        assert_eq!(classify(&crop), Category::Plant);

        let mut flower = food("Plant_Rose", Preferability::RawBad, &[FoodType::Plant]);
        flower.plant = Some(PlantFacts {
            sow_tags: vec![String::from("Decorative")],
            harvested_def: None,
        });
        assert_eq!(classify(&flower), Category::Plant);

        let mut grass = food("Plant_Grass", Preferability::RawBad, &[FoodType::Plant]);
        grass.plant = Some(PlantFacts::default());
        assert_eq!(classify(&grass), Category::Grass);

        let no_plant_facts = food("Plant_Moss", Preferability::RawBad, &[FoodType::Plant]);
        assert_eq!(classify(&no_plant_facts), Category::Grass);
    }

    // -- rule 13: corpses ---------------------------------------------------

    fn corpse(origin: Origin) -> ItemFacts {
        let mut facts = food("Corpse_Thing", Preferability::DesperateOnly, &[]);
        facts.is_corpse = true;
        facts.origin = origin;
        facts
    }

    #[test]
    fn corpses_by_origin() {
        assert_eq!(classify(&corpse(Origin::Humanlike)), Category::HumanlikeCorpse);
        assert_eq!(classify(&corpse(Origin::Insectoid)), Category::InsectCorpse);
        assert_eq!(classify(&corpse(Origin::Mechanoid)), Category::Ignore);
        assert_eq!(classify(&corpse(Origin::Unspecified)), Category::Corpse);
    }

    #[test]
    fn plant_flag_wins_over_corpse_flag() {
        let mut facts = corpse(Origin::Humanlike);
        if let Some(i) = facts.ingestible.as_mut() {
            i.food_type = FoodTypeFlags::from([FoodType::Plant]);
            i.preferability = Preferability::RawBad;
        }
        assert_eq!(classify(&facts), Category::Grass);
    }

    // -- rules 14-16: raw food by taste -------------------------------------

    #[test]
    fn bad_taste_splits_by_origin_and_markers() {
        let mut human = with_taste(
            food("Meat_Human", Preferability::DesperateOnly, &[]),
            "AteHumanlikeMeatDirect",
            &[-20.0],
        );
        human.origin = Origin::Humanlike;
        assert_eq!(classify(&human), Category::RawHuman);

        let megaspider = with_taste(
            food("Meat_Megaspider", Preferability::RawBad, &[]),
            "AteRawFood",
            &[-7.0],
        );
        assert_eq!(classify(&megaspider), Category::RawInsect);

        let spelopede = with_taste(
            food("Meat_Spelopede", Preferability::RawBad, &[]),
            "AteInsectMeatAsIngredient",
            &[-5.0],
        );
        assert_eq!(classify(&spelopede), Category::RawInsect);

        let cow = with_taste(food("Meat_Cow", Preferability::RawBad, &[]), "AteRawFood", &[-7.0]);
        assert_eq!(classify(&cow), Category::RawBad);
    }

    #[test]
    fn humanlike_origin_beats_insect_marker() {
        let mut facts = with_taste(
            food("Meat_Megaspider", Preferability::RawBad, &[]),
            "AteRawFood",
            &[-7.0],
        );
        facts.origin = Origin::Humanlike;
        assert_eq!(classify(&facts), Category::RawHuman);
    }

    #[test]
    fn absent_or_pleasant_taste_is_raw_tasty() {
        let berries = food("RawBerries", Preferability::RawTasty, &[]);
        assert_eq!(classify(&berries), Category::RawTasty);

        let pleasant = with_taste(food("Jelly", Preferability::RawTasty, &[]), "AteJelly", &[0.0, 3.0]);
        assert_eq!(classify(&pleasant), Category::RawTasty);
    }

    #[test]
    fn mixed_taste_is_null() {
        let facts = with_taste(food("Oddity", Preferability::RawBad, &[]), "AteOddity", &[-3.0, 3.0]);
        assert_eq!(classify(&facts), Category::Null);
    }

    // -- designated defs ------------------------------------------------------

    #[test]
    fn designated_defs_are_configurable() {
        let mut designated = DesignatedDefs::default();
        designated.survival_meals.insert(String::from("MealPackedLunch"));
        let classifier = Classifier::new(designated);
        assert_eq!(
            classifier.classify(&food("MealPackedLunch", Preferability::MealSimple, &[])),
            Category::MealSurvival
        );
        assert!(classifier.designated().is_survival_meal("Pemmican"));
    }

    // -- candidates ---------------------------------------------------------

    #[test]
    fn dispensers_classify_as_what_they_dispense() {
        let paste = food("MealNutrientPaste", Preferability::MealAwful, &[]);
        let item = ItemId::new();
        let candidate =
            Candidate::dispenser(item, String::from("NutrientPasteDispenser"), paste);
        let classified = Classifier::default().classify_candidate(&candidate).unwrap();
        assert_eq!(classified.item, item);
        assert_eq!(classified.def_name, "MealNutrientPaste");
        assert_eq!(classified.category, Category::MealAwful);
    }

    #[test]
    fn empty_dispenser_fails_fast() {
        let item = ItemId::new();
        let candidate = Candidate {
            item,
            source: CandidateSource::Dispenser {
                building: String::from("NutrientPasteDispenser"),
                dispensed: None,
            },
        };
        assert_eq!(
            Classifier::default().classify_candidate(&candidate),
            Err(ClassifyError::MissingDefinition { item })
        );
    }

    #[test]
    fn building_definition_is_not_classified_as_null() {
        let yaml = "
item: 0190a6d3-1c2b-7f00-8000-000000000003
dispenser:
  building: NutrientPasteDispenser
  dispensed: null
";
        let candidate: Candidate = serde_yml::from_str(yaml).unwrap();
        assert!(Classifier::default().classify_candidate(&candidate).is_err());
    }

    // -- properties ---------------------------------------------------------

    fn fact_grid() -> Vec<ItemFacts> {
        let preferabilities = [
            Preferability::Undefined,
            Preferability::NeverForNutrition,
            Preferability::DesperateOnly,
            Preferability::RawBad,
            Preferability::RawTasty,
            Preferability::MealAwful,
            Preferability::MealSimple,
            Preferability::MealFine,
            Preferability::MealLavish,
        ];
        let types: [&[FoodType]; 6] = [
            &[],
            &[FoodType::Kibble],
            &[FoodType::AnimalProduct],
            &[FoodType::Plant],
            &[FoodType::Tree],
            &[FoodType::Plant, FoodType::AnimalProduct],
        ];
        let origins = [
            Origin::Unspecified,
            Origin::Humanlike,
            Origin::Insectoid,
            Origin::Mechanoid,
        ];
        let mut grid = Vec::new();
        for pref in preferabilities {
            for flags in types {
                for origin in origins {
                    for is_corpse in [false, true] {
                        let mut facts = with_taste(food("Thing", pref, flags), "AteThing", &[-1.0]);
                        facts.origin = origin;
                        facts.is_corpse = is_corpse;
                        grid.push(facts);
                    }
                }
            }
        }
        grid
    }

    #[test]
    fn classification_is_total_and_idempotent() {
        let classifier = Classifier::default();
        for facts in fact_grid() {
            let first = classifier.classify(&facts);
            assert!(Category::ALL.contains(&first));
            assert_eq!(classifier.classify(&facts), first);
        }
    }
}
