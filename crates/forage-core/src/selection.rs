//! The food selection entry point used by the external decision point.
//!
//! [`FoodSelector`] ties the pieces together for one consumer and one batch
//! of candidates: select a profile, classify every candidate, resolve.
//! Consumers without a profile defer immediately without classifying.

use forage_types::{Candidate, ClassifiedCandidate, ConsumerState, Decision};
use tracing::debug;

use crate::classifier::Classifier;
use crate::config::ForageConfig;
use crate::error::ClassifyError;
use crate::profile::Profile;
use crate::resolver::resolve;
use crate::selector::select_profile;
use crate::settings::PreferenceSettings;

/// Everything one selection produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The profile used, or `None` when the consumer has none.
    pub profile: Option<&'static Profile>,
    /// Every candidate with its category, in input order. Empty when there
    /// is no profile.
    pub classified: Vec<ClassifiedCandidate>,
    /// The outcome.
    pub decision: Decision,
}

/// Classifies candidates and resolves a consumer's preferred food.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodSelector {
    classifier: Classifier,
    settings: PreferenceSettings,
}

impl FoodSelector {
    /// Build a selector from configuration.
    pub fn new(config: ForageConfig) -> Self {
        Self {
            classifier: Classifier::new(config.designated),
            settings: config.settings,
        }
    }

    /// The classifier in use.
    pub const fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The current preference toggles.
    pub const fn settings(&self) -> PreferenceSettings {
        self.settings
    }

    /// Replace the preference toggles, e.g. after the settings UI saved.
    pub const fn set_settings(&mut self, settings: PreferenceSettings) {
        self.settings = settings;
    }

    /// Decide whether `consumer` should eat one of `candidates` instead of
    /// the default choice.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MissingDefinition`] if a dispenser candidate
    /// has nothing to dispense.
    pub fn choose(
        &self,
        consumer: ConsumerState,
        candidates: &[Candidate],
    ) -> Result<Decision, ClassifyError> {
        self.evaluate(consumer, candidates).map(|s| s.decision)
    }

    /// Like [`choose`](Self::choose), but also return the profile and the
    /// classified candidates the decision was made from.
    ///
    /// # Errors
    ///
    /// Same as [`choose`](Self::choose).
    pub fn evaluate(
        &self,
        consumer: ConsumerState,
        candidates: &[Candidate],
    ) -> Result<Selection, ClassifyError> {
        let Some(profile) = select_profile(consumer, self.settings) else {
            debug!(role = ?consumer.role, "no profile for consumer, deferring");
            return Ok(Selection {
                profile: None,
                classified: Vec::new(),
                decision: Decision::Defer,
            });
        };
        debug!(
            profile = profile.name(),
            hunger = ?consumer.hunger,
            candidates = candidates.len(),
            "selecting food"
        );

        let classified = self.classify_all(candidates)?;
        let decision = resolve(profile, consumer, &classified);
        Ok(Selection {
            profile: Some(profile),
            classified,
            decision,
        })
    }

    /// Classify every candidate, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClassifyError`] encountered.
    pub fn classify_all(
        &self,
        candidates: &[Candidate],
    ) -> Result<Vec<ClassifiedCandidate>, ClassifyError> {
        candidates
            .iter()
            .map(|c| self.classifier.classify_candidate(c))
            .collect()
    }
}
