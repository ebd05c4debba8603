//! Preference resolution over classified candidates.
//!
//! Tiers are walked in fixed order and ineligible ones are skipped. Inside a
//! tier, groups are walked best first; the first group with any match wins,
//! and within that group the first matching candidate in input order is
//! taken. Candidates are never reordered.

use forage_types::{ClassifiedCandidate, ConsumerState, Decision};
use tracing::debug;

use crate::profile::Profile;

/// Choose the best candidate for a consumer under `profile`.
///
/// Candidates classified `Null` or `Ignore` are never chosen. Returns
/// [`Decision::Defer`] when no eligible tier has a match.
pub fn resolve(
    profile: &Profile,
    state: ConsumerState,
    candidates: &[ClassifiedCandidate],
) -> Decision {
    let eligible: Vec<&ClassifiedCandidate> = candidates
        .iter()
        .filter(|c| !c.category.is_sentinel())
        .collect();

    for tier in profile.tiers() {
        if !tier.is_eligible(state.hunger) {
            continue;
        }
        for group in tier.groups() {
            if let Some(chosen) = eligible.iter().find(|c| group.contains(&c.category)) {
                debug!(
                    profile = profile.name(),
                    tier = %tier.kind(),
                    category = %chosen.category,
                    item = %chosen.item,
                    "food preference resolved"
                );
                return Decision::Intercept {
                    item: chosen.item,
                    def_name: chosen.def_name.clone(),
                    category: chosen.category,
                    tier: tier.kind(),
                };
            }
        }
    }

    debug!(
        profile = profile.name(),
        hunger = ?state.hunger,
        candidates = candidates.len(),
        "no preferred food, deferring"
    );
    Decision::Defer
}
