//! Profile selection by consumer role and preference toggles.

use forage_types::{ConsumerRole, ConsumerState};

use crate::profile::{Profile, ProfileId};
use crate::settings::PreferenceSettings;

/// Pick the profile id for a consumer role.
///
/// Returns `None` for consumers outside scope (wild animals, wild humans),
/// which the caller handles with its default algorithm.
pub const fn select_profile_id(
    role: ConsumerRole,
    settings: PreferenceSettings,
) -> Option<ProfileId> {
    match role {
        ConsumerRole::Pet => Some(ProfileId::Pet),
        ConsumerRole::Ascetic => {
            if settings.ascetic_prefers_raw_tasty {
                Some(ProfileId::Ascetic)
            } else {
                Some(ProfileId::AsceticPrefSurvival)
            }
        }
        ConsumerRole::Humanlike => {
            if settings.human_prefers_raw_tasty {
                Some(ProfileId::Human)
            } else {
                Some(ProfileId::HumanPrefSurvival)
            }
        }
        ConsumerRole::Other => None,
    }
}

/// Pick the profile for a consumer.
pub const fn select_profile(
    state: ConsumerState,
    settings: PreferenceSettings,
) -> Option<&'static Profile> {
    match select_profile_id(state.role, settings) {
        Some(id) => Some(id.profile()),
        None => None,
    }
}
