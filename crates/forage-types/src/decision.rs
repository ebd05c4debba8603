//! The selector's output.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Category, TierKind};
use crate::ids::ItemId;

/// Whether to override the default food choice, and with what.
///
/// Built once per resolution call and handed to the external decision
/// point, which falls through to its own algorithm on [`Decision::Defer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Decision {
    /// Replace the default choice with this item.
    Intercept {
        /// The chosen item.
        item: ItemId,
        /// Definition of the chosen item (the dispensed one for dispensers).
        def_name: String,
        /// Category the item was selected under.
        category: Category,
        /// Tier the item was selected from.
        tier: TierKind,
    },
    /// Leave the choice to the default algorithm.
    Defer,
}

impl Decision {
    /// Whether the default choice should be replaced.
    pub const fn should_intercept(&self) -> bool {
        matches!(self, Self::Intercept { .. })
    }

    /// The chosen item, if intercepting.
    pub const fn item(&self) -> Option<ItemId> {
        match self {
            Self::Intercept { item, .. } => Some(*item),
            Self::Defer => None,
        }
    }

    /// The chosen category, if intercepting.
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::Intercept { category, .. } => Some(*category),
            Self::Defer => None,
        }
    }

    /// The tier the choice came from, if intercepting.
    pub const fn tier(&self) -> Option<TierKind> {
        match self {
            Self::Intercept { tier, .. } => Some(*tier),
            Self::Defer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defer_does_not_intercept() {
        let decision = Decision::Defer;
        assert!(!decision.should_intercept());
        assert_eq!(decision.item(), None);
        assert_eq!(decision.category(), None);
        assert_eq!(decision.tier(), None);
    }

    #[test]
    fn intercept_exposes_choice() {
        let item = ItemId::new();
        let decision = Decision::Intercept {
            item,
            def_name: String::from("MealSimple"),
            category: Category::MealSimple,
            tier: TierKind::Good,
        };
        assert!(decision.should_intercept());
        assert_eq!(decision.item(), Some(item));
        assert_eq!(decision.category(), Some(Category::MealSimple));
        assert_eq!(decision.tier(), Some(TierKind::Good));
    }

    #[test]
    fn decision_serializes_with_outcome_tag() {
        let json = serde_json::to_value(Decision::Defer).unwrap_or_default();
        assert_eq!(json["outcome"], "defer");
    }
}
