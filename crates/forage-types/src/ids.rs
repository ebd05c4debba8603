//! Item identifiers.
//!
//! Items handed to the selector by the world layer are identified by an
//! opaque [`ItemId`]. The core never interprets the value; it only carries it
//! through to the [`Decision`](crate::Decision) so the caller can find the
//! chosen thing again. Ids are always supplied by the caller, so the same
//! input always produces the same output.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Identifier for a candidate item instance (a thing in the world, or a
/// dispenser standing in for what it dispenses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Mint a fresh time-ordered id, for hosts that have none of their own.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn serializes_as_bare_uuid() {
        let uuid = Uuid::parse_str("0190a6d3-1c2b-7f00-8000-000000000001").unwrap();
        let id = ItemId::from(uuid);
        assert_eq!(id.into_inner(), uuid);
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"0190a6d3-1c2b-7f00-8000-000000000001\""
        );
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
