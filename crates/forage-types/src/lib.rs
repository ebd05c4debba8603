//! Shared type definitions for Forage.
//!
//! This crate is the data contract between the world layer (which supplies
//! item facts and consumer state), the selection core, and the external
//! decision point (which consumes [`Decision`]). Types consumed outside Rust
//! are exported to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for item instances
//! - [`enums`] -- The food [`Category`] taxonomy, definition enums, hunger and role
//! - [`structs`] -- Item facts, candidates, and consumer state
//! - [`decision`] -- The [`Decision`] output record

pub mod decision;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use decision::Decision;
pub use enums::{
    Category, ConsumerRole, FoodType, HungerLevel, JoyKind, Origin, Preferability,
    TasteSentiment, TierKind,
};
pub use ids::ItemId;
pub use structs::{
    Candidate, CandidateSource, ClassifiedCandidate, ConsumerState, FoodTypeFlags,
    IngestibleFacts, ItemFacts, PlantFacts, RoleFlags, TasteThought,
};
