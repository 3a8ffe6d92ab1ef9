//! skill_types - Shared game vocabulary for effective level calculation
//!
//! Skills, prayers, host connection state, and the item and region
//! identifiers that the level rules match against.

pub mod item;
pub mod region;
pub mod types;

pub use item::ItemVariants;
pub use types::{GameState, ItemId, Prayer, RegionId, Skill};
