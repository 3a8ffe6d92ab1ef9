//! Prelude module for convenient imports
//!
//! ```rust
//! use level_core::prelude::*;
//! ```

// Calculation
pub use crate::calculator::compute_all;
pub use crate::config::ModifierConfig;
pub use crate::types::{EffectiveLevels, EvaluationContext};
pub use crate::LevelError;

// Attack styles
pub use crate::stance::AttackStyle;

// Host integration
pub use crate::source::{evaluate_tick, reset_levels, GameStateSource};

// Re-exports from skill_types
pub use skill_types::{GameState, ItemId, Prayer, RegionId, Skill};
