//! level_core - Effective skill level calculation
//!
//! The game's accuracy, max hit and defence formulas never use a skill
//! level directly. They first apply prayers, the attack style bonus, a
//! flat +8, and set bonuses. This library computes those hidden levels,
//! along with the invisible item and guild boosts to gathering skills.
//!
//! # Quick Start
//!
//! ```rust
//! use level_core::prelude::*;
//! use std::collections::HashMap;
//!
//! let base: HashMap<Skill, i32> = [(Skill::Strength, 80)].into_iter().collect();
//! let ctx = EvaluationContext::new().with_prayers([Prayer::Piety]);
//! let config = ModifierConfig::default();
//!
//! let levels = compute_all(&base, &ctx, &config).unwrap();
//! // floor(80 * 1.23) = 98, +8 adjustment
//! assert_eq!(levels.get(Skill::Strength), Some(106));
//! ```

pub mod calculator;
pub mod config;
pub mod modifiers;
pub mod prelude;
pub mod source;
pub mod stance;
pub mod types;

// Core API - what most users need
pub use calculator::{compute_all, ADJUSTMENT_CONSTANT};
pub use config::{ConfigError, ModifierConfig};
pub use types::{EffectiveLevels, EvaluationContext};

// Individual rules
pub use modifiers::{prayer_multiplier, region_bonus, void_multiplier};
pub use stance::{resolve_attack_style, stance_bonus, AttackStyle};

// Host integration
pub use source::{evaluate_tick, reset_levels, GameStateSource};

// Re-export commonly needed skill_types types
pub use skill_types::{GameState, ItemId, Prayer, RegionId, Skill};

use thiserror::Error;

/// Error evaluating effective levels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("Unknown weapon category: {0}")]
    InvalidCategory(i32),
}
