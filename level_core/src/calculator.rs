//! Effective level calculation - combining modifiers per skill
//!
//! Combat skills go through four steps, each behind its own toggle:
//! 1. Multiply by the prayer bonus (truncated)
//! 2. Add the attack style bonus
//! 3. Add the +8 adjustment constant
//! 4. Multiply by the void bonus (truncated)
//!
//! The order matters: the void multiplier compounds on everything before
//! it. Gathering skills only receive the invisible boosts.

use crate::config::ModifierConfig;
use crate::modifiers::{prayer_multiplier, region_bonus, void_multiplier};
use crate::stance::{resolve_attack_style, stance_bonus, AttackStyle};
use crate::types::{EffectiveLevels, EvaluationContext};
use crate::LevelError;
use skill_types::Skill;
use std::collections::HashMap;

/// Flat offset the combat formulas add to every effective level
pub const ADJUSTMENT_CONSTANT: i32 = 8;

/// Multiply a level, truncating toward zero
fn scale(level: i32, multiplier: f64) -> i32 {
    (level as f64 * multiplier) as i32
}

/// Compute the effective level of every skill in `base`
///
/// Every skill in `base` gets an entry. The stance is resolved once up
/// front, so an unknown weapon category fails the whole evaluation before
/// any level is produced.
pub fn compute_all(
    base: &HashMap<Skill, i32>,
    ctx: &EvaluationContext,
    config: &ModifierConfig,
) -> Result<EffectiveLevels, LevelError> {
    let style = if config.show_stance_bonus {
        resolve_attack_style(ctx.weapon_category, ctx.stance_index).map_err(|e| {
            tracing::warn!(
                weapon_category = ctx.weapon_category,
                stance_index = ctx.stance_index,
                "Cannot resolve attack style: {}",
                e
            );
            e
        })?
    } else {
        None
    };

    let levels: EffectiveLevels = base
        .iter()
        .map(|(&skill, &level)| (skill, compute_skill(skill, level, style, ctx, config)))
        .collect();

    tracing::debug!(
        skills = levels.len(),
        style = ?style,
        region = ?ctx.region,
        "Computed effective levels"
    );

    Ok(levels)
}

/// Compute one skill's effective level from its boosted level
///
/// `style` is the already-resolved attack style.
pub fn compute_skill(
    skill: Skill,
    boosted: i32,
    style: Option<AttackStyle>,
    ctx: &EvaluationContext,
    config: &ModifierConfig,
) -> i32 {
    let level = if skill.is_combat() {
        compute_combat(skill, boosted, style, ctx, config)
    } else if skill.is_gathering() && config.show_invisible_boost {
        boosted + region_bonus(skill, ctx.region, &ctx.equipped, &ctx.carried)
    } else {
        boosted
    };

    if level != boosted {
        tracing::trace!(%skill, boosted, effective = level, "Skill modified");
    }
    level
}

fn compute_combat(
    skill: Skill,
    boosted: i32,
    style: Option<AttackStyle>,
    ctx: &EvaluationContext,
    config: &ModifierConfig,
) -> i32 {
    let mut level = boosted;

    if config.show_prayer_boost {
        level = scale(level, prayer_multiplier(skill, &ctx.active_prayers));
    }

    if config.show_stance_bonus {
        level += stance_bonus(skill, style);
    }

    if config.show_adjustment_constant {
        level += ADJUSTMENT_CONSTANT;
    }

    if config.show_void_bonus {
        level = scale(level, void_multiplier(skill, &ctx.equipped));
    }

    level
}
