//! Void knight set bonus
//!
//! The set needs gloves, a top and a robe (regular or elite), plus the
//! helm matching the combat style. Elite top and robe together upgrade the
//! ranged and magic bonus.

use skill_types::item::{
    ELITE_VOID_ROBE, ELITE_VOID_TOP, VOID_KNIGHT_GLOVES, VOID_KNIGHT_ROBE, VOID_KNIGHT_TOP,
    VOID_MAGE_HELM, VOID_MELEE_HELM, VOID_RANGER_HELM,
};
use skill_types::{ItemId, Skill};
use std::collections::HashSet;

pub const MELEE_MULTIPLIER: f64 = 1.10;
pub const RANGED_MULTIPLIER: f64 = 1.10;
pub const ELITE_RANGED_MULTIPLIER: f64 = 1.125;
pub const MAGIC_MULTIPLIER: f64 = 1.45;
pub const ELITE_MAGIC_MULTIPLIER: f64 = 1.475;

pub fn has_void_gloves(equipped: &HashSet<ItemId>) -> bool {
    VOID_KNIGHT_GLOVES.any_in(equipped)
}

pub fn has_void_top(equipped: &HashSet<ItemId>) -> bool {
    VOID_KNIGHT_TOP.any_in(equipped)
}

pub fn has_void_robe(equipped: &HashSet<ItemId>) -> bool {
    VOID_KNIGHT_ROBE.any_in(equipped)
}

pub fn has_elite_void_top(equipped: &HashSet<ItemId>) -> bool {
    ELITE_VOID_TOP.any_in(equipped)
}

pub fn has_elite_void_robe(equipped: &HashSet<ItemId>) -> bool {
    ELITE_VOID_ROBE.any_in(equipped)
}

pub fn has_melee_helm(equipped: &HashSet<ItemId>) -> bool {
    VOID_MELEE_HELM.any_in(equipped)
}

pub fn has_ranger_helm(equipped: &HashSet<ItemId>) -> bool {
    VOID_RANGER_HELM.any_in(equipped)
}

pub fn has_mage_helm(equipped: &HashSet<ItemId>) -> bool {
    VOID_MAGE_HELM.any_in(equipped)
}

/// Gloves, a top and a robe; regular and elite pieces can be mixed
pub fn has_void_base(equipped: &HashSet<ItemId>) -> bool {
    has_void_gloves(equipped)
        && (has_void_top(equipped) || has_elite_void_top(equipped))
        && (has_void_robe(equipped) || has_elite_void_robe(equipped))
}

/// Both elite body pieces
pub fn has_elite_body(equipped: &HashSet<ItemId>) -> bool {
    has_elite_void_top(equipped) && has_elite_void_robe(equipped)
}

/// Multiplier the worn void set applies to a skill (1.0 if none applies)
///
/// Defence never benefits from void.
pub fn void_multiplier(skill: Skill, equipped: &HashSet<ItemId>) -> f64 {
    if skill == Skill::Defence || !has_void_base(equipped) {
        return 1.0;
    }

    match skill {
        Skill::Attack | Skill::Strength if has_melee_helm(equipped) => MELEE_MULTIPLIER,
        Skill::Ranged if has_ranger_helm(equipped) => {
            if has_elite_body(equipped) {
                ELITE_RANGED_MULTIPLIER
            } else {
                RANGED_MULTIPLIER
            }
        }
        Skill::Magic if has_mage_helm(equipped) => {
            if has_elite_body(equipped) {
                ELITE_MAGIC_MULTIPLIER
            } else {
                MAGIC_MULTIPLIER
            }
        }
        _ => 1.0,
    }
}
