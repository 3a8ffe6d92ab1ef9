//! Invisible attack style bonus

use super::AttackStyle;
use crate::modifiers::last_active;
use skill_types::Skill;

const ATTACK: &[(AttackStyle, i32)] = &[(AttackStyle::Accurate, 3), (AttackStyle::Controlled, 1)];

const STRENGTH: &[(AttackStyle, i32)] =
    &[(AttackStyle::Aggressive, 3), (AttackStyle::Controlled, 1)];

const DEFENCE: &[(AttackStyle, i32)] = &[
    (AttackStyle::Controlled, 1),
    (AttackStyle::Defensive, 3),
    (AttackStyle::Longrange, 3),
];

const RANGED: &[(AttackStyle, i32)] = &[(AttackStyle::AccurateRanging, 3)];

const MAGIC: &[(AttackStyle, i32)] = &[
    (AttackStyle::AccurateCasting, 3),
    (AttackStyle::LongrangeCasting, 1),
];

fn rules_for(skill: Skill) -> &'static [(AttackStyle, i32)] {
    match skill {
        Skill::Attack => ATTACK,
        Skill::Strength => STRENGTH,
        Skill::Defence => DEFENCE,
        Skill::Ranged => RANGED,
        Skill::Magic => MAGIC,
        _ => &[],
    }
}

/// Additive level bonus the selected attack style grants a skill
///
/// Returns 0 when no style is selected or the style does not train the skill.
pub fn stance_bonus(skill: Skill, style: Option<AttackStyle>) -> i32 {
    match style {
        Some(selected) => last_active(rules_for(skill), 0, |s| s == selected),
        None => 0,
    }
}
