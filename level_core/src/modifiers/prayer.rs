//! Prayer multipliers
//!
//! Only one prayer per tier can be active in game, but the host may
//! report stale or conflicting state for a tick. The tables are applied in
//! order regardless, so the last listed active prayer decides.

use super::last_active;
use skill_types::{Prayer, Skill};
use std::collections::HashSet;

const ATTACK: &[(Prayer, f64)] = &[
    (Prayer::ClarityOfThought, 1.05),
    (Prayer::ImprovedReflexes, 1.10),
    (Prayer::IncredibleReflexes, 1.15),
    (Prayer::Chivalry, 1.15),
    (Prayer::Piety, 1.20),
];

const STRENGTH: &[(Prayer, f64)] = &[
    (Prayer::BurstOfStrength, 1.05),
    (Prayer::SuperhumanStrength, 1.10),
    (Prayer::UltimateStrength, 1.15),
    (Prayer::Chivalry, 1.18),
    (Prayer::Piety, 1.23),
];

const DEFENCE: &[(Prayer, f64)] = &[
    (Prayer::ThickSkin, 1.05),
    (Prayer::RockSkin, 1.10),
    (Prayer::SteelSkin, 1.15),
    (Prayer::Chivalry, 1.20),
    (Prayer::Piety, 1.25),
    (Prayer::Rigour, 1.25),
    (Prayer::Augury, 1.25),
];

const RANGED: &[(Prayer, f64)] = &[
    (Prayer::SharpEye, 1.05),
    (Prayer::HawkEye, 1.10),
    (Prayer::EagleEye, 1.15),
    (Prayer::Rigour, 1.20),
];

const MAGIC: &[(Prayer, f64)] = &[
    (Prayer::MysticWill, 1.05),
    (Prayer::MysticLore, 1.10),
    (Prayer::MysticMight, 1.15),
    (Prayer::Augury, 1.25),
];

fn rules_for(skill: Skill) -> &'static [(Prayer, f64)] {
    match skill {
        Skill::Attack => ATTACK,
        Skill::Strength => STRENGTH,
        Skill::Defence => DEFENCE,
        Skill::Ranged => RANGED,
        Skill::Magic => MAGIC,
        _ => &[],
    }
}

/// Multiplier the active prayers apply to a skill (1.0 if none apply)
pub fn prayer_multiplier(skill: Skill, active: &HashSet<Prayer>) -> f64 {
    last_active(rules_for(skill), 1.0, |prayer| active.contains(&prayer))
}
