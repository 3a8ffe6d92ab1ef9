//! Invisible gathering boosts from items and guild locations

use skill_types::item::{CELESTIAL_RINGS, CRYSTAL_SAW};
use skill_types::region::{is_fishing_guild, is_mining_guild, is_woodcutting_guild};
use skill_types::{ItemId, RegionId, Skill};
use std::collections::HashSet;

pub const CELESTIAL_RING_BONUS: i32 = 4;
pub const CRYSTAL_SAW_BONUS: i32 = 3;
pub const GUILD_BONUS: i32 = 7;

/// Additive boost for a gathering skill
///
/// Item and guild boosts are independent and stack. An unknown region
/// contributes nothing.
pub fn region_bonus(
    skill: Skill,
    region: Option<RegionId>,
    equipped: &HashSet<ItemId>,
    carried: &HashSet<ItemId>,
) -> i32 {
    let in_region = |check: fn(RegionId) -> bool| region.is_some_and(check);

    match skill {
        Skill::Mining => {
            let mut bonus = 0;
            if CELESTIAL_RINGS.any_in(equipped) {
                bonus += CELESTIAL_RING_BONUS;
            }
            if in_region(is_mining_guild) {
                bonus += GUILD_BONUS;
            }
            bonus
        }
        Skill::Construction if carried.contains(&CRYSTAL_SAW) => CRYSTAL_SAW_BONUS,
        Skill::Fishing if in_region(is_fishing_guild) => GUILD_BONUS,
        Skill::Woodcutting if in_region(is_woodcutting_guild) => GUILD_BONUS,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_types::region::{FISHING_GUILD, MINING_GUILD, WOODCUTTING_GUILD};

    fn items(ids: &[ItemId]) -> HashSet<ItemId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_mining_ring_and_guild_stack() {
        let ring = items(&[CELESTIAL_RINGS.ids[2]]);
        let none = HashSet::new();

        assert_eq!(region_bonus(Skill::Mining, None, &ring, &none), 4);
        assert_eq!(region_bonus(Skill::Mining, Some(MINING_GUILD[0]), &none, &none), 7);
        assert_eq!(region_bonus(Skill::Mining, Some(MINING_GUILD[1]), &ring, &none), 11);
    }

    #[test]
    fn test_ring_counts_once() {
        let rings = items(&CELESTIAL_RINGS.ids);
        assert_eq!(region_bonus(Skill::Mining, None, &rings, &HashSet::new()), 4);
    }

    #[test]
    fn test_ring_must_be_worn() {
        let ring = items(&[CELESTIAL_RINGS.ids[0]]);
        assert_eq!(region_bonus(Skill::Mining, None, &HashSet::new(), &ring), 0);
    }

    #[test]
    fn test_crystal_saw_must_be_carried() {
        let saw = items(&[CRYSTAL_SAW]);
        let none = HashSet::new();
        assert_eq!(region_bonus(Skill::Construction, None, &none, &saw), 3);
        assert_eq!(region_bonus(Skill::Construction, None, &saw, &none), 0);
    }

    #[test]
    fn test_guilds() {
        let none = HashSet::new();
        assert_eq!(region_bonus(Skill::Fishing, Some(FISHING_GUILD), &none, &none), 7);
        for region in WOODCUTTING_GUILD {
            assert_eq!(region_bonus(Skill::Woodcutting, Some(region), &none, &none), 7);
        }
    }

    #[test]
    fn test_guild_only_boosts_its_skill() {
        let none = HashSet::new();
        assert_eq!(region_bonus(Skill::Mining, Some(FISHING_GUILD), &none, &none), 0);
        assert_eq!(region_bonus(Skill::Fishing, Some(WOODCUTTING_GUILD[0]), &none, &none), 0);
        assert_eq!(region_bonus(Skill::Woodcutting, Some(MINING_GUILD[0]), &none, &none), 0);
    }

    #[test]
    fn test_unknown_region() {
        let none = HashSet::new();
        for &skill in Skill::gathering() {
            assert_eq!(region_bonus(skill, None, &none, &none), 0);
        }
    }

    #[test]
    fn test_other_skills_never_boosted() {
        let everything = items(&[CELESTIAL_RINGS.ids[0], CRYSTAL_SAW]);
        for &skill in Skill::all().iter().filter(|s| !s.is_gathering()) {
            assert_eq!(
                region_bonus(skill, Some(MINING_GUILD[0]), &everything, &everything),
                0
            );
        }
    }
}
