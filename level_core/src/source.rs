//! Host seam - reading game state once per tick

use crate::calculator::compute_all;
use crate::config::ModifierConfig;
use crate::types::{EffectiveLevels, EvaluationContext};
use crate::LevelError;
use skill_types::{GameState, ItemId, Prayer, RegionId, Skill};
use std::collections::{HashMap, HashSet};

/// Read access to the live game client
///
/// Implemented by the host integration. Every method reflects the state
/// at the moment of the call.
pub trait GameStateSource {
    fn game_state(&self) -> GameState;

    /// Current (boosted or drained) level of a skill
    fn boosted_level(&self, skill: Skill) -> i32;

    fn is_prayer_active(&self, prayer: Prayer) -> bool;

    /// Category of the equipped weapon
    fn weapon_category(&self) -> i32;

    /// Index of the selected stance button
    fn stance_index(&self) -> i32;

    fn equipped_items(&self) -> HashSet<ItemId>;

    fn carried_items(&self) -> HashSet<ItemId>;

    /// Region of the local player, `None` when there is no local player
    fn region(&self) -> Option<RegionId>;
}

impl EvaluationContext {
    /// Snapshot the modifier inputs from the host
    pub fn from_source(source: &impl GameStateSource) -> Self {
        EvaluationContext {
            active_prayers: Prayer::all()
                .iter()
                .copied()
                .filter(|&prayer| source.is_prayer_active(prayer))
                .collect(),
            weapon_category: source.weapon_category(),
            stance_index: source.stance_index(),
            equipped: source.equipped_items(),
            carried: source.carried_items(),
            region: source.region(),
        }
    }
}

/// Skills whose displayed level this engine rewrites
fn tracked_skills() -> impl Iterator<Item = Skill> {
    Skill::combat().iter().chain(Skill::gathering()).copied()
}

fn boosted_levels(source: &impl GameStateSource) -> HashMap<Skill, i32> {
    tracked_skills()
        .map(|skill| (skill, source.boosted_level(skill)))
        .collect()
}

/// Evaluate one game tick
///
/// Returns `Ok(None)` when the player is not logged in; the display
/// should be left untouched for that tick.
pub fn evaluate_tick(
    source: &impl GameStateSource,
    config: &ModifierConfig,
) -> Result<Option<EffectiveLevels>, LevelError> {
    let state = source.game_state();
    if state != GameState::LoggedIn {
        tracing::trace!(?state, "Skipping tick, not logged in");
        return Ok(None);
    }

    let ctx = EvaluationContext::from_source(source);
    compute_all(&boosted_levels(source), &ctx, config).map(Some)
}

/// Plain boosted levels of every tracked skill
///
/// Written back to the display on shutdown or when a toggle changes, so
/// no stale effective level stays on screen.
pub fn reset_levels(source: &impl GameStateSource) -> EffectiveLevels {
    tracked_skills()
        .map(|skill| (skill, source.boosted_level(skill)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skill_types::item::{VOID_KNIGHT_GLOVES, VOID_KNIGHT_ROBE, VOID_KNIGHT_TOP, VOID_MELEE_HELM};
    use skill_types::region::WOODCUTTING_GUILD;

    struct FakeClient {
        state: GameState,
        level: i32,
        prayers: Vec<Prayer>,
        weapon_category: i32,
        stance_index: i32,
        equipped: HashSet<ItemId>,
        region: Option<RegionId>,
    }

    impl FakeClient {
        fn logged_in(level: i32) -> Self {
            FakeClient {
                state: GameState::LoggedIn,
                level,
                prayers: Vec::new(),
                weapon_category: 0,
                stance_index: 0,
                equipped: HashSet::new(),
                region: None,
            }
        }
    }

    impl GameStateSource for FakeClient {
        fn game_state(&self) -> GameState {
            self.state
        }

        fn boosted_level(&self, _skill: Skill) -> i32 {
            self.level
        }

        fn is_prayer_active(&self, prayer: Prayer) -> bool {
            self.prayers.contains(&prayer)
        }

        fn weapon_category(&self) -> i32 {
            self.weapon_category
        }

        fn stance_index(&self) -> i32 {
            self.stance_index
        }

        fn equipped_items(&self) -> HashSet<ItemId> {
            self.equipped.clone()
        }

        fn carried_items(&self) -> HashSet<ItemId> {
            HashSet::new()
        }

        fn region(&self) -> Option<RegionId> {
            self.region
        }
    }

    #[test]
    fn test_skip_when_not_logged_in() {
        let mut client = FakeClient::logged_in(50);
        for state in [GameState::LoginScreen, GameState::Loading, GameState::Hopping] {
            client.state = state;
            assert!(evaluate_tick(&client, &ModifierConfig::default()).unwrap().is_none());
        }
    }

    #[test]
    fn test_tick_covers_tracked_skills() {
        let client = FakeClient::logged_in(50);
        let levels = evaluate_tick(&client, &ModifierConfig::all_disabled())
            .unwrap()
            .unwrap();
        assert_eq!(levels.len(), 9);
        assert!(levels.iter().all(|(_, level)| level == 50));
        assert_eq!(levels.get(Skill::Hitpoints), None);
    }

    #[test]
    fn test_tick_applies_modifiers() {
        let mut client = FakeClient::logged_in(90);
        client.prayers = vec![Prayer::Piety];
        client.stance_index = 1; // Aggressive
        client.equipped = [
            VOID_KNIGHT_GLOVES.ids[3],
            VOID_KNIGHT_TOP.ids[2],
            VOID_KNIGHT_ROBE.ids[1],
            VOID_MELEE_HELM.ids[0],
        ]
        .into_iter()
        .collect();
        client.region = Some(WOODCUTTING_GUILD[1]);

        let levels = evaluate_tick(&client, &ModifierConfig::default())
            .unwrap()
            .unwrap();
        // floor(90 * 1.23) = 110, +3 = 113, +8 = 121, floor(121 * 1.10) = 133
        assert_eq!(levels.get(Skill::Strength), Some(133));
        // floor(90 * 1.25) = 112, +8 = 120, no void on defence
        assert_eq!(levels.get(Skill::Defence), Some(120));
        assert_eq!(levels.get(Skill::Woodcutting), Some(97));
        assert_eq!(levels.get(Skill::Mining), Some(90));
    }

    #[test]
    fn test_tick_surfaces_invalid_category() {
        let mut client = FakeClient::logged_in(50);
        client.weapon_category = 31;
        let result = evaluate_tick(&client, &ModifierConfig::default());
        assert!(matches!(result, Err(LevelError::InvalidCategory(31))));
    }

    #[test]
    fn test_context_snapshot() {
        let mut client = FakeClient::logged_in(1);
        client.prayers = vec![Prayer::Rigour, Prayer::HawkEye];
        client.region = Some(RegionId(10293));

        let ctx = EvaluationContext::from_source(&client);
        assert_eq!(ctx.active_prayers.len(), 2);
        assert!(ctx.active_prayers.contains(&Prayer::Rigour));
        assert_eq!(ctx.region, Some(RegionId(10293)));
    }

    #[test]
    fn test_reset_levels_ignores_modifiers() {
        let mut client = FakeClient::logged_in(75);
        client.prayers = vec![Prayer::Piety];
        let levels = reset_levels(&client);
        assert_eq!(levels.len(), 9);
        assert_eq!(levels.get(Skill::Attack), Some(75));
    }
}
