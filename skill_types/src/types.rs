use serde::{Deserialize, Serialize};
use std::fmt;

/// Every trainable skill, in skill-panel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Attack,
    Strength,
    Defence,
    Ranged,
    Prayer,
    Magic,
    Runecraft,
    Construction,
    Hitpoints,
    Agility,
    Herblore,
    Thieving,
    Crafting,
    Fletching,
    Slayer,
    Hunter,
    Mining,
    Smithing,
    Fishing,
    Cooking,
    Firemaking,
    Woodcutting,
    Farming,
}

impl Skill {
    /// Get all skill variants
    pub fn all() -> &'static [Skill] {
        &[
            Skill::Attack,
            Skill::Strength,
            Skill::Defence,
            Skill::Ranged,
            Skill::Prayer,
            Skill::Magic,
            Skill::Runecraft,
            Skill::Construction,
            Skill::Hitpoints,
            Skill::Agility,
            Skill::Herblore,
            Skill::Thieving,
            Skill::Crafting,
            Skill::Fletching,
            Skill::Slayer,
            Skill::Hunter,
            Skill::Mining,
            Skill::Smithing,
            Skill::Fishing,
            Skill::Cooking,
            Skill::Firemaking,
            Skill::Woodcutting,
            Skill::Farming,
        ]
    }

    /// Skills whose effective level feeds the accuracy, max hit and defence rolls
    pub fn combat() -> &'static [Skill] {
        &[
            Skill::Attack,
            Skill::Strength,
            Skill::Defence,
            Skill::Ranged,
            Skill::Magic,
        ]
    }

    /// Skills that receive hidden item or location boosts
    pub fn gathering() -> &'static [Skill] {
        &[
            Skill::Mining,
            Skill::Construction,
            Skill::Fishing,
            Skill::Woodcutting,
        ]
    }

    pub fn is_combat(&self) -> bool {
        matches!(
            self,
            Skill::Attack | Skill::Strength | Skill::Defence | Skill::Ranged | Skill::Magic
        )
    }

    pub fn is_gathering(&self) -> bool {
        matches!(
            self,
            Skill::Mining | Skill::Construction | Skill::Fishing | Skill::Woodcutting
        )
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Skill::Attack => "Attack",
            Skill::Strength => "Strength",
            Skill::Defence => "Defence",
            Skill::Ranged => "Ranged",
            Skill::Prayer => "Prayer",
            Skill::Magic => "Magic",
            Skill::Runecraft => "Runecraft",
            Skill::Construction => "Construction",
            Skill::Hitpoints => "Hitpoints",
            Skill::Agility => "Agility",
            Skill::Herblore => "Herblore",
            Skill::Thieving => "Thieving",
            Skill::Crafting => "Crafting",
            Skill::Fletching => "Fletching",
            Skill::Slayer => "Slayer",
            Skill::Hunter => "Hunter",
            Skill::Mining => "Mining",
            Skill::Smithing => "Smithing",
            Skill::Fishing => "Fishing",
            Skill::Cooking => "Cooking",
            Skill::Firemaking => "Firemaking",
            Skill::Woodcutting => "Woodcutting",
            Skill::Farming => "Farming",
        };
        write!(f, "{}", name)
    }
}

/// Prayers that scale a combat skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prayer {
    // Attack
    ClarityOfThought,
    ImprovedReflexes,
    IncredibleReflexes,
    // Strength
    BurstOfStrength,
    SuperhumanStrength,
    UltimateStrength,
    // Defence
    ThickSkin,
    RockSkin,
    SteelSkin,
    // Ranged
    SharpEye,
    HawkEye,
    EagleEye,
    // Magic
    MysticWill,
    MysticLore,
    MysticMight,
    // Multi-skill
    Chivalry,
    Piety,
    Rigour,
    Augury,
}

impl Prayer {
    /// Get all prayer variants
    pub fn all() -> &'static [Prayer] {
        &[
            Prayer::ClarityOfThought,
            Prayer::ImprovedReflexes,
            Prayer::IncredibleReflexes,
            Prayer::BurstOfStrength,
            Prayer::SuperhumanStrength,
            Prayer::UltimateStrength,
            Prayer::ThickSkin,
            Prayer::RockSkin,
            Prayer::SteelSkin,
            Prayer::SharpEye,
            Prayer::HawkEye,
            Prayer::EagleEye,
            Prayer::MysticWill,
            Prayer::MysticLore,
            Prayer::MysticMight,
            Prayer::Chivalry,
            Prayer::Piety,
            Prayer::Rigour,
            Prayer::Augury,
        ]
    }
}

/// Connection state reported by the host client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    LoginScreen,
    Loading,
    LoggedIn,
    ConnectionLost,
    Hopping,
}

/// Item identifier from the game's item database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Map region identifier (64x64 tile square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combat_and_gathering_are_disjoint() {
        for skill in Skill::all() {
            assert!(!(skill.is_combat() && skill.is_gathering()), "{} in both groups", skill);
        }
        assert!(Skill::combat().iter().all(Skill::is_combat));
        assert!(Skill::gathering().iter().all(Skill::is_gathering));
    }

    #[test]
    fn test_all_skills_listed_once() {
        let mut skills = Skill::all().to_vec();
        skills.sort();
        skills.dedup();
        assert_eq!(skills.len(), 23);
    }

    #[test]
    fn test_ids_serialize_transparent() {
        let json = serde_json::to_string(&ItemId(8842)).unwrap();
        assert_eq!(json, "8842");
        let region: RegionId = serde_json::from_str("10293").unwrap();
        assert_eq!(region, RegionId(10293));
    }

    #[test]
    fn test_skill_serde_snake_case() {
        let json = serde_json::to_string(&Skill::Woodcutting).unwrap();
        assert_eq!(json, "\"woodcutting\"");
        let prayer: Prayer = serde_json::from_str("\"clarity_of_thought\"").unwrap();
        assert_eq!(prayer, Prayer::ClarityOfThought);
    }
}
