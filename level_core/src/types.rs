//! Evaluation inputs and outputs

use serde::{Deserialize, Serialize};
use skill_types::{ItemId, Prayer, RegionId, Skill};
use std::collections::{BTreeMap, HashSet};

/// Game state observed for one evaluation tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Prayers currently switched on
    #[serde(default)]
    pub active_prayers: HashSet<Prayer>,
    /// Category of the equipped weapon (0 when unarmed)
    #[serde(default)]
    pub weapon_category: i32,
    /// Index of the selected stance button
    #[serde(default)]
    pub stance_index: i32,
    /// Items in the equipment slots
    #[serde(default)]
    pub equipped: HashSet<ItemId>,
    /// Items in the inventory
    #[serde(default)]
    pub carried: HashSet<ItemId>,
    /// Region the player stands in, if known
    #[serde(default)]
    pub region: Option<RegionId>,
}

impl EvaluationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prayers(mut self, prayers: impl IntoIterator<Item = Prayer>) -> Self {
        self.active_prayers.extend(prayers);
        self
    }

    pub fn with_stance(mut self, weapon_category: i32, stance_index: i32) -> Self {
        self.weapon_category = weapon_category;
        self.stance_index = stance_index;
        self
    }

    pub fn with_equipped(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.equipped.extend(items);
        self
    }

    pub fn with_carried(mut self, items: impl IntoIterator<Item = ItemId>) -> Self {
        self.carried.extend(items);
        self
    }

    pub fn with_region(mut self, region: RegionId) -> Self {
        self.region = Some(region);
        self
    }
}

/// Effective level per skill for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectiveLevels {
    levels: BTreeMap<Skill, i32>,
}

impl EffectiveLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, skill: Skill, level: i32) {
        self.levels.insert(skill, level);
    }

    pub fn get(&self, skill: Skill) -> Option<i32> {
        self.levels.get(&skill).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate in skill-panel order
    pub fn iter(&self) -> impl Iterator<Item = (Skill, i32)> + '_ {
        self.levels.iter().map(|(&skill, &level)| (skill, level))
    }

    /// JSON snapshot for display collaborators
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl FromIterator<(Skill, i32)> for EffectiveLevels {
    fn from_iter<I: IntoIterator<Item = (Skill, i32)>>(iter: I) -> Self {
        EffectiveLevels {
            levels: iter.into_iter().collect(),
        }
    }
}
