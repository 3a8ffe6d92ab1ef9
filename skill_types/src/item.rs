//! Item identifiers the level rules care about
//!
//! Most garments exist in four forms: the base item, the locked (`_l`)
//! copy kept on death, the ornament (`_or`) kit version, and the locked
//! ornament (`_lor`) version. Rules match any of them.

use crate::types::ItemId;
use serde::Serialize;
use std::collections::HashSet;

/// A named group of interchangeable item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemVariants {
    /// Display name of the base item
    pub name: &'static str,
    /// Every id that counts as this item
    pub ids: [ItemId; 4],
}

impl ItemVariants {
    /// Check whether any variant is in the given item set
    pub fn any_in(&self, items: &HashSet<ItemId>) -> bool {
        self.ids.iter().any(|id| items.contains(id))
    }

    /// Check whether a single id is one of the variants
    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }
}

// ============================================================================
// Void Knight equipment
// ============================================================================

pub const VOID_KNIGHT_GLOVES: ItemVariants = ItemVariants {
    name: "Void knight gloves",
    ids: [ItemId(8842), ItemId(24182), ItemId(26467), ItemId(26511)],
};

pub const VOID_KNIGHT_TOP: ItemVariants = ItemVariants {
    name: "Void knight top",
    ids: [ItemId(8839), ItemId(24177), ItemId(26463), ItemId(26509)],
};

pub const VOID_KNIGHT_ROBE: ItemVariants = ItemVariants {
    name: "Void knight robe",
    ids: [ItemId(8840), ItemId(24179), ItemId(26465), ItemId(26510)],
};

pub const ELITE_VOID_TOP: ItemVariants = ItemVariants {
    name: "Elite void top",
    ids: [ItemId(13072), ItemId(24178), ItemId(26469), ItemId(26512)],
};

pub const ELITE_VOID_ROBE: ItemVariants = ItemVariants {
    name: "Elite void robe",
    ids: [ItemId(13073), ItemId(24180), ItemId(26471), ItemId(26513)],
};

pub const VOID_MELEE_HELM: ItemVariants = ItemVariants {
    name: "Void melee helm",
    ids: [ItemId(11665), ItemId(24185), ItemId(26477), ItemId(26516)],
};

pub const VOID_RANGER_HELM: ItemVariants = ItemVariants {
    name: "Void ranger helm",
    ids: [ItemId(11664), ItemId(24184), ItemId(26475), ItemId(26515)],
};

pub const VOID_MAGE_HELM: ItemVariants = ItemVariants {
    name: "Void mage helm",
    ids: [ItemId(11663), ItemId(24183), ItemId(26473), ItemId(26514)],
};

// ============================================================================
// Skilling items
// ============================================================================

/// Celestial ring and signet, charged and uncharged
pub const CELESTIAL_RINGS: ItemVariants = ItemVariants {
    name: "Celestial ring",
    ids: [ItemId(25539), ItemId(25541), ItemId(25543), ItemId(25545)],
};

pub const CRYSTAL_SAW: ItemId = ItemId(9625);
