//! Attack styles - resolving the selected stance button to a named style
//!
//! The host reports two numbers: the equipped weapon's category and the
//! index of the selected stance button. Each category has its own layout
//! of buttons, some of which are empty.

mod bonus;

pub use bonus::stance_bonus;

use crate::LevelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named attack style shown on a stance button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackStyle {
    Accurate,
    Aggressive,
    Controlled,
    Defensive,
    AccurateRanging,
    Rapid,
    Longrange,
    Casting,
    DefensiveCasting,
    AccurateCasting,
    LongrangeCasting,
    Other,
}

impl fmt::Display for AttackStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AttackStyle::Accurate => "Accurate",
            AttackStyle::Aggressive => "Aggressive",
            AttackStyle::Controlled => "Controlled",
            AttackStyle::Defensive => "Defensive",
            AttackStyle::AccurateRanging => "Accurate ranging",
            AttackStyle::Rapid => "Rapid",
            AttackStyle::Longrange => "Longrange",
            AttackStyle::Casting => "Casting",
            AttackStyle::DefensiveCasting => "Defensive casting",
            AttackStyle::AccurateCasting => "Accurate casting",
            AttackStyle::LongrangeCasting => "Longrange casting",
            AttackStyle::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

use self::AttackStyle::{
    Accurate as ACC, AccurateCasting as ACS, AccurateRanging as ACR, Aggressive as AGG,
    Casting as CST, Controlled as CTL, Defensive as DEF, DefensiveCasting as DCS,
    Longrange as LNG, LongrangeCasting as LCS, Other as OTH, Rapid as RPD,
};

/// Number of known weapon categories
pub const WEAPON_CATEGORY_COUNT: usize = 30;

/// Stance button layout per weapon category
///
/// Slots 0-3 are the four stance buttons. Staves (18 and 21) add the two
/// autocast slots.
static STANCE_TABLE: [&[Option<AttackStyle>]; WEAPON_CATEGORY_COUNT] = [
    /* 0 */ &[Some(ACC), Some(AGG), None, Some(DEF)],
    /* 1 */ &[Some(ACC), Some(AGG), Some(AGG), Some(DEF)],
    /* 2 */ &[Some(ACC), Some(AGG), None, Some(DEF)],
    /* 3 */ &[Some(ACR), Some(RPD), None, Some(LNG)],
    /* 4 */ &[Some(ACC), Some(AGG), Some(CTL), Some(DEF)],
    /* 5 */ &[Some(ACR), Some(RPD), None, Some(LNG)],
    /* 6 */ &[Some(AGG), Some(RPD), Some(CST), None],
    /* 7 */ &[Some(ACR), Some(RPD), None, Some(LNG)],
    /* 8 */ &[Some(OTH), Some(AGG), None, None],
    /* 9 */ &[Some(ACC), Some(AGG), Some(CTL), Some(DEF)],
    /* 10 */ &[Some(ACC), Some(AGG), Some(AGG), Some(DEF)],
    /* 11 */ &[Some(ACC), Some(AGG), Some(AGG), Some(DEF)],
    /* 12 */ &[Some(CTL), Some(AGG), None, Some(DEF)],
    /* 13 */ &[Some(ACC), Some(AGG), None, Some(DEF)],
    /* 14 */ &[Some(ACC), Some(AGG), Some(AGG), Some(DEF)],
    /* 15 */ &[Some(CTL), Some(CTL), Some(CTL), Some(DEF)],
    /* 16 */ &[Some(ACC), Some(AGG), Some(CTL), Some(DEF)],
    /* 17 */ &[Some(ACC), Some(AGG), Some(AGG), Some(DEF)],
    /* 18 */ &[Some(ACC), Some(AGG), None, Some(DEF), Some(CST), Some(DCS)],
    /* 19 */ &[Some(ACR), Some(RPD), None, Some(LNG)],
    /* 20 */ &[Some(ACC), Some(CTL), None, Some(DEF)],
    /* 21 */ &[Some(ACC), Some(AGG), None, Some(DEF), Some(CST), Some(DCS)],
    /* 22 */ &[Some(ACC), Some(AGG), Some(AGG), Some(DEF)],
    /* 23 */ &[Some(ACS), Some(ACS), None, Some(LCS)],
    /* 24 */ &[Some(ACC), Some(AGG), Some(CTL), Some(DEF)],
    /* 25 */ &[Some(CTL), Some(AGG), None, Some(DEF)],
    /* 26 */ &[Some(AGG), Some(AGG), None, Some(AGG)],
    /* 27 */ &[Some(ACC), None, None, Some(OTH)],
    /* 28 */ &[Some(ACS), Some(ACS), None, Some(LCS)],
    /* 29 */ &[Some(ACC), Some(AGG), Some(AGG), Some(DEF)],
];

/// Resolve the selected stance button to a named style
///
/// # Returns
/// * `Ok(Some(style))` - the button has a style
/// * `Ok(None)` - the button is empty or the index is past the layout
/// * `Err(InvalidCategory)` - the weapon category is unknown
pub fn resolve_attack_style(
    weapon_category: i32,
    stance_index: i32,
) -> Result<Option<AttackStyle>, LevelError> {
    let slots = usize::try_from(weapon_category)
        .ok()
        .and_then(|category| STANCE_TABLE.get(category))
        .ok_or(LevelError::InvalidCategory(weapon_category))?;

    let style = usize::try_from(stance_index)
        .ok()
        .and_then(|index| slots.get(index).copied())
        .flatten();

    Ok(style)
}
