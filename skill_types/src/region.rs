//! Map regions that grant hidden gathering boosts

use crate::types::RegionId;

/// Mining Guild, upper and lower floors
pub const MINING_GUILD: [RegionId; 2] = [RegionId(11927), RegionId(12183)];

/// Fishing Guild
pub const FISHING_GUILD: RegionId = RegionId(10293);

/// Woodcutting Guild, both halves
pub const WOODCUTTING_GUILD: [RegionId; 2] = [RegionId(6198), RegionId(6454)];

pub fn is_mining_guild(region: RegionId) -> bool {
    MINING_GUILD.contains(&region)
}

pub fn is_fishing_guild(region: RegionId) -> bool {
    region == FISHING_GUILD
}

pub fn is_woodcutting_guild(region: RegionId) -> bool {
    WOODCUTTING_GUILD.contains(&region)
}
