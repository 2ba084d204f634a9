//! Orders the bot issues during its two move phases.
//!
//! Each order renders to its protocol form through `Display`, e.g.
//! `bot1 place_armies 12 3` or `bot1 attack/transfer 12 13 5`.

use std::fmt;

use super::region::RegionId;

/// Deploy new armies on an owned region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceArmies {
    pub player: String,
    pub region: RegionId,
    pub troops: u32,
}

/// Move armies from an owned region into a neighbor: an attack when the
/// neighbor belongs to someone else, a transfer otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttackTransfer {
    pub player: String,
    pub from: RegionId,
    pub to: RegionId,
    pub troops: u32,
}

impl fmt::Display for PlaceArmies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} place_armies {} {}", self.player, self.region, self.troops)
    }
}

impl fmt::Display for AttackTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attack/transfer {} {} {}",
            self.player, self.from, self.to, self.troops
        )
    }
}
