//! Region, continent, and ownership types.
//!
//! Regions refer to their continent and their neighbors by id only, so the
//! whole map can live in flat id-keyed containers without ownership cycles.

use std::fmt;

/// Identifier of a region as transmitted by the protocol.
pub type RegionId = u32;

/// Identifier of a continent (a "super region" in protocol terms).
pub type ContinentId = u32;

/// Who holds a region.
///
/// The protocol names owners by string: `neutral` for unclaimed territory,
/// otherwise the name of one of the two bots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Owner {
    #[default]
    Neutral,
    Player(String),
}

impl Owner {
    /// The protocol token for an unclaimed region.
    pub const NEUTRAL: &'static str = "neutral";

    /// Parses an owner from its protocol name.
    pub fn from_name(name: &str) -> Owner {
        if name == Self::NEUTRAL {
            Owner::Neutral
        } else {
            Owner::Player(name.to_string())
        }
    }

    /// Returns the protocol name of this owner.
    pub fn name(&self) -> &str {
        match self {
            Owner::Neutral => Self::NEUTRAL,
            Owner::Player(name) => name,
        }
    }

    /// Returns true if this owner is the player called `name`.
    pub fn is(&self, name: &str) -> bool {
        matches!(self, Owner::Player(p) if p == name)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A group of regions granting a bonus to whoever holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Continent {
    pub id: ContinentId,
    pub bonus: u32,
}

/// A single territory on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: RegionId,
    pub owner: Owner,
    pub troops: u32,
    pub continent: ContinentId,
    /// Owned region with at least one neighbor held by someone else.
    /// Recomputed at the start of every decision phase.
    pub is_empire_border: bool,
    /// Adjacent to a region of another continent. Never cleared once set.
    pub is_continent_border: bool,
}

impl Region {
    /// Creates an unclaimed, empty region on the given continent.
    pub fn new(id: RegionId, continent: ContinentId) -> Self {
        Region {
            id,
            owner: Owner::Neutral,
            troops: 0,
            continent,
            is_empire_border: false,
            is_continent_border: false,
        }
    }

    /// Returns true if the player called `name` holds this region.
    pub fn is_owned_by(&self, name: &str) -> bool {
        self.owner.is(name)
    }
}
