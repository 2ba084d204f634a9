//! Game state store.
//!
//! Holds the continents, regions, and connection graph transmitted during map
//! setup, plus the ownership and troop counts refreshed by every map update.
//! Regions are kept in id order so every pass over them is deterministic.

use std::collections::{BTreeMap, BTreeSet};

use super::adjacency::Adjacency;
use super::region::{Continent, ContinentId, Owner, Region, RegionId};

/// Errors raised when the store is asked about ids it has never seen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("unknown region {0}")]
    UnknownRegion(RegionId),

    #[error("unknown continent {0}")]
    UnknownContinent(ContinentId),
}

/// The full map as known to the bot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    continents: BTreeMap<ContinentId, Continent>,
    regions: BTreeMap<RegionId, Region>,
    adjacency: Adjacency,
}

impl GameState {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a continent, replacing the bonus of an existing one.
    pub fn register_continent(&mut self, id: ContinentId, bonus: u32) {
        self.continents.insert(id, Continent { id, bonus });
    }

    /// Registers an unclaimed region on a known continent.
    pub fn register_region(
        &mut self,
        id: RegionId,
        continent: ContinentId,
    ) -> Result<(), StateError> {
        if !self.continents.contains_key(&continent) {
            return Err(StateError::UnknownContinent(continent));
        }
        self.regions
            .entry(id)
            .and_modify(|r| r.continent = continent)
            .or_insert_with(|| Region::new(id, continent));
        Ok(())
    }

    /// Connects `id` with each of `neighbors`, then flags continent borders
    /// among the touched regions.
    ///
    /// All ids are checked before anything is modified.
    pub fn register_connections(
        &mut self,
        id: RegionId,
        neighbors: &[RegionId],
    ) -> Result<(), StateError> {
        self.region(id)?;
        for &n in neighbors {
            self.region(n)?;
        }

        for &n in neighbors {
            self.adjacency.connect(id, n);
        }

        let touched: BTreeSet<RegionId> = std::iter::once(id)
            .chain(neighbors.iter().copied())
            .collect();
        for region_id in touched {
            self.flag_continent_border(region_id);
        }
        Ok(())
    }

    /// Marks `id` and any cross-continent neighbor as continent borders.
    fn flag_continent_border(&mut self, id: RegionId) {
        let (continent, already) = match self.regions.get(&id) {
            Some(r) => (r.continent, r.is_continent_border),
            None => return,
        };
        if already {
            return;
        }

        let foreign: Vec<RegionId> = self
            .adjacency
            .neighbors(id)
            .iter()
            .copied()
            .filter(|n| self.regions.get(n).is_some_and(|r| r.continent != continent))
            .collect();

        if foreign.is_empty() {
            return;
        }
        for region_id in std::iter::once(id).chain(foreign) {
            if let Some(region) = self.regions.get_mut(&region_id) {
                region.is_continent_border = true;
            }
        }
    }

    /// Overwrites the owner and troop count of a region.
    pub fn apply_ownership_update(
        &mut self,
        id: RegionId,
        owner: Owner,
        troops: u32,
    ) -> Result<(), StateError> {
        let region = self.regions.get_mut(&id).ok_or(StateError::UnknownRegion(id))?;
        region.owner = owner;
        region.troops = troops;
        Ok(())
    }

    /// Adds troops to a region ahead of the next map update.
    pub fn reinforce(&mut self, id: RegionId, troops: u32) -> Result<(), StateError> {
        let region = self.regions.get_mut(&id).ok_or(StateError::UnknownRegion(id))?;
        region.troops = region.troops.saturating_add(troops);
        Ok(())
    }

    /// Recomputes the empire-border flag of every region from the point of
    /// view of the player called `me`.
    pub fn refresh_empire_borders(&mut self, me: &str) {
        let flags: Vec<(RegionId, bool)> = self
            .regions
            .values()
            .map(|region| {
                let border = region.is_owned_by(me)
                    && self
                        .adjacency
                        .neighbors(region.id)
                        .iter()
                        .any(|n| self.regions.get(n).is_some_and(|r| !r.is_owned_by(me)));
                (region.id, border)
            })
            .collect();

        for (id, border) in flags {
            if let Some(region) = self.regions.get_mut(&id) {
                region.is_empire_border = border;
            }
        }
    }

    /// Looks up a region.
    pub fn region(&self, id: RegionId) -> Result<&Region, StateError> {
        self.regions.get(&id).ok_or(StateError::UnknownRegion(id))
    }

    /// Looks up a continent.
    pub fn continent(&self, id: ContinentId) -> Result<&Continent, StateError> {
        self.continents.get(&id).ok_or(StateError::UnknownContinent(id))
    }

    /// All registered region ids in ascending order.
    pub fn region_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.keys().copied()
    }

    /// All registered continents in ascending id order.
    pub fn continents(&self) -> impl Iterator<Item = &Continent> + '_ {
        self.continents.values()
    }

    /// Ids of the regions held by `name`, ascending.
    pub fn regions_owned_by(&self, name: &str) -> Vec<RegionId> {
        self.regions
            .values()
            .filter(|r| r.is_owned_by(name))
            .map(|r| r.id)
            .collect()
    }

    /// Number of regions registered on a continent.
    pub fn continent_size(&self, id: ContinentId) -> usize {
        self.regions.values().filter(|r| r.continent == id).count()
    }

    /// The connection graph.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }
}
