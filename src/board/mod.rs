//! Map representation and game-state types.
//!
//! Contains continents, regions, the connection graph between them, and the
//! orders the bot can issue.

pub mod adjacency;
pub mod order;
pub mod region;
pub mod state;

#[cfg(test)]
pub(crate) mod fixtures;

pub use adjacency::Adjacency;
pub use order::{AttackTransfer, PlaceArmies};
pub use region::{Continent, ContinentId, Owner, Region, RegionId};
pub use state::{GameState, StateError};
