//! Turn decisions.
//!
//! Each of the three decision phases reads the game state and returns the
//! orders to send. All of them honor a soft `Deadline`: once it passes they
//! stop considering further regions and return what they have.

pub mod attack;
pub mod pick;
pub mod place;

use std::time::{Duration, Instant};

pub use attack::attack_transfer;
pub use pick::{select_starting_regions, MAX_STARTING_PICKS};
pub use place::{place_armies, Placement};

/// A wall-clock limit for one decision phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Deadline {
            at: Instant::now().checked_add(budget),
        }
    }

    /// A deadline that never passes.
    pub fn never() -> Self {
        Deadline { at: None }
    }

    /// Returns true once the deadline has passed.
    pub fn expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }
}
