//! Army placement.
//!
//! Walks the bot's border regions in id order and spends the army budget
//! greedily: first on regions the opponent could take, otherwise on making a
//! region strong enough to take its weakest enemy neighbors next turn.

use tracing::debug;

use super::Deadline;
use crate::board::{GameState, PlaceArmies, Region};
use crate::combat::{troops_needed_to_defend, troops_needed_to_overcome};
use crate::pathfind::neighbors;

/// Result of the placement phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// One order per reinforced region, in region id order.
    pub orders: Vec<PlaceArmies>,
    /// Budget left unspent.
    pub unplaced: u32,
}

impl Placement {
    /// Total armies placed.
    pub fn placed(&self) -> u32 {
        self.orders.iter().map(|o| o.troops).sum()
    }
}

/// Distributes up to `budget` new armies over the regions held by `me`.
///
/// Refreshes the empire-border flags as a side effect; troop counts are left
/// untouched. The sum of placed armies never exceeds `budget`.
pub fn place_armies(
    state: &mut GameState,
    me: &str,
    opponent: &str,
    budget: u32,
    deadline: &Deadline,
) -> Placement {
    state.refresh_empire_borders(me);

    let mut remaining = budget;
    let mut orders = Vec::new();
    for id in state.regions_owned_by(me) {
        if remaining == 0 {
            break;
        }
        let Ok(region) = state.region(id) else {
            continue;
        };
        if !region.is_empire_border {
            continue;
        }

        let placed = reinforce(state, region, opponent, &mut remaining);
        if placed > 0 {
            orders.push(PlaceArmies {
                player: me.to_string(),
                region: id,
                troops: placed,
            });
        }
        // Checked last so at least one border region is always handled.
        if deadline.expired() {
            debug!(region = id, remaining, "placement deadline reached");
            break;
        }
    }

    Placement {
        orders,
        unplaced: remaining,
    }
}

/// Decides how many armies `region` gets, deducting them from `remaining`.
fn reinforce(state: &GameState, region: &Region, opponent: &str, remaining: &mut u32) -> u32 {
    let mut enemy_troops: Vec<u32> = neighbors(state, region.id)
        .iter()
        .filter_map(|&n| state.region(n).ok())
        .filter(|n| n.is_owned_by(opponent))
        .map(|n| n.troops)
        .collect();
    enemy_troops.sort_unstable();
    let total_enemy = enemy_troops.iter().fold(0u32, |acc, &t| acc.saturating_add(t));

    if total_enemy >= troops_needed_to_overcome(region.troops) {
        let deficit = troops_needed_to_defend(total_enemy).saturating_sub(region.troops);
        if deficit <= *remaining {
            *remaining -= deficit;
            return deficit;
        }
        // No fallback yet: a region we cannot afford to hold gets nothing.
        debug!(region = region.id, deficit, remaining = *remaining, "region cannot be held");
        return 0;
    }

    let mut placed = 0;
    for troops in enemy_troops {
        let current = region.troops.saturating_add(placed);
        let deficit = troops_needed_to_overcome(troops).saturating_sub(current);
        if deficit > 0 && deficit <= *remaining {
            placed += deficit;
            *remaining -= deficit;
        }
    }
    placed
}
