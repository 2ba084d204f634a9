//! Attack and transfer planning.
//!
//! Every owned region with spare armies attacks its neighbors in priority
//! order: opponent regions first, then unclaimed regions on its own
//! continent, then unclaimed regions elsewhere. Interior regions afterwards
//! push their armies out to the empire border.
//!
//! Troop counts are simulated in a local table; the game state only changes
//! when the next map update arrives.

use std::collections::BTreeMap;

use tracing::debug;

use super::Deadline;
use crate::board::{AttackTransfer, GameState, Region, RegionId};
use crate::combat::troops_needed_to_overcome;
use crate::pathfind::neighbors;

/// Plans this turn's attacks and transfers for the player called `me`.
///
/// Refreshes the empire-border flags as a side effect.
pub fn attack_transfer(
    state: &mut GameState,
    me: &str,
    opponent: &str,
    deadline: &Deadline,
) -> Vec<AttackTransfer> {
    state.refresh_empire_borders(me);
    let state: &GameState = state;

    let owned = state.regions_owned_by(me);
    let mut available: BTreeMap<RegionId, u32> = owned
        .iter()
        .filter_map(|&id| state.region(id).ok().map(|r| (id, r.troops)))
        .collect();
    let mut orders = Vec::new();

    for &id in &owned {
        let (Ok(region), Some(troops)) = (state.region(id), available.get_mut(&id)) else {
            continue;
        };
        if *troops < 2 {
            continue;
        }

        for target in targets(state, region, me, opponent) {
            if *troops < 2 {
                break;
            }
            // A move of zero armies is not a legal order.
            let needed = troops_needed_to_overcome(target.troops).max(1);
            if *troops > needed {
                debug!(from = id, to = target.id, needed, "attack");
                orders.push(AttackTransfer {
                    player: me.to_string(),
                    from: id,
                    to: target.id,
                    troops: needed,
                });
                *troops -= needed;
            }
        }
        if deadline.expired() {
            debug!(region = id, "attack deadline reached");
            return orders;
        }
    }

    for &id in &owned {
        let (Ok(region), Some(troops)) = (state.region(id), available.get_mut(&id)) else {
            continue;
        };
        if region.is_empire_border || *troops < 2 {
            continue;
        }

        let border = neighbors(state, id)
            .iter()
            .copied()
            .find(|&n| state.region(n).is_ok_and(|r| r.is_owned_by(me) && r.is_empire_border));
        if let Some(to) = border {
            orders.push(AttackTransfer {
                player: me.to_string(),
                from: id,
                to,
                troops: *troops - 1,
            });
            *troops = 1;
        }
        if deadline.expired() {
            debug!(region = id, "transfer deadline reached");
            break;
        }
    }

    orders
}

/// Neighbors of `region` not held by `me`, in attack priority order.
fn targets<'a>(state: &'a GameState, region: &Region, me: &str, opponent: &str) -> Vec<&'a Region> {
    let (enemies, unclaimed): (Vec<&Region>, Vec<&Region>) = neighbors(state, region.id)
        .iter()
        .filter_map(|&n| state.region(n).ok())
        .filter(|n| !n.is_owned_by(me))
        .partition(|n| n.is_owned_by(opponent));
    let (same_continent, elsewhere): (Vec<&Region>, Vec<&Region>) = unclaimed
        .into_iter()
        .partition(|n| n.continent == region.continent);

    enemies
        .into_iter()
        .chain(same_continent)
        .chain(elsewhere)
        .collect()
}
