//! Starting-region selection.
//!
//! Continents are ranked by how much of them can be picked, then by bonus,
//! and candidates are taken continent by continent in that order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use super::Deadline;
use crate::board::{ContinentId, GameState, RegionId, StateError};

/// The game server accepts at most this many starting preferences.
pub const MAX_STARTING_PICKS: usize = 6;

/// Share of a continent's regions that are up for picking.
#[derive(Debug, Clone, Copy)]
struct Share {
    pickable: u64,
    total: u64,
}

impl Share {
    /// Compares two shares as fractions without going through floats.
    /// An empty continent counts as zero.
    fn cmp_fraction(&self, other: &Share) -> Ordering {
        let lhs = if self.total == 0 { 0 } else { self.pickable * other.total.max(1) };
        let rhs = if other.total == 0 { 0 } else { other.pickable * self.total.max(1) };
        lhs.cmp(&rhs)
    }
}

/// Orders the candidate regions by preference, at most `MAX_STARTING_PICKS`.
///
/// Fails with `UnknownRegion` if any candidate was never registered.
/// Duplicate candidates are returned once.
pub fn select_starting_regions(
    state: &GameState,
    candidates: &[RegionId],
    deadline: &Deadline,
) -> Result<Vec<RegionId>, StateError> {
    let mut seen = HashSet::new();
    let mut by_continent: BTreeMap<ContinentId, Vec<RegionId>> = BTreeMap::new();
    for &id in candidates {
        let region = state.region(id)?;
        if seen.insert(id) {
            by_continent.entry(region.continent).or_default().push(id);
        }
    }

    let mut ranked: Vec<(ContinentId, u32, Share)> = state
        .continents()
        .map(|c| {
            let share = Share {
                pickable: by_continent.get(&c.id).map_or(0, Vec::len) as u64,
                total: state.continent_size(c.id) as u64,
            };
            (c.id, c.bonus, share)
        })
        .collect();
    // Stable: equal keys stay in ascending continent order.
    ranked.sort_by(|a, b| b.2.cmp_fraction(&a.2).then(b.1.cmp(&a.1)));

    let mut picks = Vec::with_capacity(MAX_STARTING_PICKS);
    for (continent, _, share) in ranked {
        let Some(regions) = by_continent.get(&continent) else {
            continue;
        };
        debug!(continent, pickable = share.pickable, total = share.total, "picking from continent");
        picks.extend(regions.iter().copied());
        if picks.len() >= MAX_STARTING_PICKS || deadline.expired() {
            break;
        }
    }
    picks.truncate(MAX_STARTING_PICKS);
    Ok(picks)
}
