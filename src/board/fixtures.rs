//! Maps shared by unit tests.

use super::region::{Owner, RegionId};
use super::state::GameState;

/// Two continents, five regions: `1-[2,3,4]`, `2-[3]`, `4-[5]`.
pub(crate) fn small_map() -> GameState {
    let mut state = GameState::new();
    state.register_continent(1, 2);
    state.register_continent(2, 5);
    for (id, continent) in [(1, 1), (2, 1), (3, 2), (4, 2), (5, 2)] {
        state.register_region(id, continent).unwrap();
    }
    state.register_connections(1, &[2, 3, 4]).unwrap();
    state.register_connections(2, &[3]).unwrap();
    state.register_connections(4, &[5]).unwrap();
    state
}

/// Continent bonuses of the 42-region world map.
pub(crate) const WORLD_CONTINENTS: [(u32, u32); 6] =
    [(1, 5), (2, 2), (3, 5), (4, 3), (5, 7), (6, 2)];

/// Neighbor lists of the 42-region world map, in setup order.
pub(crate) const WORLD_NEIGHBORS: [(RegionId, &[RegionId]); 38] = [
    (1, &[2, 4, 30]),
    (2, &[4, 3, 5]),
    (3, &[5, 6, 14]),
    (4, &[5, 7]),
    (5, &[6, 7, 8]),
    (6, &[8]),
    (7, &[8, 9]),
    (8, &[9]),
    (9, &[10]),
    (10, &[11, 12]),
    (11, &[12, 13]),
    (12, &[13, 21]),
    (14, &[15, 16]),
    (15, &[16, 18, 19]),
    (16, &[17]),
    (17, &[19, 20, 27, 32, 36]),
    (18, &[19, 20, 21]),
    (19, &[20]),
    (20, &[21, 22, 36]),
    (21, &[22, 23, 24]),
    (22, &[23, 36]),
    (23, &[24, 25, 26, 36]),
    (24, &[25]),
    (25, &[26]),
    (27, &[28, 32, 33]),
    (28, &[29, 31, 33, 34]),
    (29, &[30, 31]),
    (30, &[31, 34, 35]),
    (31, &[34]),
    (32, &[33, 36, 37]),
    (33, &[34, 37, 38]),
    (34, &[35]),
    (36, &[37]),
    (37, &[38]),
    (38, &[39]),
    (39, &[40, 41]),
    (40, &[41, 42]),
    (41, &[42]),
];

/// Continent of a world-map region.
pub(crate) fn world_continent_of(id: RegionId) -> u32 {
    match id {
        1..=9 => 1,
        10..=13 => 2,
        14..=20 => 3,
        21..=26 => 4,
        27..=38 => 5,
        _ => 6,
    }
}

/// The 42-region world map with every region unclaimed.
pub(crate) fn world_map() -> GameState {
    let mut state = GameState::new();
    for (id, bonus) in WORLD_CONTINENTS {
        state.register_continent(id, bonus);
    }
    for id in 1..=42 {
        state.register_region(id, world_continent_of(id)).unwrap();
    }
    for (id, neighbors) in WORLD_NEIGHBORS {
        state.register_connections(id, neighbors).unwrap();
    }
    state
}

/// Sets owner and troops of several regions at once.
pub(crate) fn occupy(state: &mut GameState, owner: &str, regions: &[(RegionId, u32)]) {
    for &(id, troops) in regions {
        state.apply_ownership_update(id, Owner::from_name(owner), troops).unwrap();
    }
}
