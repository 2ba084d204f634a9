//! Graph queries over the connection graph.
//!
//! Every query allocates its own queue and visited set; nothing is cached
//! between calls.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::board::{GameState, RegionId};

/// Returns the neighbors of `id` in setup order. Unknown regions have none.
pub fn neighbors(state: &GameState, id: RegionId) -> &[RegionId] {
    state.adjacency().neighbors(id)
}

/// Returns every region within two steps of `id`, excluding `id` itself.
pub fn second_degree_neighbors(state: &GameState, id: RegionId) -> BTreeSet<RegionId> {
    let graph = state.adjacency();
    let mut result: BTreeSet<RegionId> = graph.neighbors(id).iter().copied().collect();
    for &n in graph.neighbors(id) {
        result.extend(graph.neighbors(n).iter().copied());
    }
    result.remove(&id);
    result
}

/// Breadth-first shortest path from `start` to `end`, both endpoints
/// included.
///
/// Returns `[start]` when the endpoints coincide and an empty path when `end`
/// is unreachable. Among equally short paths the one found first while
/// walking neighbor lists in setup order wins.
pub fn shortest_path(state: &GameState, start: RegionId, end: RegionId) -> Vec<RegionId> {
    if start == end {
        return vec![start];
    }

    let graph = state.adjacency();
    let mut parent: HashMap<RegionId, RegionId> = HashMap::new();
    let mut visited: HashSet<RegionId> = HashSet::from([start]);
    let mut queue: VecDeque<RegionId> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors(current) {
            if !visited.insert(next) {
                continue;
            }
            parent.insert(next, current);
            if next == end {
                return trace_back(&parent, start, end);
            }
            queue.push_back(next);
        }
    }

    Vec::new()
}

/// Number of steps on the shortest path, or `None` if unreachable.
pub fn distance(state: &GameState, start: RegionId, end: RegionId) -> Option<usize> {
    let path = shortest_path(state, start, end);
    path.len().checked_sub(1)
}

/// Rebuilds the path ending at `end` from the parent links.
fn trace_back(
    parent: &HashMap<RegionId, RegionId>,
    start: RegionId,
    end: RegionId,
) -> Vec<RegionId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match parent.get(&current) {
            Some(&p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
