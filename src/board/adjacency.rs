//! Connection graph between regions.
//!
//! Every edge is stored in both directions. Neighbor lists keep insertion
//! order, which the path search relies on for its tie-break.

use std::collections::HashMap;

use super::region::RegionId;

/// Undirected adjacency lists keyed by region id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    edges: HashMap<RegionId, Vec<RegionId>>,
}

impl Adjacency {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the undirected edge `a - b`.
    ///
    /// Returns false if the edge was already present or is a self-loop, in
    /// which case the graph is unchanged.
    pub fn connect(&mut self, a: RegionId, b: RegionId) -> bool {
        if a == b || self.is_adjacent(a, b) {
            return false;
        }
        self.edges.entry(a).or_default().push(b);
        self.edges.entry(b).or_default().push(a);
        true
    }

    /// Returns the neighbors of `id` in insertion order, or an empty slice
    /// if the region has no connections.
    pub fn neighbors(&self, id: RegionId) -> &[RegionId] {
        self.edges.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `a` and `b` share an edge.
    pub fn is_adjacent(&self, a: RegionId, b: RegionId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum::<usize>() / 2
    }
}
