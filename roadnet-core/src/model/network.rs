//! Bidirectional adjacency structure over roads

use hashbrown::HashMap;

use crate::{Distance, Road, RoadId};

/// Dense index of an interned location
pub type LocationIndex = usize;

/// Directional view of a road, leaving `source` towards `target`
///
/// Carries only the road id; the full [`Road`] lives in the road table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfEdge {
    pub source: LocationIndex,
    pub target: LocationIndex,
    pub distance: Distance,
    pub road: RoadId,
}

/// Road network graph
///
/// Every road is stored as two half-edges, one per direction. Neighbor
/// lists keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    names: Vec<String>,
    index: HashMap<String, LocationIndex>,
    adjacency: Vec<Vec<HalfEdge>>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_roads<'a>(roads: impl IntoIterator<Item = &'a Road>) -> Self {
        let mut graph = Self::new();
        for road in roads {
            graph.add_road(road);
        }
        graph
    }

    /// Inserts the forward and the reverse half-edge of `road`.
    ///
    /// Parallel roads and self-loops are accepted as-is.
    pub fn add_road(&mut self, road: &Road) {
        let entry = self.intern(road.entry());
        let exit = self.intern(road.exit());

        self.adjacency[entry].push(HalfEdge {
            source: entry,
            target: exit,
            distance: road.distance(),
            road: road.id(),
        });
        self.adjacency[exit].push(HalfEdge {
            source: exit,
            target: entry,
            distance: road.distance(),
            road: road.id(),
        });
    }

    fn intern(&mut self, name: &str) -> LocationIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Half-edges leaving `location`, empty for unknown locations
    pub fn neighbors(&self, location: &str) -> &[HalfEdge] {
        self.location_index(location)
            .map(|idx| self.edges_from(idx))
            .unwrap_or(&[])
    }

    pub fn edges_from(&self, idx: LocationIndex) -> &[HalfEdge] {
        self.adjacency.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn location_index(&self, location: &str) -> Option<LocationIndex> {
        self.index.get(location).copied()
    }

    /// # Panics
    ///
    /// Panics if `idx` was not produced by this graph.
    pub fn location_name(&self, idx: LocationIndex) -> &str {
        &self.names[idx]
    }

    /// All distinct locations, in order of first appearance
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
