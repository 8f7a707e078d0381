//! Barely connected map: the fewest roads that keep every location reachable.
//!
//! The map grows greedily from the lexicographically smallest location,
//! always taking the shortest road (lowest id on ties) that reaches a new
//! location. Roads whose both ends are already connected are skipped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use log::{debug, trace, warn};

use crate::model::HalfEdge;
use crate::{Error, NetworkGraph, Road, RoadTable};

/// Frontier candidate, min-ordered by (distance, road id)
#[derive(Copy, Clone, Eq, PartialEq)]
struct Candidate(HalfEdge);

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        let key = |edge: &HalfEdge| (edge.distance, edge.road, edge.source, edge.target);
        key(&other.0).cmp(&key(&self.0))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the barely connected map of `graph`.
///
/// Roads are returned in the order they were accepted. For a connected
/// network the result holds `locations - 1` roads; otherwise it only spans
/// the component containing the seed location.
///
/// # Errors
///
/// Returns [`Error::UnknownRoad`] if the graph references a road missing
/// from `roads`.
pub fn barely_connected_map<'a>(
    graph: &NetworkGraph,
    roads: &'a RoadTable,
) -> Result<Vec<&'a Road>, Error> {
    let Some(seed) = graph
        .locations()
        .min()
        .and_then(|name| graph.location_index(name))
    else {
        return Ok(Vec::new());
    };

    let required = graph.location_count() - 1;
    let mut accepted = Vec::with_capacity(required);
    let mut visited = FixedBitSet::with_capacity(graph.location_count());
    let mut frontier: BinaryHeap<Candidate> = graph
        .edges_from(seed)
        .iter()
        .copied()
        .map(Candidate)
        .collect();
    visited.insert(seed);

    while accepted.len() < required {
        let Some(Candidate(edge)) = frontier.pop() else {
            break;
        };

        if visited.contains(edge.source) && visited.contains(edge.target) {
            trace!("Skipping road {}: would close a cycle", edge.road);
            continue;
        }

        let reached = if visited.contains(edge.source) {
            edge.target
        } else {
            edge.source
        };
        accepted.push(roads.resolve(edge.road)?);
        visited.insert(reached);

        frontier.extend(
            graph
                .edges_from(reached)
                .iter()
                .filter(|next| !visited.contains(next.target))
                .copied()
                .map(Candidate),
        );
    }

    if accepted.len() < required {
        warn!(
            "Network is disconnected: barely connected map from {} reaches {} of {} locations",
            graph.location_name(seed),
            accepted.len() + 1,
            graph.location_count()
        );
    }
    debug!(
        "Barely connected map seeded at {} keeps {} roads",
        graph.location_name(seed),
        accepted.len()
    );

    Ok(accepted)
}
