use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use log::{debug, trace};

use super::state::State;
use crate::model::{HalfEdge, LocationIndex};
use crate::{Error, NetworkGraph, RoadTable, Route, RouteLength};

/// Dijkstra's algorithm for the fastest route between two locations.
///
/// The frontier is ordered by accumulated distance and then by road id, so
/// among several equally short routes the same one is returned on every run.
/// Superseded frontier entries are skipped when popped instead of being
/// decreased in place.
///
/// Returns an empty route when `finish` cannot be reached, when either
/// location is not part of the graph, or when `start == finish`.
///
/// # Errors
///
/// Returns [`Error::UnknownRoad`] if the graph references a road missing
/// from `roads`.
pub fn fastest_route<'a>(
    graph: &NetworkGraph,
    roads: &'a RoadTable,
    start: &str,
    finish: &str,
) -> Result<Route<'a>, Error> {
    let (Some(source), Some(target)) = (graph.location_index(start), graph.location_index(finish))
    else {
        debug!("No route from {start} to {finish}: location not in network");
        return Ok(Route::default());
    };

    let node_count = graph.location_count();
    let mut distances = vec![RouteLength::MAX; node_count];
    let mut predecessors: Vec<Option<HalfEdge>> = vec![None; node_count];
    let mut finalized = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    distances[source] = 0;
    heap.push(State {
        cost: 0,
        road: None,
        node: source,
    });

    while let Some(State { cost, node, .. }) = heap.pop() {
        if finalized.contains(node) {
            continue;
        }
        finalized.insert(node);

        if node == target {
            let route = build_route(graph, roads, &predecessors, source, target)?;
            debug!(
                "Fastest route from {start} to {finish}: {} roads, {} km",
                route.len(),
                route.length()
            );
            return Ok(route);
        }

        for edge in graph.edges_from(node) {
            let next_cost = cost + RouteLength::from(edge.distance);

            if next_cost < distances[edge.target] {
                trace!(
                    "Relaxing {} via road {} to {next_cost}",
                    graph.location_name(edge.target),
                    edge.road
                );
                distances[edge.target] = next_cost;
                heap.push(State {
                    cost: next_cost,
                    road: Some(edge.road),
                    node: edge.target,
                });
                predecessors[edge.target] = Some(*edge);
            }
        }
    }

    debug!("No route from {start} to {finish}: finish is unreachable");
    Ok(Route::default())
}

/// Follows predecessor half-edges from `target` back to `source`
fn build_route<'a>(
    graph: &NetworkGraph,
    roads: &'a RoadTable,
    predecessors: &[Option<HalfEdge>],
    source: LocationIndex,
    target: LocationIndex,
) -> Result<Route<'a>, Error> {
    let mut path = Vec::new();
    let mut current = target;

    while current != source {
        let edge = predecessors[current].ok_or_else(|| {
            Error::InvalidData(format!(
                "No predecessor recorded for {}",
                graph.location_name(current)
            ))
        })?;
        path.push(roads.resolve(edge.road)?);
        current = edge.source;
    }

    path.reverse();
    Ok(Route::new(path))
}
