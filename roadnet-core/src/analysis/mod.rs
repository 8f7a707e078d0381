//! Comparison of the original network with its barely connected map

mod report;

use itertools::Itertools;
use log::info;
use serde::Serialize;

pub use report::ReportFormat;

use crate::{
    Error, NetworkGraph, Road, RoadTable, Route, RouteLength, barely_connected_map, fastest_route,
};

/// Results of analysing one network for a start/finish pair
#[derive(Debug, Clone, Serialize)]
pub struct MapAnalysis<'a> {
    pub start: String,
    pub finish: String,
    /// Fastest route over the full network
    pub fastest_route: Route<'a>,
    /// Roads of the barely connected map, sorted by distance then id
    pub barely_connected_map: Vec<&'a Road>,
    /// Fastest route using only barely connected map roads
    pub barely_connected_route: Route<'a>,
    pub original_map_length: RouteLength,
    pub barely_connected_map_length: RouteLength,
    /// `barely_connected_map_length / original_map_length`, `None` for an empty network
    pub material_ratio: Option<f64>,
    /// Barely connected route length over the original route length,
    /// `None` when the original route has length zero
    pub route_ratio: Option<f64>,
}

impl<'a> MapAnalysis<'a> {
    /// Runs the whole pipeline: fastest route, barely connected map, and the
    /// fastest route again restricted to that map.
    ///
    /// # Errors
    ///
    /// Only fails if a graph built from `roads` references an unknown road,
    /// which indicates a corrupted table.
    pub fn run(roads: &'a RoadTable, start: &str, finish: &str) -> Result<Self, Error> {
        info!(
            "Analysing {} roads for route {start} -> {finish}",
            roads.len()
        );
        let graph = roads.graph();

        let full_route = fastest_route(&graph, roads, start, finish)?;
        info!(
            "Fastest route: {} roads, {} km",
            full_route.len(),
            full_route.length()
        );

        let reduced_roads: Vec<&Road> = barely_connected_map(&graph, roads)?
            .into_iter()
            .sorted_by_key(|road| road.sort_key())
            .collect();
        info!(
            "Barely connected map keeps {} of {} roads",
            reduced_roads.len(),
            roads.len()
        );

        let reduced_graph = NetworkGraph::from_roads(reduced_roads.iter().copied());
        let reduced_route = fastest_route(&reduced_graph, roads, start, finish)?;
        info!(
            "Fastest route on barely connected map: {} roads, {} km",
            reduced_route.len(),
            reduced_route.length()
        );

        let original_map_length = roads.total_distance();
        let barely_connected_map_length: RouteLength = reduced_roads
            .iter()
            .map(|road| RouteLength::from(road.distance()))
            .sum();

        Ok(Self {
            start: start.to_owned(),
            finish: finish.to_owned(),
            material_ratio: ratio(barely_connected_map_length, original_map_length),
            route_ratio: ratio(reduced_route.length(), full_route.length()),
            fastest_route: full_route,
            barely_connected_map: reduced_roads,
            barely_connected_route: reduced_route,
            original_map_length,
            barely_connected_map_length,
        })
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: RouteLength, denominator: RouteLength) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}
