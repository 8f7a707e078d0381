//! Shortest path search over the road network

pub mod dijkstra;

pub use dijkstra::fastest_route;
