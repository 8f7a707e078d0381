//! Road network analysis: fastest routes, barely connected maps and
//! the comparison between the two.

pub mod algo;
pub mod analysis;
mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Unique identifier of a physical road
pub type RoadId = u32;
/// Road length in kilometres
pub type Distance = u32;
/// Accumulated length of several roads
pub type RouteLength = u64;

pub use algo::barely_connected::barely_connected_map;
pub use analysis::{MapAnalysis, ReportFormat};
pub use loading::{AnalysisConfig, NetworkInput, load_network, parse_network};
pub use model::{NetworkGraph, Road, RoadTable, Route};
pub use routing::fastest_route;
