// Re-export key components
pub use crate::algo::barely_connected::barely_connected_map;
pub use crate::analysis::{MapAnalysis, ReportFormat};
pub use crate::loading::{AnalysisConfig, NetworkInput, load_network, parse_network};
pub use crate::model::{HalfEdge, NetworkGraph, Road, RoadTable, Route};
pub use crate::routing::fastest_route;

// Core scalar types
pub use crate::Distance; // kilometres
pub use crate::Error;
pub use crate::RoadId;
pub use crate::RouteLength;
