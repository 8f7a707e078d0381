//! Data model for road network analysis
//!
//! Roads are stored once in a [`RoadTable`]; the [`NetworkGraph`] only keeps
//! lightweight directional views of them.

pub mod network;
pub mod road;
pub mod route;

pub use network::{HalfEdge, LocationIndex, NetworkGraph};
pub use road::{Road, RoadTable};
pub use route::Route;
