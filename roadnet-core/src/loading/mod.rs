//! This module is responsible for reading road network descriptions and
//! the configuration of an analysis run.

mod config;
mod parser;

pub use config::AnalysisConfig;
pub use parser::{NetworkInput, load_network, parse_network};
