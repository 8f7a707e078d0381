use thiserror::Error;

use crate::RoadId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Road {id} has negative distance {distance}")]
    NegativeDistance { id: RoadId, distance: i64 },
    #[error("Road id {0} appears more than once")]
    DuplicateRoad(RoadId),
    #[error("Road id {0} is not present in the road table")]
    UnknownRoad(RoadId),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
