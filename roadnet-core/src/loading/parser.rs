use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use serde::Deserialize;

use crate::{Error, Road, RoadId, RoadTable};

/// A parsed network description: the requested route and every road
#[derive(Debug, Clone)]
pub struct NetworkInput {
    pub start: String,
    pub finish: String,
    pub roads: RoadTable,
}

/// Road record as written in the input, before validation
#[derive(Debug, Deserialize)]
struct RawRoad {
    entry: String,
    exit: String,
    distance: i64,
    id: i64,
}

/// Reads a network description from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its content is malformed.
pub fn load_network(path: &Path) -> Result<NetworkInput, Error> {
    info!("Loading road network from {}", path.display());
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    parse_network(file)
}

/// Parses a tab-separated network description.
///
/// The first record holds the start and finish locations, every following
/// record a road as `entry, exit, distance, id`. Blank lines are ignored and
/// fields are trimmed.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] for missing or non-numeric fields,
/// [`Error::NegativeDistance`] for negative distances and
/// [`Error::DuplicateRoad`] for repeated ids.
pub fn parse_network<R: Read>(reader: R) -> Result<NetworkInput, Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = reader
        .records()
        .filter(|record| record.as_ref().map_or(true, |r| !is_blank(r)));

    let header = records
        .next()
        .ok_or_else(|| Error::InvalidData("Input is empty, expected start and finish".into()))??;
    let (start, finish) = match (header.get(0), header.get(1)) {
        (Some(start), Some(finish)) if !start.is_empty() && !finish.is_empty() => {
            (start.to_owned(), finish.to_owned())
        }
        _ => {
            return Err(Error::InvalidData(format!(
                "line {}: expected start and finish locations",
                line_of(&header)
            )));
        }
    };

    let mut roads = RoadTable::new();
    for record in records {
        let record = record?;
        let line = line_of(&record);
        let raw: RawRoad = record
            .deserialize(None)
            .map_err(|e| Error::InvalidData(format!("line {line}: {e}")))?;
        let id = RoadId::try_from(raw.id)
            .map_err(|_| Error::InvalidData(format!("line {line}: invalid road id {}", raw.id)))?;

        roads.insert(Road::new(id, raw.entry, raw.exit, raw.distance)?)?;
    }

    debug!("Parsed {} roads, route {start} -> {finish}", roads.len());
    Ok(NetworkInput {
        start,
        finish,
        roads,
    })
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}
