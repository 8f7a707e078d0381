//! Roads and the canonical road table

use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use serde::Serialize;

use crate::{Distance, Error, NetworkGraph, RoadId, RouteLength};

/// A physical, bidirectional road between two locations
///
/// `entry` and `exit` keep the orientation the road was declared with,
/// traversal ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Road {
    id: RoadId,
    entry: String,
    exit: String,
    distance: Distance,
}

impl Road {
    /// Creates a road, rejecting distances that are negative or do not fit
    /// into [`Distance`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeDistance`] for a negative distance and
    /// [`Error::InvalidData`] for a distance that is too large.
    pub fn new(
        id: RoadId,
        entry: impl Into<String>,
        exit: impl Into<String>,
        distance: i64,
    ) -> Result<Self, Error> {
        if distance < 0 {
            return Err(Error::NegativeDistance { id, distance });
        }
        let distance = Distance::try_from(distance).map_err(|_| {
            Error::InvalidData(format!("Road {id} distance {distance} is out of range"))
        })?;

        Ok(Self {
            id,
            entry: entry.into(),
            exit: exit.into(),
            distance,
        })
    }

    pub fn id(&self) -> RoadId {
        self.id
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn exit(&self) -> &str {
        &self.exit
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Key used by every ordering over roads: shorter first, lower id on ties
    pub fn sort_key(&self) -> (Distance, RoadId) {
        (self.distance, self.id)
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.entry, self.exit, self.distance, self.id
        )
    }
}

/// Parses the `entry<TAB>exit<TAB>distance<TAB>id` rendering produced by
/// [`Display`](fmt::Display).
impl FromStr for Road {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('\t').map(str::trim).collect();
        let [entry, exit, distance, id] = fields.as_slice() else {
            return Err(Error::InvalidData(format!(
                "Expected 4 tab-separated fields, found {}",
                fields.len()
            )));
        };

        let distance = distance.parse::<i64>().map_err(|e| {
            Error::InvalidData(format!("Invalid distance '{distance}': {e}"))
        })?;
        let id = id
            .parse::<RoadId>()
            .map_err(|e| Error::InvalidData(format!("Invalid road id '{id}': {e}")))?;

        Road::new(id, *entry, *exit, distance)
    }
}

/// Canonical storage of all roads, keyed by id
///
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct RoadTable {
    roads: Vec<Road>,
    index: HashMap<RoadId, usize>,
}

impl RoadTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from roads, failing on the first repeated id.
    pub fn from_roads(roads: impl IntoIterator<Item = Road>) -> Result<Self, Error> {
        let mut table = Self::new();
        for road in roads {
            table.insert(road)?;
        }
        Ok(table)
    }

    /// # Errors
    ///
    /// Returns [`Error::DuplicateRoad`] if a road with the same id is already stored.
    pub fn insert(&mut self, road: Road) -> Result<(), Error> {
        if self.index.contains_key(&road.id) {
            return Err(Error::DuplicateRoad(road.id));
        }
        self.index.insert(road.id, self.roads.len());
        self.roads.push(road);
        Ok(())
    }

    pub fn get(&self, id: RoadId) -> Option<&Road> {
        self.index.get(&id).map(|&idx| &self.roads[idx])
    }

    pub(crate) fn resolve(&self, id: RoadId) -> Result<&Road, Error> {
        self.get(id).ok_or(Error::UnknownRoad(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Road> {
        self.roads.iter()
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Sum of all road distances, every physical road counted once
    pub fn total_distance(&self) -> RouteLength {
        self.roads
            .iter()
            .map(|road| RouteLength::from(road.distance))
            .sum()
    }

    /// Builds the bidirectional graph over every stored road
    pub fn graph(&self) -> NetworkGraph {
        NetworkGraph::from_roads(&self.roads)
    }
}

impl<'a> IntoIterator for &'a RoadTable {
    type Item = &'a Road;
    type IntoIter = std::slice::Iter<'a, Road>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_distance_is_rejected() {
        let err = Road::new(7, "A", "B", -3).unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeDistance {
                id: 7,
                distance: -3
            }
        ));
    }

    #[test]
    fn oversized_distance_is_rejected() {
        let err = Road::new(1, "A", "B", i64::from(u32::MAX) + 1).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn rendered_road_parses_back() {
        let road = Road::new(42, "Ankara", "Konya", 260).unwrap();
        let rendered = road.to_string();
        assert_eq!(rendered, "Ankara\tKonya\t260\t42");
        assert_eq!(rendered.parse::<Road>().unwrap(), road);
    }

    #[test]
    fn parsing_requires_four_fields() {
        assert!(matches!("A\tB\t3".parse::<Road>(), Err(Error::InvalidData(_))));
        assert!(matches!(
            "A\tB\t-3\t1".parse::<Road>(),
            Err(Error::NegativeDistance { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut table = RoadTable::new();
        table.insert(Road::new(1, "A", "B", 4).unwrap()).unwrap();
        let err = table.insert(Road::new(1, "B", "C", 2).unwrap()).unwrap_err();
        assert!(matches!(err, Error::DuplicateRoad(1)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn total_distance_counts_each_road_once() {
        let table = RoadTable::from_roads([
            Road::new(1, "A", "B", 4).unwrap(),
            Road::new(2, "B", "C", 3).unwrap(),
        ])
        .unwrap();
        assert_eq!(table.total_distance(), 7);
        assert_eq!(table.graph().half_edge_count(), 4);
    }
}
