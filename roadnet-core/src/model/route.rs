use serde::Serialize;

use crate::{Road, RouteLength};

/// Ordered roads leading from a start to a finish location
///
/// An empty route means no path was found, or start and finish coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route<'a> {
    roads: Vec<&'a Road>,
    length: RouteLength,
}

impl<'a> Route<'a> {
    pub fn new(roads: Vec<&'a Road>) -> Self {
        let length = roads
            .iter()
            .map(|road| RouteLength::from(road.distance()))
            .sum();
        Self { roads, length }
    }

    pub fn roads(&self) -> &[&'a Road] {
        &self.roads
    }

    /// Total distance in kilometres
    pub fn length(&self) -> RouteLength {
        self.length
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}
