use std::cmp::Ordering;

use crate::{RoadId, RouteLength, model::LocationIndex};

/// Frontier entry: `node` reached at `cost` through `road`
///
/// The seed entry at the start location has no road.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) struct State {
    pub(super) cost: RouteLength,
    pub(super) road: Option<RoadId>,
    pub(super) node: LocationIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by (cost, road id), reversed from standard Rust BinaryHeap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.road.cmp(&self.road))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn heap_pops_lowest_cost_then_lowest_road() {
        let mut heap = BinaryHeap::new();
        heap.push(State {
            cost: 5,
            road: Some(1),
            node: 0,
        });
        heap.push(State {
            cost: 3,
            road: Some(9),
            node: 1,
        });
        heap.push(State {
            cost: 3,
            road: Some(2),
            node: 2,
        });
        heap.push(State {
            cost: 0,
            road: None,
            node: 3,
        });

        let order: Vec<LocationIndex> = std::iter::from_fn(|| heap.pop())
            .map(|state| state.node)
            .collect();
        assert_eq!(order, vec![3, 2, 1, 0]);
    }
}
