use criterion::{Criterion, black_box, criterion_group, criterion_main};
use roadnet_core::prelude::*;

/// Square grid of `side * side` locations with pseudo-random distances
fn grid_network(side: u32) -> RoadTable {
    let mut roads = Vec::new();
    let mut id = 0;
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next_distance = || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        i64::try_from(seed % 50).unwrap() + 1
    };

    for row in 0..side {
        for col in 0..side {
            let here = format!("{row}:{col}");
            if col + 1 < side {
                let east = format!("{row}:{}", col + 1);
                roads.push(Road::new(id, &here, east, next_distance()).unwrap());
                id += 1;
            }
            if row + 1 < side {
                let south = format!("{}:{col}", row + 1);
                roads.push(Road::new(id, &here, south, next_distance()).unwrap());
                id += 1;
            }
        }
    }
    RoadTable::from_roads(roads).unwrap()
}

fn bench_routing(c: &mut Criterion) {
    let roads = grid_network(100);
    let graph = roads.graph();
    let finish = "99:99";

    c.bench_function("fastest_route_grid_100", |b| {
        b.iter(|| {
            fastest_route(&graph, &roads, black_box("0:0"), black_box(finish)).unwrap()
        });
    });

    c.bench_function("barely_connected_map_grid_100", |b| {
        b.iter(|| barely_connected_map(black_box(&graph), &roads).unwrap());
    });

    c.bench_function("map_analysis_grid_100", |b| {
        b.iter(|| MapAnalysis::run(&roads, black_box("0:0"), black_box(finish)).unwrap());
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
