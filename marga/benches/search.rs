//! Benchmark search throughput for both drivers.

use std::collections::HashSet;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use futures::executor::block_on;
use marga::{AStar, SearchSpace, TieBreak};
use rand::prelude::*;

/// Open grid with random walls, 8-connected, octile heuristic.
struct BenchGrid {
    size: i32,
    walls: HashSet<(i32, i32)>,
    goal: (i32, i32),
}

impl BenchGrid {
    fn random(size: i32, wall_prob: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let goal = (size - 1, size - 1);
        let walls = (0..size)
            .flat_map(|x| (0..size).map(move |y| (x, y)))
            .filter(|&c| c != (0, 0) && c != goal)
            .filter(|_| rng.gen_bool(wall_prob))
            .collect();
        Self { size, walls, goal }
    }
}

impl SearchSpace for BenchGrid {
    type State = (i32, i32);
    type Key = (i32, i32);

    fn key(&self, state: &(i32, i32)) -> (i32, i32) {
        *state
    }

    fn is_end(&self, state: &(i32, i32)) -> bool {
        *state == self.goal
    }

    fn neighbors(&self, &(x, y): &(i32, i32)) -> Vec<(i32, i32)> {
        let mut out = Vec::with_capacity(8);
        for dx in -1..=1 {
            for dy in -1..=1 {
                let n = (x + dx, y + dy);
                if (dx, dy) != (0, 0)
                    && n.0 >= 0
                    && n.1 >= 0
                    && n.0 < self.size
                    && n.1 < self.size
                    && !self.walls.contains(&n)
                {
                    out.push(n);
                }
            }
        }
        out
    }

    fn distance(&self, a: &(i32, i32), b: &(i32, i32)) -> f64 {
        if a.0 != b.0 && a.1 != b.1 {
            std::f64::consts::SQRT_2
        } else {
            1.0
        }
    }

    fn heuristic(&self, &(x, y): &(i32, i32)) -> f64 {
        let dx = f64::from((self.goal.0 - x).abs());
        let dy = f64::from((self.goal.1 - y).abs());
        let (min, max) = (dx.min(dy), dx.max(dy));
        min * std::f64::consts::SQRT_2 + (max - min)
    }
}

fn bench_blocking(c: &mut Criterion) {
    let mut group = c.benchmark_group("blocking");
    for size in [32, 64, 128] {
        let grid = BenchGrid::random(size, 0.25, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| AStar::new(grid, black_box((0, 0))).run())
        });
    }
    group.finish();
}

fn bench_cooperative(c: &mut Criterion) {
    let mut group = c.benchmark_group("cooperative");
    for size in [32, 64, 128] {
        let grid = BenchGrid::random(size, 0.25, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| {
                let astar = AStar::new(grid, black_box((0, 0)));
                block_on(astar.run_cooperative())
            })
        });
    }
    group.finish();
}

fn bench_tie_break(c: &mut Criterion) {
    let grid = BenchGrid::random(96, 0.0, 0);
    let mut group = c.benchmark_group("tie_break_open_grid");
    for (name, tie_break) in [
        ("lowest_heuristic", TieBreak::LowestHeuristic),
        ("fifo", TieBreak::Fifo),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                AStar::new(&grid, (0, 0))
                    .with_tie_break(tie_break)
                    .run()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_blocking, bench_cooperative, bench_tie_break);
criterion_main!(benches);
