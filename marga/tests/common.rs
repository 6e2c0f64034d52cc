//! Test utilities for Marga searches.
//!
//! Provides a few small state spaces plus brute-force reference solvers to
//! check search results against.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

use marga::SearchSpace;
use rand::prelude::*;

/// Integer line `0..=len-1`, unit steps, goal at `goal`.
pub struct Line {
    pub len: i64,
    pub goal: i64,
}

impl SearchSpace for Line {
    type State = i64;
    type Key = i64;

    fn key(&self, state: &i64) -> i64 {
        *state
    }

    fn is_end(&self, state: &i64) -> bool {
        *state == self.goal
    }

    fn neighbors(&self, state: &i64) -> Vec<i64> {
        [state - 1, state + 1]
            .into_iter()
            .filter(|n| (0..self.len).contains(n))
            .collect()
    }

    fn distance(&self, _: &i64, _: &i64) -> f64 {
        1.0
    }

    fn heuristic(&self, state: &i64) -> f64 {
        (self.goal - state).abs() as f64
    }
}

/// Grid cell
pub type Cell = (i32, i32);

/// 4-connected grid with walls and per-cell entry costs.
///
/// Records how often each cell was expanded (goal-tested) and every
/// heuristic value handed out.
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub walls: HashSet<Cell>,
    /// Cost of stepping into a cell (1.0 when absent)
    pub costs: HashMap<Cell, f64>,
    pub goal: Cell,
    /// Scale on the Manhattan heuristic (0 turns A* into Dijkstra)
    pub heuristic_weight: f64,
    pub expansions: RefCell<HashMap<Cell, usize>>,
    pub heuristics: RefCell<Vec<(Cell, f64)>>,
}

impl Grid {
    pub fn open(width: i32, height: i32, goal: Cell) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            costs: HashMap::new(),
            goal,
            heuristic_weight: 1.0,
            expansions: RefCell::new(HashMap::new()),
            heuristics: RefCell::new(Vec::new()),
        }
    }

    /// Random maze: each cell except start and goal is a wall with
    /// probability `wall_prob`.
    pub fn random(rng: &mut StdRng, width: i32, height: i32, wall_prob: f64) -> Self {
        let goal = (width - 1, height - 1);
        let mut grid = Self::open(width, height, goal);
        for x in 0..width {
            for y in 0..height {
                let cell = (x, y);
                if cell != (0, 0) && cell != goal && rng.gen_bool(wall_prob) {
                    grid.walls.insert(cell);
                }
            }
        }
        grid
    }

    /// Random terrain without walls: entry costs in `1..=9`.
    pub fn random_weighted(rng: &mut StdRng, width: i32, height: i32) -> Self {
        let goal = (width - 1, height - 1);
        let mut grid = Self::open(width, height, goal);
        grid.heuristic_weight = 0.0;
        for x in 0..width {
            for y in 0..height {
                grid.costs.insert((x, y), f64::from(rng.gen_range(1..=9u8)));
            }
        }
        grid
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.0 >= 0 && cell.0 < self.width && cell.1 >= 0 && cell.1 < self.height
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.walls.contains(&cell)
    }

    pub fn manhattan(&self, cell: Cell) -> f64 {
        f64::from((self.goal.0 - cell.0).abs() + (self.goal.1 - cell.1).abs())
    }

    /// Cells reachable from `start`.
    pub fn reachable(&self, start: Cell) -> HashSet<Cell> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            for next in self.neighbors(&cell) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Reference shortest-path cost (simple O(n^2) Dijkstra).
    pub fn shortest_cost(&self, start: Cell) -> Option<f64> {
        let mut dist: HashMap<Cell, f64> = HashMap::from([(start, 0.0)]);
        let mut done: HashSet<Cell> = HashSet::new();
        loop {
            let next = dist
                .iter()
                .filter(|(cell, _)| !done.contains(*cell))
                .min_by(|a, b| a.1.total_cmp(b.1))
                .map(|(cell, d)| (*cell, *d));
            let Some((cell, d)) = next else {
                return None;
            };
            if cell == self.goal {
                return Some(d);
            }
            done.insert(cell);
            for n in self.neighbors(&cell) {
                let candidate = d + self.distance(&cell, &n);
                let entry = dist.entry(n).or_insert(f64::INFINITY);
                if candidate < *entry {
                    *entry = candidate;
                }
            }
        }
    }

    pub fn max_expansions_per_cell(&self) -> usize {
        self.expansions.borrow().values().copied().max().unwrap_or(0)
    }
}

impl SearchSpace for Grid {
    type State = Cell;
    type Key = Cell;

    fn key(&self, state: &Cell) -> Cell {
        *state
    }

    fn is_end(&self, state: &Cell) -> bool {
        *self.expansions.borrow_mut().entry(*state).or_insert(0) += 1;
        *state == self.goal
    }

    fn neighbors(&self, &(x, y): &Cell) -> Vec<Cell> {
        [(x, y + 1), (x + 1, y), (x, y - 1), (x - 1, y)]
            .into_iter()
            .filter(|c| self.is_free(*c))
            .collect()
    }

    fn distance(&self, _: &Cell, to: &Cell) -> f64 {
        self.costs.get(to).copied().unwrap_or(1.0)
    }

    fn heuristic(&self, state: &Cell) -> f64 {
        let h = self.heuristic_weight * self.manhattan(*state);
        self.heuristics.borrow_mut().push((*state, h));
        h
    }
}

/// Sum of `distance` along consecutive path states.
pub fn path_cost<P: SearchSpace>(space: &P, path: &[P::State]) -> f64 {
    path.windows(2)
        .map(|pair| space.distance(&pair[0], &pair[1]))
        .sum()
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
