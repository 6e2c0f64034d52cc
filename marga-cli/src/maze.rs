//! ASCII grid mazes as a search space.
//!
//! ```text
//! S..#....
//! .#.#.##.
//! .#...#G.
//! ```
//!
//! `#` is a wall, `.` or space is floor, `S` marks the start and `G` the goal.
//! Rows may have different lengths; missing cells are walls. Empty lines at
//! the end of the file are ignored. Any other line is a row, so a line of
//! spaces is a row of floor.

use std::fmt;

use marga::SearchSpace;

use crate::config::MazeSettings;
use crate::error::{CliError, Result};

/// Grid coordinates (column, row)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y - 1),
            GridCoord::new(self.x + 1, self.y),
            GridCoord::new(self.x, self.y + 1),
            GridCoord::new(self.x - 1, self.y),
        ]
    }

    /// Get the 4 diagonal neighbors (NE, SE, SW, NW)
    #[inline]
    pub fn neighbors_diagonal(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x + 1, self.y - 1),
            GridCoord::new(self.x + 1, self.y + 1),
            GridCoord::new(self.x - 1, self.y + 1),
            GridCoord::new(self.x - 1, self.y - 1),
        ]
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A parsed maze plus movement rules.
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    /// Row-major, true = wall
    walls: Vec<bool>,
    start: GridCoord,
    goal: GridCoord,
    allow_diagonal: bool,
    diagonal_cost: f64,
}

impl Maze {
    /// Parse a maze from text.
    pub fn parse(text: &str, settings: &MazeSettings) -> Result<Self> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(CliError::Maze("maze is empty".to_string()));
        }

        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut walls = vec![true; width * height];
        let mut start = None;
        let mut goal = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let coord = GridCoord::new(x as i32, y as i32);
                let wall = match ch {
                    '#' => true,
                    '.' | ' ' => false,
                    'S' => {
                        if start.replace(coord).is_some() {
                            return Err(CliError::Maze("more than one start 'S'".to_string()));
                        }
                        false
                    }
                    'G' => {
                        if goal.replace(coord).is_some() {
                            return Err(CliError::Maze("more than one goal 'G'".to_string()));
                        }
                        false
                    }
                    other => {
                        return Err(CliError::Maze(format!(
                            "unexpected character {:?} at row {}, column {}",
                            other,
                            y + 1,
                            x + 1
                        )));
                    }
                };
                walls[y * width + x] = wall;
            }
        }

        Ok(Self {
            width,
            height,
            walls,
            start: start.ok_or_else(|| CliError::Maze("no start 'S' in maze".to_string()))?,
            goal: goal.ok_or_else(|| CliError::Maze("no goal 'G' in maze".to_string()))?,
            allow_diagonal: settings.allow_diagonal,
            diagonal_cost: settings.diagonal_cost,
        })
    }

    pub fn start(&self) -> GridCoord {
        self.start
    }

    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// In bounds and not a wall
    pub fn is_free(&self, coord: GridCoord) -> bool {
        self.is_valid_coord(coord) && !self.walls[coord.y as usize * self.width + coord.x as usize]
    }

    /// Draw the maze with `path` marked by `*`.
    pub fn render(&self, path: &[GridCoord]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.walls[y * self.width + x] { '#' } else { '.' })
                    .collect()
            })
            .collect();

        for coord in path {
            rows[coord.y as usize][coord.x as usize] = '*';
        }
        rows[self.start.y as usize][self.start.x as usize] = 'S';
        rows[self.goal.y as usize][self.goal.x as usize] = 'G';

        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SearchSpace for Maze {
    type State = GridCoord;
    type Key = GridCoord;

    fn key(&self, state: &GridCoord) -> GridCoord {
        *state
    }

    fn is_end(&self, state: &GridCoord) -> bool {
        *state == self.goal
    }

    fn neighbors(&self, state: &GridCoord) -> Vec<GridCoord> {
        let mut out: Vec<GridCoord> = state
            .neighbors_4()
            .into_iter()
            .filter(|c| self.is_free(*c))
            .collect();

        if self.allow_diagonal {
            // No corner cutting: both orthogonal cells must be open
            out.extend(state.neighbors_diagonal().into_iter().filter(|c| {
                self.is_free(*c)
                    && self.is_free(GridCoord::new(c.x, state.y))
                    && self.is_free(GridCoord::new(state.x, c.y))
            }));
        }
        out
    }

    fn distance(&self, from: &GridCoord, to: &GridCoord) -> f64 {
        if from.x != to.x && from.y != to.y {
            self.diagonal_cost
        } else {
            1.0
        }
    }

    /// Octile distance on 8-connected mazes, Manhattan otherwise
    fn heuristic(&self, state: &GridCoord) -> f64 {
        let dx = f64::from((state.x - self.goal.x).abs());
        let dy = f64::from((state.y - self.goal.y).abs());

        if self.allow_diagonal {
            let min = dx.min(dy);
            let max = dx.max(dy);
            min * self.diagonal_cost + (max - min)
        } else {
            dx + dy
        }
    }
}
