//! # Marga: A* search over caller-defined state spaces
//!
//! Marga finds shortest (or best-effort) paths without ever holding a graph.
//! The caller describes the space through a handful of functions: goal test,
//! successors, edge cost, heuristic and identity key. The engine does the
//! rest.
//!
//! ## Features
//!
//! - **Generic states**: any `Clone` value, identified by any hashable key
//! - **Two drivers, one algorithm**: a blocking loop and a cooperative
//!   future that yields to the executor after every expansion
//! - **Best-effort answers**: when the goal is unreachable or time runs out,
//!   the path to the node with the lowest heuristic is returned
//! - **Deterministic ordering**: explicit tie-break among equal scores
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{SearchBuilder, SearchStatus};
//!
//! // Walk along a line from 0 to 4
//! let astar = SearchBuilder::new()
//!     .start(0i32)
//!     .is_end(|n| *n == 4)
//!     .neighbors(|n| vec![n - 1, n + 1])
//!     .distance(|_, _| 1.0)
//!     .heuristic(|n| f64::from((4 - n).abs()))
//!     .timeout_ms(100.0)
//!     .build()
//!     .unwrap();
//!
//! let result = astar.run();
//! assert_eq!(result.status, SearchStatus::Success);
//! assert_eq!(result.cost, 4.0);
//! assert_eq!(result.path, vec![0, 1, 2, 3, 4]);
//! ```
//!
//! ## Architecture
//!
//! - [`space`]: the [`SearchSpace`] trait and the closure-based builder
//! - [`node`]: node records and the per-call arena
//! - [`frontier`]: open set (min-heap by `f` + key index)
//! - [`visited`]: closed set
//! - [`search`]: expansion step, path reconstruction and drivers
//! - [`clock`]: monotonic time sources for timeouts
//! - [`config`]: YAML settings
//!
//! ## Search Loop
//!
//! ```text
//!   advance ──► elapsed > timeout? ──yes──► TimedOut ──┐
//!                      │ no                            │
//!                      ▼                               │
//!               pop min-f node                         │
//!                      │                               │
//!         is_end? ─────┼───yes────► Success ───────────┤
//!                      │ no                            │
//!                      ▼                               │
//!       close node, relax neighbors                    │
//!                      │                               │
//!       frontier empty? ──yes────► Exhausted ──────────┤
//!                      │ no                            ▼
//!                      ▼                       reconstruct path
//!                  Continue                    (terminal node or
//!                                               best-effort node)
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod frontier;
pub mod node;
pub mod search;
pub mod space;
pub mod visited;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{ConfigLoadError, MargaConfig, SearchSettings};
pub use error::SearchError;
pub use frontier::{Frontier, TieBreak};
pub use node::{Node, NodeArena, NodeId};
pub use search::{
    AStar, CooperativeSearch, Search, SearchOptions, SearchResult, SearchStatus, StepOutcome,
    Termination, TimeLimit, find_path, path_exists,
};
pub use space::{FnSpace, SearchBuilder, SearchSpace};
pub use visited::VisitedSet;
