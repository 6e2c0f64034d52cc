//! A* search drivers.
//!
//! One expansion step ([`Search::advance`]) is shared by two drivers:
//!
//! - **Blocking**: [`AStar::run`] loops on the calling thread until the
//!   search terminates.
//! - **Cooperative**: [`AStar::run_cooperative`] returns a future that
//!   expands one node per poll and yields to the executor in between.
//!
//! Given the same inputs and no timeout, both produce the same status, cost
//! and path.
//!
//! Re-opened nodes are handled by pushing a new heap entry and discarding the
//! superseded one when it surfaces (see [`crate::frontier`]).

mod blocking;
mod cooperative;
mod path;
mod step;
mod types;

pub use cooperative::CooperativeSearch;
pub use step::Search;
pub use types::{SearchOptions, SearchResult, SearchStatus, StepOutcome, Termination, TimeLimit};

use std::fmt;
use std::time::Duration;

use crate::clock::{Clock, MonotonicClock};
use crate::error::Result;
use crate::frontier::TieBreak;
use crate::space::SearchSpace;

/// A configured search: a state space, a start state and options.
///
/// Each call to [`run`](Self::run), [`run_cooperative`](Self::run_cooperative)
/// or [`search`](Self::search) starts from scratch with fresh state.
pub struct AStar<P: SearchSpace, C: Clock = MonotonicClock> {
    space: P,
    start: P::State,
    options: SearchOptions,
    clock: C,
}

impl<P, C> fmt::Debug for AStar<P, C>
where
    P: SearchSpace + fmt::Debug,
    P::State: fmt::Debug,
    C: Clock + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStar")
            .field("space", &self.space)
            .field("start", &self.start)
            .field("options", &self.options)
            .field("clock", &self.clock)
            .finish()
    }
}

impl<P: SearchSpace> AStar<P> {
    /// Create a search with default options and the wall clock
    pub fn new(space: P, start: P::State) -> Self {
        Self {
            space,
            start,
            options: SearchOptions::default(),
            clock: MonotonicClock::new(),
        }
    }
}

impl<P: SearchSpace, C: Clock> AStar<P, C> {
    /// Use a different time source.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> AStar<P, C2> {
        AStar {
            space: self.space,
            start: self.start,
            options: self.options,
            clock,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the timeout in milliseconds. Fails on NaN.
    pub fn with_timeout_ms(mut self, ms: f64) -> Result<Self> {
        self.options = SearchOptions::new(Some(ms), self.options.tie_break)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = TimeLimit::Within(timeout);
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.options.tie_break = tie_break;
        self
    }

    pub fn space(&self) -> &P {
        &self.space
    }

    pub fn start(&self) -> &P::State {
        &self.start
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Fresh search state, for stepping manually.
    pub fn search(&self) -> Search<'_, P, &C> {
        Search::new(&self.space, self.start.clone(), self.options, &self.clock)
    }

    /// Run to completion on the calling thread.
    pub fn run(&self) -> SearchResult<P::State> {
        self.search().run_to_completion()
    }

    /// Future that runs the search one expansion per poll.
    pub fn run_cooperative(&self) -> CooperativeSearch<'_, P, &C> {
        CooperativeSearch::new(self.search())
    }
}

/// Quick blocking search with default options
pub fn find_path<P: SearchSpace>(space: &P, start: P::State) -> SearchResult<P::State> {
    Search::new(space, start, SearchOptions::default(), MonotonicClock::new()).run_to_completion()
}

/// Check whether a goal is reachable from `start`
pub fn path_exists<P: SearchSpace>(space: &P, start: P::State) -> bool {
    find_path(space, start).is_success()
}
