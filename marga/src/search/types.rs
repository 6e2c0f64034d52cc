//! Search result and step types.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::frontier::TieBreak;
use crate::node::NodeId;

/// Wall-clock budget of a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeLimit {
    /// Run until success or exhaustion
    #[default]
    Unbounded,
    /// Stop once elapsed time is strictly greater than this
    Within(Duration),
    /// Negative budget: already exceeded before the first expansion
    Expired,
}

impl TimeLimit {
    /// True when `elapsed` is past the budget.
    pub fn is_exceeded(&self, elapsed: Duration) -> bool {
        match self {
            TimeLimit::Unbounded => false,
            TimeLimit::Within(budget) => elapsed > *budget,
            TimeLimit::Expired => true,
        }
    }

    /// Convert a millisecond budget.
    ///
    /// `+inf` (or anything too large for a `Duration`) is unbounded. Negative
    /// values are accepted and expire immediately. NaN is rejected.
    pub fn from_ms(ms: f64) -> Result<Self> {
        if ms.is_nan() {
            return Err(SearchError::InvalidTimeout(ms));
        }
        if ms < 0.0 {
            return Ok(TimeLimit::Expired);
        }
        let nanos = (ms * 1_000_000.0).round();
        if nanos >= u64::MAX as f64 {
            return Ok(TimeLimit::Unbounded);
        }
        Ok(TimeLimit::Within(Duration::from_nanos(nanos as u64)))
    }
}

impl From<Duration> for TimeLimit {
    fn from(budget: Duration) -> Self {
        TimeLimit::Within(budget)
    }
}

/// Runtime options shared by both drivers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchOptions {
    /// Wall-clock budget
    pub timeout: TimeLimit,
    /// Ordering among open nodes with equal f
    pub tie_break: TieBreak,
}

impl SearchOptions {
    /// Build options from a millisecond timeout.
    ///
    /// `None` means unbounded. See [`TimeLimit::from_ms`] for the rest.
    pub fn new(timeout_ms: Option<f64>, tie_break: TieBreak) -> Result<Self> {
        let timeout = match timeout_ms {
            Some(ms) => TimeLimit::from_ms(ms)?,
            None => TimeLimit::Unbounded,
        };
        Ok(Self { timeout, tie_break })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = TimeLimit::Within(timeout);
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchStatus {
    /// A goal state was expanded
    Success,
    /// Every reachable state was expanded without meeting the goal
    NoPath,
    /// The wall-clock budget ran out
    Timeout,
}

impl SearchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStatus::Success => "success",
            SearchStatus::NoPath => "noPath",
            SearchStatus::Timeout => "timeout",
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a search.
///
/// For [`SearchStatus::NoPath`] and [`SearchStatus::Timeout`], `cost` and
/// `path` describe the best-effort node: the discovered state with the lowest
/// heuristic.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<S> {
    pub status: SearchStatus,
    /// Cost from start to the last state of `path`
    pub cost: f64,
    /// States from start to the terminal (or best-effort) state
    pub path: Vec<S>,
    /// Number of nodes popped from the frontier
    pub nodes_expanded: usize,
    /// Wall-clock time spent, as measured by the search clock
    pub elapsed: Duration,
}

impl<S> SearchResult<S> {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Success
    }

    /// Last state on the path.
    pub fn terminal(&self) -> Option<&S> {
        self.path.last()
    }

    /// Path length in states
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Terminal state of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The goal test held for this node
    Success(NodeId),
    /// The frontier ran dry
    Exhausted,
    /// The timeout elapsed before the next expansion
    TimedOut,
}

impl Termination {
    pub fn status(&self) -> SearchStatus {
        match self {
            Termination::Success(_) => SearchStatus::Success,
            Termination::Exhausted => SearchStatus::NoPath,
            Termination::TimedOut => SearchStatus::Timeout,
        }
    }
}

/// Outcome of one driver step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// More work remains
    Continue,
    /// The search is over
    Finished(Termination),
}

impl StepOutcome {
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, StepOutcome::Finished(_))
    }
}
