//! Problem definition: the state space a search runs over.
//!
//! The engine never stores a graph. A [`SearchSpace`] answers the questions
//! A* needs about individual states, and everything else is up to the caller.
//! Implement the trait directly for a concrete domain, or assemble one from
//! closures with [`SearchBuilder`].

use std::fmt;
use std::fmt::Display;
use std::hash::Hash;
use std::time::Duration;

use crate::config::SearchSettings;
use crate::error::{Result, SearchError};
use crate::frontier::TieBreak;
use crate::search::{AStar, SearchOptions, TimeLimit};

/// A state space explored by A*.
///
/// Callbacks are expected to be well behaved: `distance` non-negative,
/// `heuristic` finite, `key` consistent (equal states produce equal keys).
/// None of this is validated, and a panicking callback unwinds through the
/// search.
pub trait SearchSpace {
    /// Opaque vertex value
    type State: Clone;
    /// Identity of a state. Two states with equal keys are the same vertex.
    type Key: Eq + Hash + Clone;

    fn key(&self, state: &Self::State) -> Self::Key;

    /// Goal test
    fn is_end(&self, state: &Self::State) -> bool;

    /// Successor states
    fn neighbors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Edge cost from `from` to `to`
    fn distance(&self, from: &Self::State, to: &Self::State) -> f64;

    /// Estimated remaining cost from `state` to a goal
    fn heuristic(&self, state: &Self::State) -> f64;
}

impl<P: SearchSpace + ?Sized> SearchSpace for &P {
    type State = P::State;
    type Key = P::Key;

    fn key(&self, state: &Self::State) -> Self::Key {
        (**self).key(state)
    }

    fn is_end(&self, state: &Self::State) -> bool {
        (**self).is_end(state)
    }

    fn neighbors(&self, state: &Self::State) -> Vec<Self::State> {
        (**self).neighbors(state)
    }

    fn distance(&self, from: &Self::State, to: &Self::State) -> f64 {
        (**self).distance(from, to)
    }

    fn heuristic(&self, state: &Self::State) -> f64 {
        (**self).heuristic(state)
    }
}

type KeyFn<'a, S, K> = Box<dyn Fn(&S) -> K + 'a>;
type PredicateFn<'a, S> = Box<dyn Fn(&S) -> bool + 'a>;
type NeighborFn<'a, S> = Box<dyn Fn(&S) -> Vec<S> + 'a>;
type DistanceFn<'a, S> = Box<dyn Fn(&S, &S) -> f64 + 'a>;
type HeuristicFn<'a, S> = Box<dyn Fn(&S) -> f64 + 'a>;

/// A [`SearchSpace`] made of closures.
pub struct FnSpace<'a, S, K> {
    key: KeyFn<'a, S, K>,
    is_end: PredicateFn<'a, S>,
    neighbors: NeighborFn<'a, S>,
    distance: DistanceFn<'a, S>,
    heuristic: HeuristicFn<'a, S>,
}

impl<S, K> fmt::Debug for FnSpace<'_, S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpace").finish_non_exhaustive()
    }
}

impl<S: Clone, K: Eq + Hash + Clone> SearchSpace for FnSpace<'_, S, K> {
    type State = S;
    type Key = K;

    fn key(&self, state: &S) -> K {
        (self.key)(state)
    }

    fn is_end(&self, state: &S) -> bool {
        (self.is_end)(state)
    }

    fn neighbors(&self, state: &S) -> Vec<S> {
        (self.neighbors)(state)
    }

    fn distance(&self, from: &S, to: &S) -> f64 {
        (self.distance)(from, to)
    }

    fn heuristic(&self, state: &S) -> f64 {
        (self.heuristic)(state)
    }
}

/// Builder for closure-defined searches.
///
/// `start`, `is_end`, `neighbors`, `distance` and `heuristic` are required;
/// [`build`](Self::build) fails with a [`SearchError`] when any is missing
/// or the timeout is not a usable number. Nothing is evaluated before that
/// check passes.
///
/// The identity key defaults to the state's `Display` text
/// ([`SearchBuilder::new`]). That is only correct if distinct vertices never
/// format the same; supply a real key with [`SearchBuilder::with_key`] or
/// [`SearchBuilder::key`] otherwise.
///
/// # Example
/// ```rust
/// use marga::{SearchBuilder, SearchStatus};
///
/// let astar = SearchBuilder::new()
///     .start(0i32)
///     .is_end(|n| *n == 4)
///     .neighbors(|n| [n - 1, n + 1].into_iter().filter(|m| (0..=4).contains(m)).collect())
///     .distance(|_, _| 1.0)
///     .heuristic(|n| f64::from(4 - n).abs())
///     .build()
///     .unwrap();
///
/// let result = astar.run();
/// assert_eq!(result.status, SearchStatus::Success);
/// assert_eq!(result.path, vec![0, 1, 2, 3, 4]);
/// ```
pub struct SearchBuilder<'a, S, K = String> {
    start: Option<S>,
    key: KeyFn<'a, S, K>,
    is_end: Option<PredicateFn<'a, S>>,
    neighbors: Option<NeighborFn<'a, S>>,
    distance: Option<DistanceFn<'a, S>>,
    heuristic: Option<HeuristicFn<'a, S>>,
    /// Validated at build time so a NaN surfaces as a precondition error
    timeout: Result<TimeLimit>,
    tie_break: TieBreak,
}

impl<'a, S: Display + 'a> SearchBuilder<'a, S, String> {
    /// Builder keyed by `state.to_string()`.
    pub fn new() -> Self {
        Self::with_key(|state: &S| state.to_string())
    }
}

impl<'a, S: Display + 'a> Default for SearchBuilder<'a, S, String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, K> SearchBuilder<'a, S, K> {
    /// Builder with an explicit identity key function.
    pub fn with_key(key: impl Fn(&S) -> K + 'a) -> Self {
        Self {
            start: None,
            key: Box::new(key),
            is_end: None,
            neighbors: None,
            distance: None,
            heuristic: None,
            timeout: Ok(TimeLimit::Unbounded),
            tie_break: TieBreak::default(),
        }
    }

    /// Replace the identity key function.
    pub fn key<K2>(self, key: impl Fn(&S) -> K2 + 'a) -> SearchBuilder<'a, S, K2> {
        SearchBuilder {
            start: self.start,
            key: Box::new(key),
            is_end: self.is_end,
            neighbors: self.neighbors,
            distance: self.distance,
            heuristic: self.heuristic,
            timeout: self.timeout,
            tie_break: self.tie_break,
        }
    }

    pub fn start(mut self, start: S) -> Self {
        self.start = Some(start);
        self
    }

    pub fn is_end(mut self, is_end: impl Fn(&S) -> bool + 'a) -> Self {
        self.is_end = Some(Box::new(is_end));
        self
    }

    pub fn neighbors(mut self, neighbors: impl Fn(&S) -> Vec<S> + 'a) -> Self {
        self.neighbors = Some(Box::new(neighbors));
        self
    }

    pub fn distance(mut self, distance: impl Fn(&S, &S) -> f64 + 'a) -> Self {
        self.distance = Some(Box::new(distance));
        self
    }

    pub fn heuristic(mut self, heuristic: impl Fn(&S) -> f64 + 'a) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    /// Wall-clock budget in milliseconds. `f64::INFINITY` means unbounded.
    pub fn timeout_ms(mut self, ms: f64) -> Self {
        self.timeout = TimeLimit::from_ms(ms);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Ok(TimeLimit::Within(timeout));
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Apply timeout and tie-break from loaded settings.
    pub fn settings(mut self, settings: &SearchSettings) -> Self {
        self.timeout = settings.to_options().map(|options| options.timeout);
        self.tie_break = settings.tie_break;
        self
    }

    /// Check preconditions and produce a runnable search.
    pub fn build(self) -> Result<AStar<FnSpace<'a, S, K>>>
    where
        S: Clone,
        K: Eq + Hash + Clone,
    {
        let start = self.start.ok_or(SearchError::MissingStart)?;
        let is_end = self.is_end.ok_or(SearchError::MissingCallback("is_end"))?;
        let neighbors = self
            .neighbors
            .ok_or(SearchError::MissingCallback("neighbors"))?;
        let distance = self
            .distance
            .ok_or(SearchError::MissingCallback("distance"))?;
        let heuristic = self
            .heuristic
            .ok_or(SearchError::MissingCallback("heuristic"))?;

        let options = SearchOptions {
            timeout: self.timeout?,
            tie_break: self.tie_break,
        };

        let space = FnSpace {
            key: self.key,
            is_end,
            neighbors,
            distance,
            heuristic,
        };
        Ok(AStar::new(space, start).with_options(options))
    }
}
