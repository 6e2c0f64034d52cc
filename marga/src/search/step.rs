//! Per-call search state and the expansion step.

use std::time::Duration;

use log::{debug, trace};

use super::path::reconstruct_path;
use super::types::{SearchOptions, SearchResult, StepOutcome, Termination, TimeLimit};
use crate::clock::Clock;
use crate::frontier::Frontier;
use crate::node::{Node, NodeArena, NodeId};
use crate::space::SearchSpace;
use crate::visited::VisitedSet;

/// State of one A* search.
///
/// Owns the node arena, frontier and closed set for a single call. Nothing
/// is shared between two `Search` values, so several can be interleaved on
/// one thread.
///
/// [`advance`](Self::advance) performs one unit of work: a timeout check
/// followed by one node expansion. The blocking and cooperative drivers both
/// run on top of it, and it can be called directly to single-step a search.
pub struct Search<'s, P: SearchSpace, C: Clock> {
    space: &'s P,
    clock: C,
    timeout: TimeLimit,
    started: Duration,
    arena: NodeArena<P::State, P::Key>,
    frontier: Frontier<P::Key>,
    visited: VisitedSet<P::Key>,
    best: NodeId,
    nodes_expanded: usize,
    terminal: Option<Termination>,
}

impl<'s, P: SearchSpace, C: Clock> Search<'s, P, C> {
    /// Seed a search with its start node.
    ///
    /// Evaluates `key` and `heuristic` on the start state and starts the
    /// timeout clock.
    pub fn new(space: &'s P, start: P::State, options: SearchOptions, clock: C) -> Self {
        let started = clock.now();
        let key = space.key(&start);
        let h = space.heuristic(&start);

        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new(options.tie_break);
        let root = arena.alloc(Node::start(key.clone(), start, h));
        frontier.push(key, root, h, h);

        Self {
            space,
            clock,
            timeout: options.timeout,
            started,
            arena,
            frontier,
            visited: VisitedSet::new(),
            best: root,
            nodes_expanded: 0,
            terminal: None,
        }
    }

    /// Check the timeout, then expand one node.
    ///
    /// Once a terminal outcome has been returned, further calls return it
    /// again without doing any work.
    pub fn advance(&mut self) -> StepOutcome {
        if let Some(terminal) = self.terminal {
            return StepOutcome::Finished(terminal);
        }

        let outcome = if self.timed_out() {
            StepOutcome::Finished(Termination::TimedOut)
        } else {
            self.expand()
        };

        if let StepOutcome::Finished(terminal) = outcome {
            self.terminal = Some(terminal);
            match terminal {
                Termination::Success(_) => debug!(
                    "[AStar] SUCCESS after expanding {} nodes ({} discovered)",
                    self.nodes_expanded,
                    self.arena.len()
                ),
                Termination::Exhausted => debug!(
                    "[AStar] NoPath after expanding {} nodes",
                    self.nodes_expanded
                ),
                Termination::TimedOut => debug!(
                    "[AStar] Timeout after {:?}, {} nodes expanded",
                    self.elapsed(),
                    self.nodes_expanded
                ),
            }
        }
        outcome
    }

    /// Expand the best open node.
    ///
    /// Pops the lowest-f node, tests it against the goal, closes it and
    /// relaxes its neighbors. Returns [`Termination::Exhausted`] when the
    /// frontier is empty, before or after the expansion.
    pub fn expand(&mut self) -> StepOutcome {
        let Some((key, current)) = self.frontier.pop_min() else {
            return StepOutcome::Finished(Termination::Exhausted);
        };
        self.nodes_expanded += 1;

        let space = self.space;
        let node = &self.arena[current];
        trace!(
            "[AStar] expand #{}: g={:.3} h={:.3} f={:.3} open={}",
            self.nodes_expanded,
            node.g,
            node.h,
            node.f,
            self.frontier.len()
        );

        if space.is_end(&node.data) {
            return StepOutcome::Finished(Termination::Success(current));
        }

        let closed = self.visited.mark(key);
        debug_assert!(closed, "node expanded twice");

        // Costs through `current` are computed against the unchanged arena
        // before any neighbor record is touched.
        let g = node.g;
        let candidates: Vec<_> = space
            .neighbors(&node.data)
            .into_iter()
            .filter_map(|state| {
                let key = space.key(&state);
                if self.visited.contains(&key) {
                    return None;
                }
                let tentative_g = g + space.distance(&node.data, &state);
                Some((state, key, tentative_g))
            })
            .collect();

        for (state, key, tentative_g) in candidates {
            let open = self.frontier.get(&key);
            if let Some(existing) = open {
                if self.arena[existing].g <= tentative_g {
                    // Another route is at least as good
                    continue;
                }
            }

            let h = space.heuristic(&state);
            let id = match open {
                Some(existing) => {
                    self.arena[existing].relax(current, tentative_g, h);
                    existing
                }
                None => self.arena.alloc(Node::discovered(
                    key.clone(),
                    state,
                    current,
                    tentative_g,
                    h,
                )),
            };

            if h < self.arena[self.best].h {
                self.best = id;
            }
            self.frontier.push(key, id, tentative_g + h, h);
        }

        if self.frontier.is_empty() {
            StepOutcome::Finished(Termination::Exhausted)
        } else {
            StepOutcome::Continue
        }
    }

    /// Build the result for a terminal outcome.
    pub fn finish(&self, terminal: Termination) -> SearchResult<P::State> {
        let node = match terminal {
            Termination::Success(id) => id,
            Termination::Exhausted | Termination::TimedOut => self.best,
        };

        SearchResult {
            status: terminal.status(),
            cost: self.arena[node].g,
            path: reconstruct_path(&self.arena, node),
            nodes_expanded: self.nodes_expanded,
            elapsed: self.elapsed(),
        }
    }

    /// True when the configured budget has been exceeded.
    pub fn timed_out(&self) -> bool {
        self.timeout.is_exceeded(self.elapsed())
    }

    /// Time since the search was created.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started)
    }

    /// Terminal outcome, once reached.
    pub fn terminal(&self) -> Option<Termination> {
        self.terminal
    }

    /// Node with the lowest heuristic seen so far.
    pub fn best_effort(&self) -> &Node<P::State, P::Key> {
        &self.arena[self.best]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<P::State, P::Key>> {
        self.arena.get(id)
    }

    /// Number of nodes discovered so far, including the start.
    pub fn nodes_discovered(&self) -> usize {
        self.arena.len()
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn open_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn closed_len(&self) -> usize {
        self.visited.len()
    }

    /// True if `key` has been expanded.
    pub fn is_closed(&self, key: &P::Key) -> bool {
        self.visited.contains(key)
    }

    /// True if `key` is waiting in the frontier.
    pub fn is_open(&self, key: &P::Key) -> bool {
        self.frontier.contains(key)
    }
}
