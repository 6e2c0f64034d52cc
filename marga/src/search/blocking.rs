//! Blocking driver: run a search to completion on the calling thread.

use super::step::Search;
use super::types::{SearchResult, StepOutcome};
use crate::clock::Clock;
use crate::space::SearchSpace;

impl<P: SearchSpace, C: Clock> Search<'_, P, C> {
    /// Advance until a terminal outcome and return its result.
    ///
    /// Never yields: the thread is occupied until the goal is found, the
    /// frontier is exhausted or the timeout is detected.
    pub fn run_to_completion(mut self) -> SearchResult<P::State> {
        loop {
            if let StepOutcome::Finished(terminal) = self.advance() {
                return self.finish(terminal);
            }
        }
    }
}
