//! Cooperative driver: one expansion per poll.
//!
//! [`CooperativeSearch`] is a future that performs a single
//! [`Search::advance`] each time it is polled. When the search is not done it
//! wakes itself and returns `Pending`, which puts it at the back of the
//! executor's run queue. Other tasks on the same single-threaded executor run
//! between expansions.
//!
//! ```rust
//! use futures::executor::block_on;
//! use marga::SearchBuilder;
//!
//! let astar = SearchBuilder::new()
//!     .start(0u32)
//!     .is_end(|n| *n == 3)
//!     .neighbors(|n| vec![n + 1])
//!     .distance(|_, _| 1.0)
//!     .heuristic(|n| f64::from(3u32.saturating_sub(*n)))
//!     .build()
//!     .unwrap();
//!
//! let cooperative = block_on(astar.run_cooperative());
//! let blocking = astar.run();
//! assert_eq!(cooperative.status, blocking.status);
//! assert_eq!(cooperative.path, blocking.path);
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::step::Search;
use super::types::{SearchResult, StepOutcome};
use crate::clock::Clock;
use crate::space::SearchSpace;

/// Future driving a [`Search`] one expansion per poll.
pub struct CooperativeSearch<'s, P: SearchSpace, C: Clock> {
    search: Search<'s, P, C>,
    yields: usize,
}

impl<'s, P: SearchSpace, C: Clock> CooperativeSearch<'s, P, C> {
    pub fn new(search: Search<'s, P, C>) -> Self {
        Self { search, yields: 0 }
    }

    /// Times this future has returned `Pending`.
    pub fn yields(&self) -> usize {
        self.yields
    }

    pub fn search(&self) -> &Search<'s, P, C> {
        &self.search
    }
}

// No field is ever pinned in place
impl<P: SearchSpace, C: Clock> Unpin for CooperativeSearch<'_, P, C> {}

impl<P: SearchSpace, C: Clock> Future for CooperativeSearch<'_, P, C> {
    type Output = SearchResult<P::State>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match this.search.advance() {
            StepOutcome::Continue => {
                this.yields += 1;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
            StepOutcome::Finished(terminal) => Poll::Ready(this.search.finish(terminal)),
        }
    }
}
