//! Error types for Marga.

use thiserror::Error;

/// Contract violations detected before a search starts.
///
/// These are the only errors the engine produces. Failures inside caller
/// callbacks are not caught, and a search that reaches no goal or runs out
/// of time still returns a [`SearchResult`](crate::SearchResult).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("search start state is missing")]
    MissingStart,

    #[error("required callback `{0}` is missing")]
    MissingCallback(&'static str),

    #[error("invalid timeout: {0} ms (must be a number)")]
    InvalidTimeout(f64),
}

pub type Result<T> = std::result::Result<T, SearchError>;
