use thiserror::Error;

use rd_fleet::FleetError;

/// Errors from route search.
///
/// "No feasible route" is not an error: planners return `Ok(None)`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown search strategy {0:?} (expected bfs, ucs, greedy or astar)")]
    UnknownStrategy(String),

    #[error("{0} search needs a heuristic table")]
    MissingHeuristics(&'static str),

    #[error("resource model error: {0}")]
    Fleet(#[from] FleetError),
}

pub type SearchResult<T> = Result<T, SearchError>;
