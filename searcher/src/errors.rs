use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No search result found")]
    NoResultFound,

    #[error("Unknown cycle policy: {0} (expected simple or minimal-depth)")]
    UnknownPolicy(String),

    #[error("Depth limit {0} is outside 1..={max}", max = crate::algorithm::DEPTH_LIMIT)]
    DepthLimit(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
