use thiserror::Error;

/// Errors that can occur while building a [`QuerySpec`](crate::QuerySpec).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query spec requires at least one parameter")]
    Empty,
}
