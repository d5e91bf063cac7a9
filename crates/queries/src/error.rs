//! Error types for the query layer.
//!
//! Only unrecognized boundary tags are errors here. An id that matches no
//! record is a normal absent result, and a top-N request larger than the
//! matching set degrades to returning what exists.

use thiserror::Error;

/// Errors a query can surface to the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// An unrecognized title-type tag was supplied
    #[error("Unrecognized title type tag: {tag}")]
    InvalidType { tag: String },

    /// An unrecognized genre tag was supplied
    #[error("Unrecognized genre tag: {tag}")]
    InvalidGenre { tag: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, QueryError>;
