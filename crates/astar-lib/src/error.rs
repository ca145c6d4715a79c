use thiserror::Error;

/// Convenient result alias for the search library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// An unreachable destination is not an error: [`crate::find_path`] reports
/// it as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised when a path is built or deserialized from zero nodes.
    #[error("a path must contain at least one node")]
    EmptyPath,
}
