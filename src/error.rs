//! Error types for waterblocks
//!
//! Uses `thiserror` for library errors. The calculator itself is total and
//! never returns one of these; they come from the input and config boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for waterblocks operations
pub type BlocksResult<T> = Result<T, BlocksError>;

/// Main error type for waterblocks operations
#[derive(Error, Debug)]
pub enum BlocksError {
    /// Nothing was entered at all
    #[error("Please enter at least one block height.")]
    EmptyInput,

    /// Input was present but every token was dropped
    #[error("Please enter valid, comma-separated non-negative numbers.")]
    NoValidHeights,

    /// Token that does not parse as an integer (strict mode)
    #[error("invalid block height '{token}' at position {index}")]
    InvalidToken { index: usize, token: String },

    /// Negative column height
    #[error("negative block height {value} at position {index}")]
    NegativeHeight { index: usize, value: i64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file that could not be deserialized
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
