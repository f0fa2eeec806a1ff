//! Error types for the compression pipeline

use thiserror::Error;

/// Error type for compression operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompressError {
    /// The input tensor or a parameter is unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A singular value decomposition did not converge or failed.
    #[error("SVD failed: {0}")]
    Svd(String),

    /// An internal reshape or unfolding produced incompatible shapes.
    #[error("shape mismatch: {0}")]
    Shape(String),
}

/// Result type for compression operations
pub type CompressResult<T> = Result<T, CompressError>;
