//! Structured error types for kernel operations

use thiserror::Error;

/// Error type for tensor kernel operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The requested mode does not exist on the operand tensor.
    #[error("mode {mode} out of bounds for tensor of rank {rank}")]
    InvalidMode { mode: usize, rank: usize },

    /// Matrix columns do not line up with the tensor's mode extent.
    #[error("{operation}: matrix has {cols} columns but mode-{mode} extent is {extent}")]
    DimensionMismatch {
        operation: &'static str,
        cols: usize,
        mode: usize,
        extent: usize,
    },

    /// Catch-all for layout/reshape failures inside a kernel.
    #[error("{operation}: {message}")]
    Operation {
        operation: &'static str,
        message: String,
    },
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;
