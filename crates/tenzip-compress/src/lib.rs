//! # tenzip-compress
//!
//! Rank-adaptive lossy tensor compression.
//!
//! The single entry point is [`compress`]: matrices are compressed with a
//! truncated SVD whose rank is picked from the singular energy spectrum;
//! tensors of order three and up use Tucker/HOSVD with a descending sweep
//! over rank ceilings. Both paths return the dense reconstruction together
//! with a [`CompressionReport`] describing the method, achieved compression
//! ratio, and reconstruction error.
//!
//! ## Quick Start
//!
//! ```
//! use tenzip_core::TensorND;
//! use tenzip_compress::compress;
//!
//! let tensor = TensorND::<f64>::random_uniform(&[10, 12, 8], 0.0, 1.0);
//! let (reconstruction, report) = compress(&tensor, 1e-4, 6).unwrap();
//!
//! assert_eq!(reconstruction.shape(), tensor.shape());
//! println!(
//!     "{}: ratio {:.2}, mse {:.3e}",
//!     report.method.name(),
//!     report.compression_ratio,
//!     report.fidelity
//! );
//! ```
//!
//! The decomposition primitives ([`truncated_svd`], [`tucker_hosvd`]) are
//! exported for callers that want the factors rather than the dense
//! reconstruction.
//!
//! ## SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext` and all SVDs go
//! through `scirs2_linalg`; `ndarray` is never used directly.

#![deny(warnings)]

pub mod compressor;
pub mod error;
pub mod metrics;
pub mod report;
pub mod svd;
pub mod tucker;


pub use compressor::compress;
pub use error::{CompressError, CompressResult};
pub use metrics::mean_squared_error;
pub use report::{CompressionMethod, CompressionReport};
pub use svd::{rank_for_energy, truncated_svd, TruncatedSvd};
pub use tucker::{tucker_hosvd, TuckerDecomp};
