//! # Tenzip - Rank-Adaptive Lossy Tensor Compression
//!
//! Compresses dense numeric tensors by low-rank factorization: truncated SVD
//! for matrices, Tucker/HOSVD for higher-order tensors, with the rank chosen
//! adaptively from an error target and a rank budget.
//!
//! This is the **meta crate** that re-exports all tenzip components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use tenzip::prelude::*;
//!
//! // Compress a matrix to within a mean-squared-error target of 1e-4,
//! // keeping at most 16 singular triplets.
//! let tensor = TensorND::<f64>::random_uniform(&[64, 48], 0.0, 1.0);
//! let (reconstruction, report) = compress(&tensor, 1e-4, 16)?;
//!
//! assert_eq!(reconstruction.shape(), tensor.shape());
//! println!(
//!     "{} rank {:?}: ratio {:.2}x, mse {:.3e}",
//!     report.method.name(),
//!     report.rank(),
//!     report.compression_ratio,
//!     report.fidelity
//! );
//! # Ok::<(), tenzip::compress::CompressError>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Type ([`core`])
//!
//! Dense N-dimensional tensors with reshape/permute and unfold/fold.
//!
//! ```
//! use tenzip::core::TensorND;
//!
//! let tensor = TensorND::<f64>::ones(&[2, 3, 4]);
//! let unfolded = tensor.unfold(1).unwrap();
//! assert_eq!(unfolded.shape(), &[3, 8]);
//! ```
//!
//! ### Tensor Kernels ([`kernels`])
//!
//! N-mode products used by Tucker contraction and reconstruction.
//!
//! ```
//! use scirs2_core::ndarray_ext::{Array, Array2};
//! use tenzip::kernels::nmode_product;
//!
//! let tensor = Array::<f64, _>::ones(vec![3, 4, 5]);
//! let matrix = Array2::<f64>::ones((2, 4));
//! let result = nmode_product(&tensor.view(), &matrix.view(), 1).unwrap();
//! assert_eq!(result.shape(), &[3, 2, 5]);
//! ```
//!
//! ### Compression ([`compress`])
//!
//! The [`compress`](crate::compress::compress) entry point plus the
//! decomposition primitives it is built from (truncated SVD, Tucker-HOSVD,
//! energy-based rank selection).
//!
//! ## Examples
//!
//! See the `examples/` directory of `tenzip-compress` for usage
//! demonstrations.

#![deny(warnings)]

// Re-export all components
pub use tenzip_compress as compress;
pub use tenzip_core as core;
pub use tenzip_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tenzip::prelude::*;
    //!
    //! let tensor = TensorND::<f64>::zeros(&[10, 20]);
    //! assert_eq!(tensor.shape(), &[10, 20]);
    //! ```

    // Core types
    pub use crate::core::TensorND;

    // Compression entry point and reports
    pub use crate::compress::{
        compress, rank_for_energy, truncated_svd, tucker_hosvd, CompressError,
        CompressionMethod, CompressionReport, TruncatedSvd, TuckerDecomp,
    };

    // Kernels
    pub use crate::kernels::nmode_product;
}
