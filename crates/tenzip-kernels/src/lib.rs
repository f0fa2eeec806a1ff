//! # tenzip-kernels
//!
//! Tensor-times-matrix kernels for the tenzip stack.
//!
//! This crate provides the n-mode product (tensor-matrix multiplication along
//! one mode), the fundamental primitive behind Tucker/HOSVD reconstruction
//! and core-tensor contraction.
//!
//! ## Quick Start
//!
//! ```
//! use scirs2_core::ndarray_ext::{Array, Array2};
//! use tenzip_kernels::nmode_product;
//!
//! let tensor = Array::<f64, _>::ones(vec![3, 4, 5]);
//! let matrix = Array2::<f64>::ones((2, 4));
//!
//! // Mode-1 product replaces the extent 4 with 2
//! let result = nmode_product(&tensor.view(), &matrix.view(), 1).unwrap();
//! assert_eq!(result.shape(), &[3, 2, 5]);
//! ```
//!
//! ## SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`; `ndarray` is never
//! used directly.

#![deny(warnings)]

pub mod error;
pub mod nmode;

pub use error::{KernelError, KernelResult};
pub use nmode::{nmode_product, nmode_products_seq};
