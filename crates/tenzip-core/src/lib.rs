//! # tenzip-core
//!
//! Core dense tensor type and shape operations for the tenzip stack.
//!
//! This crate provides the foundational building block for the compression
//! crates: a dense N-dimensional tensor ([`TensorND`]) with creation helpers,
//! bounds-checked indexing, shape manipulation (reshape, permute), and the
//! matricization operations (unfold/fold) that the decomposition algorithms
//! are built on.
//!
//! ## SciRS2 Integration
//!
//! All array storage and numeric traits come from `scirs2_core`. Random
//! initialization uses `scirs2_core::random`; `ndarray` and `rand` are never
//! used directly.
//!
//! ## Quick Start
//!
//! ```
//! use tenzip_core::TensorND;
//!
//! // Create a 3D tensor of zeros
//! let tensor = TensorND::<f64>::zeros(&[2, 3, 4]);
//! assert_eq!(tensor.shape(), &[2, 3, 4]);
//! assert_eq!(tensor.rank(), 3);
//!
//! // Mode-1 unfolding (matricization)
//! let unfolded = tensor.unfold(1).unwrap();
//! assert_eq!(unfolded.shape(), &[3, 8]);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `anyhow::Result`:
//!
//! ```
//! use tenzip_core::TensorND;
//!
//! let tensor = TensorND::<f64>::zeros(&[2, 3]);
//! assert!(tensor.reshape(&[7]).is_err());
//! assert!(tensor.unfold(5).is_err());
//! ```

#![deny(warnings)]

mod shape;
mod tensor;


pub use tensor::TensorND;
