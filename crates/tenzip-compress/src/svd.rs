//! Truncated SVD and energy-based rank selection
//!
//! A matrix X is approximated as U_r Σ_r V_rᵀ, keeping the `r` leading
//! singular triplets. The rank is chosen from the singular spectrum: the
//! squared singular values are the energy captured per rank, and we keep
//! the smallest rank whose cumulative share meets the target.

use crate::error::{CompressError, CompressResult};
use scirs2_core::ndarray_ext::{Array1, Array2, ArrayView1, ArrayView2, ScalarOperand};
use scirs2_core::numeric::{Float, NumAssign, NumCast};
use scirs2_linalg::svd;
use std::iter::Sum;

/// Smallest rank whose cumulative squared-singular-value share reaches
/// `1 - sqrt(error_target)`.
///
/// A zero spectrum (all singular values zero, e.g. a zero matrix) selects
/// rank 1: a rank-1 factorization of zeros reconstructs exactly.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenzip_compress::rank_for_energy;
///
/// let s = array![10.0, 1.0, 1e-8];
/// // sigma_1^2 dominates but 99.99..% needs the second triplet too
/// assert_eq!(rank_for_energy(&s.view(), 1e-8), 2);
/// ```
pub fn rank_for_energy<T>(s: &ArrayView1<T>, error_target: f64) -> usize
where
    T: Float + Sum,
{
    let total: T = s.iter().map(|&x| x * x).sum();
    if total <= T::zero() {
        return 1;
    }

    let threshold = 1.0 - error_target.sqrt();
    let mut cumulative = T::zero();
    for (i, &sigma) in s.iter().enumerate() {
        cumulative = cumulative + sigma * sigma;
        let share = (cumulative / total).to_f64().unwrap_or(1.0);
        if share >= threshold {
            return i + 1;
        }
    }
    s.len().max(1)
}

/// A rank-`r` truncated singular value decomposition.
#[derive(Debug, Clone)]
pub struct TruncatedSvd<T> {
    u: Array2<T>,
    s: Array1<T>,
    vt: Array2<T>,
    rank: usize,
    rows: usize,
    cols: usize,
}

impl<T> TruncatedSvd<T>
where
    T: Float + ScalarOperand + 'static,
{
    /// Truncate a full decomposition `(U, Σ, Vᵀ)` to the leading `rank`
    /// triplets. `rank` is clamped to the spectrum length.
    pub fn from_full(u: &Array2<T>, s: &Array1<T>, vt: &Array2<T>, rank: usize) -> Self {
        let rows = u.shape()[0];
        let cols = vt.shape()[1];
        let rank = rank.clamp(1, s.len().max(1));

        let mut u_r = Array2::<T>::zeros((rows, rank));
        for i in 0..rows {
            for j in 0..rank {
                u_r[[i, j]] = u[[i, j]];
            }
        }

        let mut s_r = Array1::<T>::zeros(rank);
        for j in 0..rank {
            s_r[j] = s[j];
        }

        let mut vt_r = Array2::<T>::zeros((rank, cols));
        for i in 0..rank {
            for j in 0..cols {
                vt_r[[i, j]] = vt[[i, j]];
            }
        }

        Self {
            u: u_r,
            s: s_r,
            vt: vt_r,
            rank,
            rows,
            cols,
        }
    }

    /// The retained rank.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Multiply the factors back into a dense `rows x cols` matrix.
    pub fn reconstruct(&self) -> Array2<T> {
        // Scale the columns of U by the singular values, then U_s Vᵀ.
        let mut u_scaled = self.u.clone();
        for j in 0..self.rank {
            let sigma = self.s[j];
            for i in 0..self.rows {
                u_scaled[[i, j]] = u_scaled[[i, j]] * sigma;
            }
        }
        u_scaled.dot(&self.vt)
    }

    /// Number of stored scalars: `r * (rows + cols)`.
    ///
    /// The singular values are folded into one factor, so Σ costs nothing.
    pub fn storage_footprint(&self) -> usize {
        self.rank * (self.rows + self.cols)
    }

    /// Original element count over [`Self::storage_footprint`].
    pub fn compression_ratio(&self) -> f64 {
        (self.rows * self.cols) as f64 / self.storage_footprint() as f64
    }
}

/// Compute a rank-`rank` truncated SVD of a matrix.
///
/// The full decomposition is computed once and then cut down; `rank` is
/// clamped to `min(rows, cols)`.
pub fn truncated_svd<T>(matrix: &ArrayView2<T>, rank: usize) -> CompressResult<TruncatedSvd<T>>
where
    T: Float
        + NumCast
        + NumAssign
        + Sum
        + Send
        + Sync
        + ScalarOperand
        + std::fmt::Debug
        + 'static,
{
    let (u, s, vt) =
        svd(matrix, false, None).map_err(|e| CompressError::Svd(format!("{}", e)))?;
    Ok(TruncatedSvd::from_full(&u, &s, &vt, rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_rank_for_energy_dominant_first_value() {
        // sigma^2 = [10000, 1e-8]; first share is essentially 1
        let s = array![100.0, 1e-4];
        assert_eq!(rank_for_energy(&s.view(), 1e-4), 1);
    }

    #[test]
    fn test_rank_for_energy_flat_spectrum_needs_all() {
        let s = array![1.0, 1.0, 1.0, 1.0];
        // Threshold 1 - sqrt(1e-8) = 0.9999 forces all four triplets
        assert_eq!(rank_for_energy(&s.view(), 1e-8), 4);
    }

    #[test]
    fn test_rank_for_energy_zero_spectrum() {
        let s = array![0.0, 0.0, 0.0];
        assert_eq!(rank_for_energy(&s.view(), 1e-4), 1);
    }

    #[test]
    fn test_rank_for_energy_loose_target_keeps_one() {
        let s = array![2.0, 1.0];
        // Threshold 1 - sqrt(0.99) ~ 0.005; sigma_1 share is 0.8
        assert_eq!(rank_for_energy(&s.view(), 0.99), 1);
    }

    #[test]
    fn test_truncated_svd_reconstructs_diagonal() {
        // Diagonal matrix is its own SVD up to signs.
        let matrix = array![[3.0, 0.0], [0.0, 2.0]];
        let decomp = truncated_svd(&matrix.view(), 2).unwrap();
        assert_eq!(decomp.rank(), 2);

        let recon = decomp.reconstruct();
        for i in 0..2 {
            for j in 0..2 {
                assert!((recon[[i, j]] - matrix[[i, j]]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_truncated_svd_rank_one_of_rank_one_matrix() {
        // Outer product of [1,2] and [3,4,5] has exact rank 1.
        let matrix = array![[3.0, 4.0, 5.0], [6.0, 8.0, 10.0]];
        let decomp = truncated_svd(&matrix.view(), 1).unwrap();
        assert_eq!(decomp.rank(), 1);

        let recon = decomp.reconstruct();
        for i in 0..2 {
            for j in 0..3 {
                assert!((recon[[i, j]] - matrix[[i, j]]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_storage_footprint_and_ratio() {
        let matrix = Array2::<f64>::ones((10, 6));
        let decomp = truncated_svd(&matrix.view(), 2).unwrap();
        assert_eq!(decomp.storage_footprint(), 2 * (10 + 6));
        assert!((decomp.compression_ratio() - 60.0 / 32.0).abs() < 1e-12);
    }
}
