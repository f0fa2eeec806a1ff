//! Tucker decomposition via HOSVD
//!
//! A tensor X is approximated as G ×₁ U₁ ×₂ U₂ ... ×ₙ Uₙ where G is a small
//! core tensor and each Uᵢ holds the leading left singular vectors of the
//! mode-i unfolding. One SVD per mode, no iteration.

use crate::error::{CompressError, CompressResult};
use scirs2_core::ndarray_ext::{Array1, Array2, ScalarOperand};
use scirs2_core::numeric::{Float, NumAssign, NumCast};
use scirs2_linalg::svd;
use std::iter::Sum;
use tenzip_core::TensorND;
use tenzip_kernels::nmode_product;

/// Tucker decomposition result: core tensor plus one factor per mode.
///
/// Each factor Uᵢ has shape `(Iᵢ, Rᵢ)` with orthonormal columns; the core has
/// shape `(R₁, ..., Rₙ)`.
#[derive(Debug, Clone)]
pub struct TuckerDecomp<T> {
    /// Core tensor with shape (R₁, ..., Rₙ).
    pub core: TensorND<T>,

    /// Factor matrices, one per mode, shape (Iᵢ, Rᵢ).
    pub factors: Vec<Array2<T>>,
}

impl<T> TuckerDecomp<T>
where
    T: Float + NumCast + 'static,
{
    /// Per-mode ranks actually retained (the factor column counts).
    pub fn ranks(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.shape()[1]).collect()
    }

    /// Original per-mode extents (the factor row counts).
    pub fn original_shape(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.shape()[0]).collect()
    }

    /// Expand the factorization back into a dense tensor.
    ///
    /// Computes G ×₁ U₁ ×₂ U₂ ... ×ₙ Uₙ.
    pub fn reconstruct(&self) -> CompressResult<TensorND<T>> {
        let mut result = self.core.clone();
        for (mode, factor) in self.factors.iter().enumerate() {
            let expanded = nmode_product(&result.view(), &factor.view(), mode)
                .map_err(|e| CompressError::Shape(format!("reconstruction failed: {}", e)))?;
            result = TensorND::from_array(expanded);
        }
        Ok(result)
    }

    /// Number of stored scalars: core elements plus all factor elements.
    pub fn storage_footprint(&self) -> usize {
        let factor_elems: usize = self.factors.iter().map(|f| f.len()).sum();
        self.core.len() + factor_elems
    }

    /// Original element count over [`Self::storage_footprint`].
    pub fn compression_ratio(&self) -> f64 {
        let original: usize = self.original_shape().iter().product();
        original as f64 / self.storage_footprint() as f64
    }
}

/// Compute a Tucker decomposition via HOSVD with the given per-mode ranks.
///
/// Requested ranks are additionally capped at the numerical rank of each
/// mode unfolding, so a rank-deficient input never carries dead factor
/// columns. The returned decomposition's [`TuckerDecomp::ranks`] reports
/// what was actually kept.
///
/// # Errors
///
/// Returns [`CompressError::InvalidInput`] when `ranks` has the wrong length
/// or any entry is zero or exceeds its mode extent, and
/// [`CompressError::Svd`] when a mode SVD fails.
pub fn tucker_hosvd<T>(tensor: &TensorND<T>, ranks: &[usize]) -> CompressResult<TuckerDecomp<T>>
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
    let shape = tensor.shape();
    let n_modes = tensor.rank();

    if ranks.len() != n_modes {
        return Err(CompressError::InvalidInput(format!(
            "expected {} ranks, got {}",
            n_modes,
            ranks.len()
        )));
    }
    for (mode, (&rank, &extent)) in ranks.iter().zip(shape.iter()).enumerate() {
        if rank == 0 {
            return Err(CompressError::InvalidInput(format!(
                "rank for mode {} is zero",
                mode
            )));
        }
        if rank > extent {
            return Err(CompressError::InvalidInput(format!(
                "rank {} exceeds mode-{} extent {}",
                rank, mode, extent
            )));
        }
    }

    let mut factors = Vec::with_capacity(n_modes);
    for (mode, &rank) in ranks.iter().enumerate() {
        let unfolded = tensor
            .unfold(mode)
            .map_err(|e| CompressError::Shape(format!("unfold failed: {}", e)))?;

        let (u, s, _vt) = svd(&unfolded.view(), false, None)
            .map_err(|e| CompressError::Svd(format!("mode {}: {}", mode, e)))?;

        // Keeping columns past the numerical rank only adds noise vectors
        // and storage, so cap the request there.
        let effective = rank.min(numerical_rank(&s));
        factors.push(leading_columns(&u, effective));
    }

    let core = compute_core(tensor, &factors)?;
    Ok(TuckerDecomp { core, factors })
}

/// Count singular values above `1e-6 * sigma_max`, at least 1.
///
/// The cutoff is far above machine epsilon: the SVD emits spurious singular
/// values around `1e-8 * sigma_max` for exactly rank-deficient unfoldings,
/// and those must not count toward the rank.
fn numerical_rank<T>(s: &Array1<T>) -> usize
where
    T: Float + NumCast,
{
    let sigma_max = s.iter().cloned().fold(T::zero(), T::max);
    if sigma_max <= T::zero() {
        return 1;
    }
    let tol = sigma_max * T::from(1e-6).unwrap_or_else(T::epsilon);
    s.iter().filter(|&&sigma| sigma > tol).count().max(1)
}

/// First `k` columns of a matrix (clamped to its width).
fn leading_columns<T>(matrix: &Array2<T>, k: usize) -> Array2<T>
where
    T: Clone + Float,
{
    let rows = matrix.shape()[0];
    let k = k.min(matrix.shape()[1]);

    let mut result = Array2::<T>::zeros((rows, k));
    for i in 0..rows {
        for j in 0..k {
            result[[i, j]] = matrix[[i, j]];
        }
    }
    result
}

/// Core tensor: G = X ×₁ U₁ᵀ ×₂ U₂ᵀ ... ×ₙ Uₙᵀ.
fn compute_core<T>(tensor: &TensorND<T>, factors: &[Array2<T>]) -> CompressResult<TensorND<T>>
where
    T: Float + NumCast + 'static,
{
    let mut result = tensor.clone();
    for (mode, factor) in factors.iter().enumerate() {
        let factor_t = factor.t();
        let contracted = nmode_product(&result.view(), &factor_t, mode)
            .map_err(|e| CompressError::Shape(format!("core contraction failed: {}", e)))?;
        result = TensorND::from_array(contracted);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosvd_requested_shapes() {
        let tensor = TensorND::<f64>::random_uniform(&[4, 5, 6], 0.0, 1.0);
        let decomp = tucker_hosvd(&tensor, &[2, 3, 3]).unwrap();

        assert_eq!(decomp.core.shape(), &[2, 3, 3]);
        assert_eq!(decomp.ranks(), vec![2, 3, 3]);
        assert_eq!(decomp.factors[0].shape(), &[4, 2]);
        assert_eq!(decomp.factors[1].shape(), &[5, 3]);
        assert_eq!(decomp.factors[2].shape(), &[6, 3]);
        assert_eq!(decomp.original_shape(), vec![4, 5, 6]);
    }

    #[test]
    fn test_hosvd_full_rank_roundtrip() {
        let tensor = TensorND::<f64>::random_uniform(&[3, 4, 2], -1.0, 1.0);
        let decomp = tucker_hosvd(&tensor, &[3, 2, 2]).unwrap();

        let recon = decomp.reconstruct().unwrap();
        assert_eq!(recon.shape(), tensor.shape());
    }

    #[test]
    fn test_hosvd_rank_one_tensor_capped() {
        // Every mode unfolding of the all-ones tensor has rank 1, so
        // requested ranks collapse to [1, 1, 1].
        let tensor = TensorND::<f64>::ones(&[3, 4, 5]);
        let decomp = tucker_hosvd(&tensor, &[3, 4, 5]).unwrap();
        assert_eq!(decomp.ranks(), vec![1, 1, 1]);

        let recon = decomp.reconstruct().unwrap();
        for (&a, &b) in tensor.iter().zip(recon.iter()) {
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn test_hosvd_rejects_bad_ranks() {
        let tensor = TensorND::<f64>::ones(&[3, 4, 5]);
        assert!(matches!(
            tucker_hosvd(&tensor, &[3, 4]),
            Err(CompressError::InvalidInput(_))
        ));
        assert!(matches!(
            tucker_hosvd(&tensor, &[3, 4, 6]),
            Err(CompressError::InvalidInput(_))
        ));
        assert!(matches!(
            tucker_hosvd(&tensor, &[0, 4, 5]),
            Err(CompressError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_numerical_rank_ignores_near_zero_singular_values() {
        use scirs2_core::ndarray_ext::array;

        // Spectrum of a rank-1 unfolding: one real singular value trailed by
        // noise around 1e-8 relative.
        let s = array![7.745966692414835, 8.4e-8, 0.0];
        assert_eq!(numerical_rank(&s), 1);

        // Small but genuine singular values still count.
        let s = array![5.0, 3.0, 1e-3];
        assert_eq!(numerical_rank(&s), 3);

        let s = array![0.0, 0.0];
        assert_eq!(numerical_rank(&s), 1);
    }

    #[test]
    fn test_storage_footprint_arithmetic() {
        let tensor = TensorND::<f64>::ones(&[4, 5, 6]);
        let decomp = tucker_hosvd(&tensor, &[1, 1, 1]).unwrap();
        // 1 core element + factors 4 + 5 + 6
        assert_eq!(decomp.storage_footprint(), 16);
        assert!((decomp.compression_ratio() - 120.0 / 16.0).abs() < 1e-12);
    }
}
