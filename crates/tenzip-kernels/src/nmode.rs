//! N-mode product (tensor times matrix along one mode)
//!
//! For a tensor X with shape (I₁, ..., Iₙ) and a matrix M with shape (J, Iₖ),
//! the mode-k product Y = X ×ₖ M has shape (I₁, ..., Iₖ₋₁, J, Iₖ₊₁, ..., Iₙ).
//! It is computed as M · X₍ₖ₎ on the mode-k unfolding, then folded back.

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, Array2, ArrayView, ArrayView2, IxDyn};
use scirs2_core::numeric::Float;

/// Compute the mode-`mode` product of a tensor and a matrix.
///
/// # Arguments
///
/// * `tensor` - Input tensor with N dimensions
/// * `matrix` - Matrix with shape (J, Iₖ), where Iₖ = `tensor.shape()[mode]`
/// * `mode` - Mode along which to multiply (0-indexed)
///
/// # Errors
///
/// Returns [`KernelError::InvalidMode`] if `mode` is out of bounds and
/// [`KernelError::DimensionMismatch`] if the matrix columns do not match the
/// mode extent.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, array};
/// use tenzip_kernels::nmode_product;
///
/// let tensor = Array::from_shape_vec(
///     vec![2, 3, 4],
///     (0..24).map(|x| x as f64).collect(),
/// ).unwrap();
/// let matrix = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
///
/// let result = nmode_product(&tensor.view(), &matrix.view(), 1).unwrap();
/// assert_eq!(result.shape(), &[2, 2, 4]);
/// ```
pub fn nmode_product<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrix: &ArrayView2<T>,
    mode: usize,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Float + 'static,
{
    let shape = tensor.shape();
    let rank = shape.len();

    if mode >= rank {
        return Err(KernelError::InvalidMode { mode, rank });
    }

    let extent = shape[mode];
    let (matrix_rows, matrix_cols) = (matrix.shape()[0], matrix.shape()[1]);
    if matrix_cols != extent {
        return Err(KernelError::DimensionMismatch {
            operation: "nmode_product",
            cols: matrix_cols,
            mode,
            extent,
        });
    }

    let unfolded = unfold(tensor, mode)?;
    let product: Array2<T> = matrix.dot(&unfolded);

    let mut new_shape = shape.to_vec();
    new_shape[mode] = matrix_rows;
    fold(product, &new_shape, mode)
}

/// Apply several mode products in sequence.
///
/// Each entry of `matrices` is a `(matrix, mode)` pair. Modes refer to the
/// tensor's axis numbering throughout: an n-mode product changes an extent
/// but never removes an axis, so indices do not shift between steps.
pub fn nmode_products_seq<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrices: &[(&ArrayView2<T>, usize)],
) -> KernelResult<Array<T, IxDyn>>
where
    T: Float + 'static,
{
    let mut result = tensor.to_owned();
    for (matrix, mode) in matrices {
        result = nmode_product(&result.view(), matrix, *mode)?;
    }
    Ok(result)
}

/// Mode-k unfolding: shape (Iₖ, ∏ᵢ≠ₖ Iᵢ).
fn unfold<T>(tensor: &ArrayView<T, IxDyn>, mode: usize) -> KernelResult<Array2<T>>
where
    T: Float,
{
    let shape = tensor.shape();
    let rows = shape[mode];
    let cols: usize = shape
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != mode)
        .map(|(_, &s)| s)
        .product();

    let mut perm = Vec::with_capacity(shape.len());
    perm.push(mode);
    perm.extend((0..shape.len()).filter(|&i| i != mode));

    let permuted = tensor.view().permuted_axes(IxDyn(&perm));
    permuted
        .as_standard_layout()
        .into_owned()
        .into_shape_with_order((rows, cols))
        .map_err(|e| KernelError::Operation {
            operation: "nmode_product",
            message: format!("unfold reshape failed: {}", e),
        })
}

/// Inverse of [`unfold`] for the given target shape.
fn fold<T>(matrix: Array2<T>, shape: &[usize], mode: usize) -> KernelResult<Array<T, IxDyn>>
where
    T: Float,
{
    let mut intermediate_shape = Vec::with_capacity(shape.len());
    intermediate_shape.push(shape[mode]);
    intermediate_shape.extend(
        shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mode)
            .map(|(_, &s)| s),
    );

    let intermediate = matrix
        .into_shape_with_order(IxDyn(&intermediate_shape))
        .map_err(|e| KernelError::Operation {
            operation: "nmode_product",
            message: format!("fold reshape failed: {}", e),
        })?;

    let mut inverse_perm = vec![0; shape.len()];
    let mut next = 1;
    for (i, slot) in inverse_perm.iter_mut().enumerate() {
        if i != mode {
            *slot = next;
            next += 1;
        }
    }

    Ok(intermediate
        .permuted_axes(IxDyn(&inverse_perm))
        .as_standard_layout()
        .into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    fn sample_tensor() -> Array<f64, IxDyn> {
        Array::from_shape_vec(vec![2, 3, 4], (0..24).map(|x| x as f64).collect()).unwrap()
    }

    #[test]
    fn test_identity_product_is_noop() {
        let tensor = sample_tensor();
        let eye = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        let result = nmode_product(&tensor.view(), &eye.view(), 1).unwrap();
        assert_eq!(result.shape(), tensor.shape());
        for (a, b) in result.iter().zip(tensor.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_mode_extent_replaced() {
        let tensor = sample_tensor();
        let matrix = Array2::<f64>::ones((5, 4));

        let result = nmode_product(&tensor.view(), &matrix.view(), 2).unwrap();
        assert_eq!(result.shape(), &[2, 3, 5]);
    }

    #[test]
    fn test_ones_matrix_sums_fibers() {
        // A single row of ones collapses the mode to the fiber sum.
        let tensor = sample_tensor();
        let matrix = Array2::<f64>::ones((1, 2));

        let result = nmode_product(&tensor.view(), &matrix.view(), 0).unwrap();
        assert_eq!(result.shape(), &[1, 3, 4]);
        // Element (0,0,0) = tensor[0,0,0] + tensor[1,0,0] = 0 + 12
        assert_eq!(result[[0, 0, 0]], 12.0);
    }

    #[test]
    fn test_invalid_mode() {
        let tensor = sample_tensor();
        let matrix = Array2::<f64>::ones((2, 2));
        let err = nmode_product(&tensor.view(), &matrix.view(), 3).unwrap_err();
        assert_eq!(err, KernelError::InvalidMode { mode: 3, rank: 3 });
    }

    #[test]
    fn test_dimension_mismatch() {
        let tensor = sample_tensor();
        let matrix = Array2::<f64>::ones((2, 5));
        let err = nmode_product(&tensor.view(), &matrix.view(), 0).unwrap_err();
        assert!(matches!(err, KernelError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_sequential_products() {
        let tensor = sample_tensor();
        let m0 = Array2::<f64>::ones((1, 2));
        let m1 = Array2::<f64>::ones((1, 3));

        let result =
            nmode_products_seq(&tensor.view(), &[(&m0.view(), 0), (&m1.view(), 1)]).unwrap();
        assert_eq!(result.shape(), &[1, 1, 4]);
    }
}
