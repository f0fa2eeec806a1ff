//! Shape manipulation: reshape, permute, and unfold/fold matricization

use crate::tensor::TensorND;
use scirs2_core::ndarray_ext::{Array2, IxDyn};
use scirs2_core::numeric::Num;

impl<T> TensorND<T>
where
    T: Clone + Num,
{
    /// Reshape to a new shape with the same number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenzip_core::TensorND;
    ///
    /// let tensor = TensorND::<f64>::zeros(&[2, 3, 4]);
    /// let reshaped = tensor.reshape(&[6, 4]).unwrap();
    /// assert_eq!(reshaped.shape(), &[6, 4]);
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> anyhow::Result<Self> {
        let new_size: usize = new_shape.iter().product();
        if new_size != self.len() {
            anyhow::bail!(
                "cannot reshape tensor of size {} into shape {:?} (size {})",
                self.len(),
                new_shape,
                new_size
            );
        }
        let contiguous = self.data.as_standard_layout().into_owned();
        let reshaped = contiguous
            .into_shape_with_order(IxDyn(new_shape))
            .map_err(|e| anyhow::anyhow!("reshape failed: {}", e))?;
        Ok(Self::from_array(reshaped))
    }

    /// Permute (generalized transpose) the axes.
    ///
    /// `axes` must be a permutation of `0..rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenzip_core::TensorND;
    ///
    /// let tensor = TensorND::<f64>::zeros(&[2, 3, 4]);
    /// let permuted = tensor.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(permuted.shape(), &[4, 2, 3]);
    /// ```
    pub fn permute(&self, axes: &[usize]) -> anyhow::Result<Self> {
        if axes.len() != self.rank() {
            anyhow::bail!(
                "permutation of length {} does not match tensor rank {}",
                axes.len(),
                self.rank()
            );
        }
        let mut seen = vec![false; self.rank()];
        for &axis in axes {
            if axis >= self.rank() {
                anyhow::bail!("axis {} out of bounds for rank {}", axis, self.rank());
            }
            if seen[axis] {
                anyhow::bail!("duplicate axis {} in permutation", axis);
            }
            seen[axis] = true;
        }
        Ok(Self::from_array(
            self.data.clone().permuted_axes(IxDyn(axes)),
        ))
    }

    /// Unfold (matricize) the tensor along one mode.
    ///
    /// Mode-n unfolding places the mode-n fibers as rows of a matrix with
    /// shape `(shape[mode], product of the remaining extents)`. This is the
    /// workhorse of the SVD-based decompositions.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenzip_core::TensorND;
    ///
    /// let tensor = TensorND::<f64>::ones(&[2, 3, 4]);
    /// let unfolded = tensor.unfold(1).unwrap();
    /// assert_eq!(unfolded.shape(), &[3, 8]);
    /// ```
    pub fn unfold(&self, mode: usize) -> anyhow::Result<Array2<T>> {
        if mode >= self.rank() {
            anyhow::bail!("mode {} out of bounds for rank {}", mode, self.rank());
        }

        let shape = self.shape();
        let rows = shape[mode];
        let cols = self.len() / rows.max(1);

        // Bring the unfolding mode to the front, then flatten the rest.
        let mut perm = Vec::with_capacity(self.rank());
        perm.push(mode);
        perm.extend((0..self.rank()).filter(|&i| i != mode));

        let permuted = self.data.view().permuted_axes(IxDyn(&perm));
        let contiguous = permuted.as_standard_layout().into_owned();
        contiguous
            .into_shape_with_order((rows, cols))
            .map_err(|e| anyhow::anyhow!("unfold failed: {}", e))
    }

    /// Fold a matrix back into a tensor, inverting [`TensorND::unfold`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array2;
    /// use tenzip_core::TensorND;
    ///
    /// let matrix: Array2<f64> = Array2::zeros((3, 8));
    /// let tensor = TensorND::fold(&matrix, &[2, 3, 4], 1).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3, 4]);
    /// ```
    pub fn fold(matrix: &Array2<T>, shape: &[usize], mode: usize) -> anyhow::Result<Self> {
        if mode >= shape.len() {
            anyhow::bail!("mode {} out of bounds for target shape {:?}", mode, shape);
        }

        let expected_rows = shape[mode];
        let expected_cols: usize = shape
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != mode)
            .map(|(_, &s)| s)
            .product();
        if matrix.shape() != [expected_rows, expected_cols] {
            anyhow::bail!(
                "matrix shape {:?} incompatible with target shape {:?} at mode {}",
                matrix.shape(),
                shape,
                mode
            );
        }

        // Reshape to (mode extent, remaining extents...), then permute the
        // mode axis back to its original position.
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
            .to_owned()
            .into_shape_with_order(IxDyn(&intermediate_shape))
            .map_err(|e| anyhow::anyhow!("fold failed: {}", e))?;

        let mut inverse_perm = vec![0; shape.len()];
        let mut next = 1;
        for (i, slot) in inverse_perm.iter_mut().enumerate() {
            if i != mode {
                *slot = next;
                next += 1;
            }
        }

        let folded = intermediate.permuted_axes(IxDyn(&inverse_perm));
        Ok(Self::from_array(folded.as_standard_layout().into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_size_mismatch() {
        let tensor = TensorND::<f64>::zeros(&[2, 3]);
        assert!(tensor.reshape(&[7]).is_err());
    }

    #[test]
    fn test_permute_rejects_bad_axes() {
        let tensor = TensorND::<f64>::zeros(&[2, 3, 4]);
        assert!(tensor.permute(&[0, 1]).is_err());
        assert!(tensor.permute(&[0, 1, 3]).is_err());
        assert!(tensor.permute(&[0, 0, 1]).is_err());
    }

    #[test]
    fn test_unfold_known_values() {
        // 2x3 tensor, mode-1 unfolding places the columns of the original as rows
        let tensor =
            TensorND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        let unfolded = tensor.unfold(1).unwrap();
        assert_eq!(unfolded.shape(), &[3, 2]);
        assert_eq!(unfolded[[0, 0]], 1.0);
        assert_eq!(unfolded[[0, 1]], 4.0);
        assert_eq!(unfolded[[2, 0]], 3.0);
        assert_eq!(unfolded[[2, 1]], 6.0);
    }

    #[test]
    fn test_unfold_mode_zero_is_identity_for_matrices() {
        let tensor = TensorND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let unfolded = tensor.unfold(0).unwrap();
        assert_eq!(unfolded[[0, 0]], 1.0);
        assert_eq!(unfolded[[0, 1]], 2.0);
        assert_eq!(unfolded[[1, 0]], 3.0);
        assert_eq!(unfolded[[1, 1]], 4.0);
    }

    #[test]
    fn test_unfold_fold_roundtrip() {
        let data: Vec<f64> = (0..24).map(|x| x as f64).collect();
        let tensor = TensorND::from_vec(data, &[2, 3, 4]).unwrap();

        for mode in 0..3 {
            let unfolded = tensor.unfold(mode).unwrap();
            let folded = TensorND::fold(&unfolded, &[2, 3, 4], mode).unwrap();
            assert_eq!(folded.to_vec(), tensor.to_vec(), "mode {}", mode);
        }
    }

    #[test]
    fn test_fold_rejects_incompatible_matrix() {
        let matrix = Array2::<f64>::zeros((3, 5));
        assert!(TensorND::fold(&matrix, &[2, 3, 4], 1).is_err());
        assert!(TensorND::fold(&matrix, &[2, 3, 4], 9).is_err());
    }
}
