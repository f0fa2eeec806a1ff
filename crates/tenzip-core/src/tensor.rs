//! Dense tensor type definition, creation helpers, and element access

use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, IxDyn};
use scirs2_core::numeric::{Float, Num};
use std::iter::Sum;
use std::ops::{Index, IndexMut};

/// Dense N-dimensional tensor backed by scirs2_core's dynamic arrays
///
/// `TensorND` is the value type flowing through the tenzip stack. Tensors are
/// row-major by default, and all element access is bounds-checked.
///
/// # Examples
///
/// ```
/// use tenzip_core::TensorND;
///
/// let tensor = TensorND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// assert_eq!(tensor.len(), 24);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TensorND<T> {
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> TensorND<T>
where
    T: Clone + Num,
{
    /// Wrap an existing dynamic array.
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create a tensor from a flat vector in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenzip_core::TensorND;
    ///
    /// let tensor = TensorND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        Ok(Self {
            data: Array::from_shape_vec(IxDyn(shape), vec)?,
        })
    }

    /// Create a tensor filled with a single value.
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a tensor of zeros.
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// Create a tensor of ones.
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Per-axis extents.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Owned copy of the shape.
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor has zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Immutable view of the underlying array.
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Mutable view of the underlying array.
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, IxDyn> {
        self.data.view_mut()
    }

    /// Immutable reference to the underlying array.
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Bounds-checked element access.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenzip_core::TensorND;
    ///
    /// let tensor = TensorND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(tensor.get(&[5, 5]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }
        self.data.get(index)
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// All elements as a flat vector in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }
}

impl<T> TensorND<T>
where
    T: Float + Sum,
{
    /// Frobenius norm: `sqrt(sum(x_i^2))` over every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenzip_core::TensorND;
    ///
    /// let tensor = TensorND::<f64>::ones(&[2, 3]);
    /// assert!((tensor.frobenius_norm() - 6.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        self.data.iter().map(|&x| x * x).sum::<T>().sqrt()
    }
}

impl<T> TensorND<T>
where
    T: Clone + Num + From<f64>,
{
    /// Create a tensor with values drawn uniformly from `[low, high)`.
    ///
    /// Uses `scirs2_core::random` (never `rand` directly).
    pub fn random_uniform(shape: &[usize], low: f64, high: f64) -> Self {
        use scirs2_core::random::quick::random_f64;

        let total: usize = shape.iter().product();
        let range = high - low;
        let data: Vec<T> = (0..total)
            .map(|_| <T as From<f64>>::from(low + random_f64() * range))
            .collect();
        Self {
            data: Array::from_shape_vec(IxDyn(shape), data).unwrap(),
        }
    }
}

impl<T> Index<&[usize]> for TensorND<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<&[usize]> for TensorND<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut T {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_and_accessors() {
        let tensor = TensorND::<f64>::zeros(&[2, 3, 4]);
        assert_eq!(tensor.rank(), 3);
        assert_eq!(tensor.shape(), &[2, 3, 4]);
        assert_eq!(tensor.len(), 24);
        assert!(!tensor.is_empty());
    }

    #[test]
    fn test_from_vec_size_mismatch() {
        let result = TensorND::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_indexing() {
        let mut tensor = TensorND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(tensor[&[0, 1]], 2.0);
        tensor[&[1, 0]] = 42.0;
        assert_eq!(tensor[&[1, 0]], 42.0);
    }

    #[test]
    fn test_from_elem() {
        let tensor = TensorND::from_elem(&[3, 3], 5.0);
        assert!(tensor.iter().all(|&x| x == 5.0));
    }

    #[test]
    fn test_frobenius_norm() {
        let tensor = TensorND::from_vec(vec![3.0, 4.0], &[2, 1]).unwrap();
        assert!((tensor.frobenius_norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_uniform_range() {
        let tensor = TensorND::<f64>::random_uniform(&[10, 10], -1.0, 1.0);
        assert_eq!(tensor.shape(), &[10, 10]);
        assert!(tensor.iter().all(|&x| (-1.0..1.0).contains(&x)));
    }

    #[test]
    fn test_to_vec_row_major() {
        let tensor = TensorND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        assert_eq!(tensor.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
