//! Reconstruction quality metrics

use scirs2_core::numeric::Float;
use tenzip_core::TensorND;

/// Mean squared error between two tensors of identical shape.
///
/// Accumulation happens in `f64` regardless of the element type, so `f32`
/// inputs do not lose precision in the sum. An empty tensor has MSE 0.
///
/// # Panics
///
/// Panics if the shapes differ; callers compare a tensor against its own
/// reconstruction, so a mismatch is a logic error.
pub fn mean_squared_error<T>(original: &TensorND<T>, reconstruction: &TensorND<T>) -> f64
where
    T: Float,
{
    assert_eq!(
        original.shape(),
        reconstruction.shape(),
        "MSE requires identical shapes"
    );

    let count = original.len();
    if count == 0 {
        return 0.0;
    }

    let sum: f64 = original
        .iter()
        .zip(reconstruction.iter())
        .map(|(&a, &b)| {
            let diff = (a - b).to_f64().unwrap_or(f64::NAN);
            diff * diff
        })
        .sum();
    sum / count as f64
}
