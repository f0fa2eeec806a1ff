//! Rank-adaptive lossy compression entry point
//!
//! Matrices go through one truncated SVD with an energy-based rank pick.
//! Higher-order tensors go through Tucker/HOSVD with a descending sweep over
//! rank ceilings, keeping the best reconstruction seen. Compression never
//! fails because a target is unreachable; the report says what was achieved.

use crate::error::{CompressError, CompressResult};
use crate::metrics::mean_squared_error;
use crate::report::{CompressionMethod, CompressionReport};
use crate::svd::{rank_for_energy, TruncatedSvd};
use crate::tucker::tucker_hosvd;
use scirs2_core::ndarray_ext::ScalarOperand;
use scirs2_core::numeric::{Float, NumAssign, NumCast};
use scirs2_linalg::svd;
use std::iter::Sum;
use tenzip_core::TensorND;

/// Rank ceilings tried, in order, when the first Tucker attempt misses the
/// error target. Descending: each step trades fidelity for storage, and the
/// sweep stops at the first ceiling that meets the target.
const SWEEP_CEILINGS: &[usize] = &[24, 16, 12, 8];

/// Compress a tensor, returning the reconstruction and a report.
///
/// * 2-D inputs use a truncated SVD. The rank is the smallest one whose
///   cumulative singular energy reaches `1 - sqrt(error_target)`, clamped to
///   `[1, min(rows, cols, max_rank)]`.
/// * Inputs with 3 or more dimensions use Tucker/HOSVD. The first attempt
///   caps every mode at `max_rank`; if its mean squared error misses
///   `error_target`, lower ceilings are swept and the best attempt wins.
///
/// `fidelity` in the report is always the mean squared error against the
/// original input, computed in `f64`. A `max_rank` of zero is treated as 1.
///
/// # Errors
///
/// Returns [`CompressError::InvalidInput`] for tensors with fewer than two
/// dimensions or a non-finite or non-positive `error_target`, and
/// [`CompressError::Svd`] if a decomposition fails numerically. An unmet
/// error target is not an error.
///
/// # Examples
///
/// ```
/// use tenzip_core::TensorND;
/// use tenzip_compress::compress;
///
/// let tensor = TensorND::<f64>::random_uniform(&[20, 20], 0.0, 1.0);
/// let (recon, report) = compress(&tensor, 1e-4, 8).unwrap();
///
/// assert_eq!(recon.shape(), tensor.shape());
/// assert!(report.rank().unwrap() <= 8);
/// ```
pub fn compress<T>(
    tensor: &TensorND<T>,
    error_target: f64,
    max_rank: usize,
) -> CompressResult<(TensorND<T>, CompressionReport)>
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
    if !error_target.is_finite() || error_target <= 0.0 {
        return Err(CompressError::InvalidInput(format!(
            "error target must be finite and positive, got {}",
            error_target
        )));
    }
    let max_rank = max_rank.max(1);

    match tensor.rank() {
        0 | 1 => Err(CompressError::InvalidInput(format!(
            "compression requires at least 2 dimensions, got {}",
            tensor.rank()
        ))),
        2 => compress_matrix(tensor, error_target, max_rank),
        _ => compress_tucker(tensor, error_target, max_rank),
    }
}

fn compress_matrix<T>(
    tensor: &TensorND<T>,
    error_target: f64,
    max_rank: usize,
) -> CompressResult<(TensorND<T>, CompressionReport)>
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
    let matrix = tensor
        .unfold(0)
        .map_err(|e| CompressError::Shape(format!("{}", e)))?;
    let (rows, cols) = (matrix.shape()[0], matrix.shape()[1]);

    let (u, s, vt) =
        svd(&matrix.view(), false, None).map_err(|e| CompressError::Svd(format!("{}", e)))?;

    let rank = rank_for_energy(&s.view(), error_target)
        .clamp(1, rows.min(cols).max(1))
        .min(max_rank);

    let decomp = TruncatedSvd::from_full(&u, &s, &vt, rank);
    let recon_matrix = decomp.reconstruct();
    let reconstruction = TensorND::from_array(recon_matrix.into_dyn());

    let fidelity = mean_squared_error(tensor, &reconstruction);
    let report = CompressionReport {
        method: CompressionMethod::Svd {
            rank: decomp.rank(),
        },
        compression_ratio: decomp.compression_ratio(),
        fidelity,
    };
    Ok((reconstruction, report))
}

fn compress_tucker<T>(
    tensor: &TensorND<T>,
    error_target: f64,
    max_rank: usize,
) -> CompressResult<(TensorND<T>, CompressionReport)>
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
    let initial: Vec<usize> = shape.iter().map(|&extent| max_rank.min(extent)).collect();

    let (mut best_recon, mut best_report) = evaluate_tucker(tensor, &initial)?;
    let mut tried = vec![initial];

    if best_report.fidelity > error_target {
        for &ceiling in SWEEP_CEILINGS.iter().filter(|&&c| c < max_rank) {
            let ranks: Vec<usize> = shape.iter().map(|&extent| ceiling.min(extent)).collect();
            if tried.contains(&ranks) {
                continue;
            }

            let (recon, report) = evaluate_tucker(tensor, &ranks)?;
            tried.push(ranks);

            if report.fidelity <= error_target {
                best_recon = recon;
                best_report = report;
                break;
            }
            if report.fidelity < best_report.fidelity {
                best_recon = recon;
                best_report = report;
            }
        }
    }

    Ok((best_recon, best_report))
}

fn evaluate_tucker<T>(
    tensor: &TensorND<T>,
    ranks: &[usize],
) -> CompressResult<(TensorND<T>, CompressionReport)>
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
    let decomp = tucker_hosvd(tensor, ranks)?;
    let reconstruction = decomp.reconstruct()?;
    let fidelity = mean_squared_error(tensor, &reconstruction);

    let report = CompressionReport {
        method: CompressionMethod::TuckerHosvd {
            ranks: decomp.ranks(),
        },
        compression_ratio: decomp.compression_ratio(),
        fidelity,
    };
    Ok((reconstruction, report))
}
