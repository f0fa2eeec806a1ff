//! Compression Example
//!
//! Demonstrates rank-adaptive lossy compression of a matrix (truncated SVD)
//! and a 3-way tensor (Tucker-HOSVD with a rank ceiling sweep).
//!
//! Run with:
//! ```bash
//! cargo run --example compress
//! ```

use tenzip_compress::compress;
use tenzip_core::TensorND;

fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(80));
    println!("Rank-Adaptive Compression Example");
    println!("{}", "=".repeat(80));
    println!();

    // ========================================================================
    // Example 1: Matrix compression via truncated SVD
    // ========================================================================
    println!("Example 1: Matrix (truncated SVD)");
    println!("{}", "-".repeat(80));

    let matrix = TensorND::<f64>::random_uniform(&[200, 120], 0.0, 1.0);
    println!("Input shape: {:?}", matrix.shape());

    let start = std::time::Instant::now();
    let (recon, report) = compress(&matrix, 1e-4, 40)?;
    let elapsed = start.elapsed();

    println!("Results:");
    println!("  - Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    println!("  - Method: {}", report.method.name());
    println!("  - Chosen rank: {:?}", report.rank());
    println!("  - Compression ratio: {:.2}x", report.compression_ratio);
    println!("  - Fidelity (MSE): {:.3e}", report.fidelity);
    println!("  - Reconstruction shape: {:?}", recon.shape());
    println!();

    // ========================================================================
    // Example 2: 3-way tensor compression via Tucker-HOSVD
    // ========================================================================
    println!("Example 2: 3-way tensor (Tucker-HOSVD)");
    println!("{}", "-".repeat(80));

    let tensor = TensorND::<f64>::random_uniform(&[40, 30, 20], 0.0, 1.0);
    println!("Input shape: {:?}", tensor.shape());

    let start = std::time::Instant::now();
    let (recon, report) = compress(&tensor, 1e-3, 16)?;
    let elapsed = start.elapsed();

    println!("Results:");
    println!("  - Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    println!("  - Method: {}", report.method.name());
    println!("  - Chosen ranks: {:?}", report.ranks());
    println!("  - Compression ratio: {:.2}x", report.compression_ratio);
    println!("  - Fidelity (MSE): {:.3e}", report.fidelity);
    println!("  - Reconstruction shape: {:?}", recon.shape());
    println!();

    // ========================================================================
    // Example 3: Structured input compresses much harder
    // ========================================================================
    println!("Example 3: Constant tensor");
    println!("{}", "-".repeat(80));

    let constant = TensorND::from_elem(&[32, 32, 32], 2.5);
    let (_, report) = compress(&constant, 1e-8, 8)?;

    println!("Results:");
    println!("  - Chosen ranks: {:?}", report.ranks());
    println!("  - Compression ratio: {:.2}x", report.compression_ratio);
    println!("  - Fidelity (MSE): {:.3e}", report.fidelity);
    println!();

    println!("{}", "=".repeat(80));
    println!("Done");
    println!("{}", "=".repeat(80));

    Ok(())
}
