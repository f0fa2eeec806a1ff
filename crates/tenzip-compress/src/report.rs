//! Compression reports: what method ran and how well it did

/// Which algorithm produced a compressed tensor, with its chosen ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionMethod {
    /// Truncated SVD of a matrix, keeping `rank` singular triplets.
    Svd { rank: usize },
    /// Tucker decomposition via HOSVD with one rank per mode.
    TuckerHosvd { ranks: Vec<usize> },
}

impl CompressionMethod {
    /// Human-readable method name.
    pub fn name(&self) -> &'static str {
        match self {
            CompressionMethod::Svd { .. } => "SVD",
            CompressionMethod::TuckerHosvd { .. } => "TuckerHOSVD",
        }
    }
}

/// Summary of one compression run.
///
/// `compression_ratio` is original element count over factorized storage
/// (core plus factors); values below 1.0 mean the factorization is larger
/// than the input. `fidelity` is the mean squared error between the input
/// and the reconstruction, always computed in `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub method: CompressionMethod,
    pub compression_ratio: f64,
    pub fidelity: f64,
}

impl CompressionReport {
    /// The SVD rank, if the SVD path was taken.
    pub fn rank(&self) -> Option<usize> {
        match &self.method {
            CompressionMethod::Svd { rank } => Some(*rank),
            CompressionMethod::TuckerHosvd { .. } => None,
        }
    }

    /// The per-mode Tucker ranks, if the Tucker path was taken.
    pub fn ranks(&self) -> Option<&[usize]> {
        match &self.method {
            CompressionMethod::Svd { .. } => None,
            CompressionMethod::TuckerHosvd { ranks } => Some(ranks),
        }
    }
}
