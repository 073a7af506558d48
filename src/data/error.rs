//! Errors produced when building or generating datasets.

use thiserror::Error;

/// Errors produced by the data module.
///
/// # Variants
///
/// - **Empty**: a dataset would contain no samples.
///   *Recovery*: supply at least one sample, or ask a generator for `n > 0`.
///
/// - **ArityMismatch**: samples disagree on the number of inputs.
///   *Recovery*: make every sample the same width as the first.
///
/// - **InvalidNoise**: a generator was given a negative or non-finite noise level.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// The dataset has no samples.
    #[error("data: dataset is empty")]
    Empty,

    /// A sample's input width differs from the first sample's.
    #[error("data: sample {index} has {actual} input(s), expected {expected}")]
    ArityMismatch {
        /// Position of the offending sample.
        index: usize,
        /// Width of the first sample.
        expected: usize,
        /// Width of the offending sample.
        actual: usize,
    },

    /// Noise standard deviation must be finite and non-negative.
    #[error("data: invalid noise level {0}")]
    InvalidNoise(f64),
}
