//! Errors produced by model construction, forward passes, and losses.

use thiserror::Error;

use crate::autograd::AutogradError;

/// Errors produced by the nn module.
///
/// # Variants
///
/// - **ArityMismatch**: a forward pass received the wrong number of inputs.
/// - **EmptyModel** / **ZeroWidth**: an [`Mlp`](super::Mlp) was described with no layers
///   or with a layer of zero neurons.
/// - **NonScalarOutput**: a model with several outputs was used where one prediction
///   per sample is needed.
/// - **LengthMismatch** / **EmptyBatch**: a loss was given predictions and targets that
///   cannot be paired up.
/// - **Autograd**: a node constructor rejected its arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NnError {
    /// Input count differs from the number of weights.
    #[error("expected {expected} input(s), got {actual}")]
    ArityMismatch {
        /// Inputs the neuron was built for.
        expected: usize,
        /// Inputs actually supplied.
        actual: usize,
    },

    /// An MLP needs at least one layer.
    #[error("model needs at least one layer")]
    EmptyModel,

    /// A layer was requested with no neurons.
    #[error("layer {index} has zero width")]
    ZeroWidth {
        /// Position of the offending layer.
        index: usize,
    },

    /// Predictions and targets differ in length.
    #[error("{predictions} prediction(s) but {targets} target(s)")]
    LengthMismatch {
        /// Number of predictions.
        predictions: usize,
        /// Number of targets.
        targets: usize,
    },

    /// A model used as a scalar predictor has more or fewer than one output.
    #[error("expected a single output, model produces {width}")]
    NonScalarOutput {
        /// Width of the model's final layer.
        width: usize,
    },

    /// A loss was asked to average over nothing.
    #[error("loss over an empty batch")]
    EmptyBatch,

    /// Error from the autograd engine.
    #[error(transparent)]
    Autograd(#[from] AutogradError),
}
