//! A fully connected layer of independent neurons sharing the same inputs.

use std::fmt;

use rand::Rng;

use super::{Module, Neuron, NnError};
use crate::autograd::ValueRef;

/// A row of neurons; output `i` comes from neuron `i`.
#[derive(Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `out_degree` neurons, each taking `in_degree` inputs.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(
        in_degree: usize,
        out_degree: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Self {
        Layer {
            neurons: (0..out_degree)
                .map(|_| Neuron::new(in_degree, nonlinear, rng))
                .collect(),
        }
    }

    /// Builds a layer from already constructed neurons.
    #[must_use]
    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    /// Neurons in output order.
    #[must_use]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Number of outputs (neurons).
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.neurons.len()
    }

    /// Feeds the same inputs to every neuron. Always returns one output per neuron,
    /// including for a single-neuron layer.
    ///
    /// # Errors
    ///
    /// Returns [`NnError::ArityMismatch`] if any neuron rejects the input count.
    pub fn forward(&self, inputs: &[ValueRef]) -> Result<Vec<ValueRef>, NnError> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<ValueRef> {
        self.neurons.iter().flat_map(Module::parameters).collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer of [")?;
        for (i, n) in self.neurons.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, "]")
    }
}
