//! A single neuron: weighted sum plus bias, optionally through ReLU.

use std::fmt;

use rand::Rng;

use super::{Module, NnError};
use crate::autograd::ValueRef;

/// One neuron with `in_degree` weights and a bias.
#[derive(Clone)]
pub struct Neuron {
    weights: Vec<ValueRef>,
    bias: ValueRef,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with weights drawn uniformly from `[-1, 1)` and a zero bias.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(in_degree: usize, nonlinear: bool, rng: &mut R) -> Self {
        let weights = (0..in_degree)
            .map(|_| ValueRef::new(rng.random_range(-1.0..1.0)))
            .collect();
        Neuron {
            weights,
            bias: ValueRef::new(0.0),
            nonlinear,
        }
    }

    /// Creates a neuron with explicit weight and bias values.
    #[must_use]
    pub fn from_parts(weights: &[f64], bias: f64, nonlinear: bool) -> Self {
        Neuron {
            weights: weights.iter().copied().map(ValueRef::new).collect(),
            bias: ValueRef::new(bias),
            nonlinear,
        }
    }

    /// Number of inputs this neuron expects.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.weights.len()
    }

    /// Whether the output goes through ReLU.
    #[must_use]
    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }

    /// Weight nodes, one per input.
    #[must_use]
    pub fn weights(&self) -> &[ValueRef] {
        &self.weights
    }

    /// Bias node.
    #[must_use]
    pub fn bias(&self) -> &ValueRef {
        &self.bias
    }

    /// Computes `bias + sum(w_i * x_i)`, then ReLU if the neuron is nonlinear.
    ///
    /// # Errors
    ///
    /// Returns [`NnError::ArityMismatch`] if `inputs.len()` differs from the weight count.
    pub fn forward(&self, inputs: &[ValueRef]) -> Result<ValueRef, NnError> {
        if inputs.len() != self.weights.len() {
            return Err(NnError::ArityMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let act = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));
        Ok(if self.nonlinear { act.relu() } else { act })
    }
}

impl Module for Neuron {
    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<ValueRef> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlinear { "ReLU" } else { "Linear" };
        write!(f, "{kind}Neuron({})", self.weights.len())
    }
}
