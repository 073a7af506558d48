//! Multi-layer perceptron: layers chained input to output.

use std::fmt;

use log::debug;
use rand::Rng;

use super::{Layer, Module, NnError};
use crate::autograd::ValueRef;

/// A stack of [`Layer`]s. Every layer uses ReLU except the last, which is linear.
#[derive(Clone)]
pub struct Mlp {
    in_degree: usize,
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds one layer per entry of `layer_sizes`, threading widths from `in_degree`.
    ///
    /// # Errors
    ///
    /// Returns [`NnError::EmptyModel`] if `layer_sizes` is empty, or
    /// [`NnError::ZeroWidth`] if any entry is 0.
    pub fn new<R: Rng + ?Sized>(
        in_degree: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, NnError> {
        if layer_sizes.is_empty() {
            return Err(NnError::EmptyModel);
        }
        if let Some(index) = layer_sizes.iter().position(|&w| w == 0) {
            return Err(NnError::ZeroWidth { index });
        }

        let last = layer_sizes.len() - 1;
        let mut fan_in = in_degree;
        let mut layers = Vec::with_capacity(layer_sizes.len());
        for (i, &width) in layer_sizes.iter().enumerate() {
            layers.push(Layer::new(fan_in, width, i != last, rng));
            fan_in = width;
        }

        let mlp = Mlp { in_degree, layers };
        debug!(
            "built MLP({in_degree}, {layer_sizes:?}) with {} parameters",
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Number of inputs the first layer expects.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Width of the final layer.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_degree)
    }

    /// Layers from input to output.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Runs `inputs` through every layer in order.
    ///
    /// # Errors
    ///
    /// Returns [`NnError::ArityMismatch`] if `inputs.len()` differs from [`Mlp::in_degree`].
    pub fn forward(&self, inputs: &[ValueRef]) -> Result<Vec<ValueRef>, NnError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    /// Like [`Mlp::forward`], wrapping raw numbers as leaf nodes first.
    ///
    /// # Errors
    ///
    /// Same as [`Mlp::forward`].
    pub fn forward_values(&self, inputs: &[f64]) -> Result<Vec<ValueRef>, NnError> {
        let x: Vec<ValueRef> = inputs.iter().copied().map(ValueRef::new).collect();
        self.forward(&x)
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<ValueRef> {
        self.layers.iter().flat_map(Module::parameters).collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MLP of [")?;
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{layer}")?;
        }
        write!(f, "]")
    }
}
