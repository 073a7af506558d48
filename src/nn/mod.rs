//! Neural network building blocks on top of the scalar autograd engine.
//!
//! [`Neuron`], [`Layer`] and [`Mlp`] own their parameters as long-lived leaf nodes and
//! build a fresh graph of intermediate nodes on every `forward` call. Everything is
//! composed from public [`ValueRef`] operations only.

mod error;
mod layer;
pub mod loss;
mod mlp;
mod neuron;

pub use error::NnError;
pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::Neuron;

use crate::autograd::{ScalarNode, ValueRef};

/// Anything that owns trainable parameters.
pub trait Module {
    /// All trainable parameters, in a stable order.
    fn parameters(&self) -> Vec<ValueRef>;

    /// Resets the gradient of every parameter to 0. Parameter values are untouched.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    /// Number of trainable parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
