//! Autograd: a scalar computation graph with reverse-mode automatic differentiation.
//!
//! The graph is built as operations execute; every result node keeps handles to the
//! operands it was derived from and an [`Op`] tag describing its local derivative.
//! [`ScalarNode::backward`] seeds the root with gradient 1 and propagates gradients to
//! every reachable node in reverse topological order.

mod error;
pub mod impls;
mod op;
#[cfg(test)]
mod tests;

pub use error::AutogradError;
pub use impls::scalar::ValueRef;
pub use op::Op;

/// Trait for raising a node to a constant power (e.g. `Pow::pow(&a, 2.0)`).
///
/// For `&ValueRef` the output is `Result<ValueRef, AutogradError>`: a NaN or infinite
/// exponent is rejected with [`AutogradError::InvalidExponent`].
pub trait Pow<Rhs> {
    /// Result of the power operation, fallible for exponent validation.
    type Output;

    /// Returns `self^exp` with gradient tracking.
    #[must_use]
    fn pow(self, exp: Rhs) -> Self::Output;
}

/// Trait for the exponential of a node (e.g. `(&a).exp()`).
pub trait Exp {
    /// Result of the exponential.
    type Output;

    /// Returns `exp(self)` with gradient tracking.
    #[must_use]
    fn exp(self) -> Self::Output;
}

/// Trait for the natural log of a node (e.g. `(&a).log()`).
pub trait Log {
    /// Result of the log.
    type Output;

    /// Returns `ln(self)` with gradient tracking.
    #[must_use]
    fn log(self) -> Self::Output;
}

/// A differentiable scalar node in the computation graph.
///
/// Implementations hold a single float value and an accumulated gradient, and
/// participate in backward propagation. Use [`ScalarNode::data`] for the
/// forward value and [`ScalarNode::grad`] after [`ScalarNode::backward`].
pub trait ScalarNode: Clone {
    /// Returns the forward pass value.
    fn data(&self) -> f64;

    /// Returns the gradient of the root with respect to this node.
    fn grad(&self) -> f64;

    /// Runs backpropagation from this node to every node it was derived from.
    ///
    /// Gradients accumulate: calling this twice without [`ScalarNode::zero_grad`] on the
    /// leaves adds the second pass on top of the first.
    fn backward(&self);

    /// Zeros the gradient at this node (e.g. after an optimizer step).
    fn zero_grad(&self);
}
