//! Errors produced while building graph nodes.

use thiserror::Error;

/// Errors produced by autograd node constructors.
///
/// Domain problems such as `0^-1` or `(-8)^(1/3)` are *not* errors: they follow
/// IEEE-754 and show up as `inf`/`NaN` in [`data`](super::ScalarNode::data) and in the
/// gradients that flow from them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutogradError {
    /// `pow` was given an exponent that is not a plain finite number.
    #[error("invalid exponent {0}: power only supports finite numeric exponents")]
    InvalidExponent(f64),
}
