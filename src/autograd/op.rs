//! Operation tags and the local derivative rules they stand for.

use std::fmt;

/// The operation that produced a node.
///
/// Each variant carries just what is needed to recompute its local derivative from
/// the node's own value and its operands' values, so the graph can be inspected
/// without running it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input, constant, or parameter: no operands.
    Leaf,
    /// `a + b`.
    Add,
    /// `a * b`.
    Mul,
    /// `a^n` for a constant exponent `n`.
    Pow(f64),
    /// `max(0, a)`.
    Relu,
    /// `tanh(a)`.
    Tanh,
    /// `e^a`.
    Exp,
    /// `ln(a)`.
    Log,
}

impl Op {
    /// Local partial derivatives `d(out)/d(operand_i)`, one per operand.
    ///
    /// `out` is the node's own forward value and `operands` the forward values of its
    /// predecessors, in the order they were recorded.
    pub(crate) fn local_grads(self, out: f64, operands: &[f64]) -> Vec<f64> {
        match (self, operands) {
            (Op::Leaf, _) => Vec::new(),
            (Op::Add, [_, _]) => vec![1.0, 1.0],
            (Op::Mul, [a, b]) => vec![*b, *a],
            (Op::Pow(n), [a]) => vec![n * a.powf(n - 1.0)],
            (Op::Relu, [_]) => vec![if out > 0.0 { 1.0 } else { 0.0 }],
            (Op::Tanh, [_]) => vec![1.0 - out * out],
            (Op::Exp, [_]) => vec![out],
            (Op::Log, [a]) => vec![1.0 / a],
            (op, operands) => unreachable!(
                "{op} node recorded with {} operand(s)",
                operands.len()
            ),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(n) => write!(f, "**{n}"),
            Op::Relu => write!(f, "ReLU"),
            Op::Tanh => write!(f, "tanh"),
            Op::Exp => write!(f, "exp"),
            Op::Log => write!(f, "log"),
        }
    }
}
