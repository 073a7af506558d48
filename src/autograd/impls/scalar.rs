//! Scalar autograd: computation graph of single float values with backpropagation.

use crate::autograd::{AutogradError, Exp, Log, Op, Pow, ScalarNode};
use log::trace;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

/// Internal scalar node: forward value, gradient, and graph edges for backprop.
struct Value {
    /// Forward pass value.
    data: f64,
    /// Gradient of the root with respect to this node; accumulated during backward.
    grad: f64,
    /// Operands this node was derived from (empty for leaves).
    prev: Vec<ValueRef>,
    /// Operation that produced this node; selects the local derivative rule.
    op: Op,
}

impl Drop for Value {
    // Unlink uniquely owned operands iteratively; a long chain would otherwise
    // drop recursively, one stack frame group per node.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.prev);
        while let Some(operand) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.0) {
                pending.append(&mut cell.into_inner().prev);
            }
        }
    }
}

/// Handle to a scalar node in the autograd computation graph.
///
/// Wraps the node state in `Rc<RefCell<_>>` so that one node can be an operand of
/// many others and gradients can be accumulated during backward. Cloning the handle
/// is cheap and refers to the same node.
#[derive(Clone)]
pub struct ValueRef(Rc<RefCell<Value>>);

impl ValueRef {
    /// Creates a leaf node (no operands) with the given value and zero gradient.
    #[must_use]
    pub fn new(data: f64) -> Self {
        ValueRef::from_op(data, Vec::new(), Op::Leaf)
    }

    /// Creates a node that remembers its operands and the op that combined them.
    fn from_op(data: f64, prev: Vec<ValueRef>, op: Op) -> Self {
        ValueRef(Rc::new(RefCell::new(Value {
            data,
            grad: 0.0,
            prev,
            op,
        })))
    }

    /// The operation that produced this node.
    #[must_use]
    pub fn op(&self) -> Op {
        self.0.borrow().op
    }

    /// Handles to the operands this node was derived from, in recording order.
    #[must_use]
    pub fn prev(&self) -> Vec<ValueRef> {
        self.0.borrow().prev.clone()
    }

    /// Returns `true` if both handles point at the same graph node.
    #[must_use]
    pub fn ptr_eq(&self, other: &ValueRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Overwrites the forward value (parameter updates). The graph is not re-evaluated.
    pub fn set_data(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    /// Sets this node's gradient (only used to seed the root).
    fn set_grad(&self, g: f64) {
        self.0.borrow_mut().grad = g;
    }

    /// Adds to this node's gradient (for accumulation when a value is used multiple times).
    fn add_grad(&self, g: f64) {
        self.0.borrow_mut().grad += g;
    }

    fn as_ptr(&self) -> *const RefCell<Value> {
        Rc::as_ptr(&self.0)
    }

    /// Power with a constant exponent: `self^exp`. Local grad is `exp * self^(exp-1)`.
    ///
    /// # Errors
    ///
    /// Returns [`AutogradError::InvalidExponent`] if `exp` is NaN or infinite. A negative
    /// or zero base is accepted and may yield `inf`/`NaN`.
    pub fn pow(&self, exp: f64) -> Result<ValueRef, AutogradError> {
        if !exp.is_finite() {
            return Err(AutogradError::InvalidExponent(exp));
        }
        Ok(self.powf(exp))
    }

    fn powf(&self, exp: f64) -> ValueRef {
        ValueRef::from_op(self.data().powf(exp), vec![self.clone()], Op::Pow(exp))
    }

    /// ReLU: `max(0, self)`. Local grad is 1 if the output is positive, else 0.
    #[must_use]
    pub fn relu(&self) -> ValueRef {
        ValueRef::from_op(self.data().max(0.0), vec![self.clone()], Op::Relu)
    }

    /// Hyperbolic tangent. Local grad is `1 - tanh(self)^2`.
    #[must_use]
    pub fn tanh(&self) -> ValueRef {
        ValueRef::from_op(self.data().tanh(), vec![self.clone()], Op::Tanh)
    }

    /// Nodes reachable from `self` in reverse topological order: `self` first, and every
    /// node ahead of all of its operands.
    ///
    /// Each node appears once, however many consumers it has. The walk is iterative, so
    /// deep graphs do not grow the call stack.
    #[must_use]
    pub fn topological_order(&self) -> Vec<ValueRef> {
        let mut order = Vec::new();
        let mut visited: HashSet<*const RefCell<Value>> = HashSet::new();
        // (node, operands already pushed)
        let mut stack = vec![(self.clone(), false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                order.push(node);
                continue;
            }
            if !visited.insert(node.as_ptr()) {
                continue;
            }
            stack.push((node.clone(), true));
            for operand in node.0.borrow().prev.iter().rev() {
                if !visited.contains(&operand.as_ptr()) {
                    stack.push((operand.clone(), false));
                }
            }
        }

        order.reverse();
        order
    }

    /// Pushes this node's fully accumulated gradient into its operands.
    fn backward_step(&self) {
        let node = self.0.borrow();
        if node.prev.is_empty() {
            return;
        }
        let operands: Vec<f64> = node.prev.iter().map(ValueRef::data).collect();
        let local_grads = node.op.local_grads(node.data, &operands);
        for (operand, local_grad) in node.prev.iter().zip(local_grads) {
            operand.add_grad(local_grad * node.grad);
        }
    }
}

impl From<f64> for ValueRef {
    fn from(data: f64) -> Self {
        ValueRef::new(data)
    }
}

impl fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        write!(
            f,
            "Value(data={}, grad={}, op={})",
            node.data, node.grad, node.op
        )
    }
}

impl fmt::Display for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={:.4}, grad={:.4})", self.data(), self.grad())
    }
}

// -----------------------------------------------------------------------------
// std::ops — algebra: x + y, x - y, x * y, x / y, -x
// -----------------------------------------------------------------------------

impl Add for &ValueRef {
    type Output = ValueRef;

    fn add(self, rhs: Self) -> ValueRef {
        ValueRef::from_op(
            self.data() + rhs.data(),
            vec![self.clone(), rhs.clone()],
            Op::Add,
        )
    }
}

impl Mul for &ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: Self) -> ValueRef {
        ValueRef::from_op(
            self.data() * rhs.data(),
            vec![self.clone(), rhs.clone()],
            Op::Mul,
        )
    }
}

impl Neg for &ValueRef {
    type Output = ValueRef;

    fn neg(self) -> ValueRef {
        self * &ValueRef::new(-1.0)
    }
}

impl Sub for &ValueRef {
    type Output = ValueRef;

    fn sub(self, rhs: Self) -> ValueRef {
        self + &(-rhs)
    }
}

impl Div for &ValueRef {
    type Output = ValueRef;

    fn div(self, rhs: Self) -> ValueRef {
        self * &rhs.powf(-1.0)
    }
}

impl Neg for ValueRef {
    type Output = ValueRef;

    fn neg(self) -> ValueRef {
        -&self
    }
}

/// Owned and mixed-`f64` forms of a binary operator, all routed through the
/// `&ValueRef op &ValueRef` impl. A plain number becomes a fresh leaf.
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp for ValueRef {
            type Output = ValueRef;

            fn $method(self, rhs: ValueRef) -> ValueRef {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&ValueRef> for ValueRef {
            type Output = ValueRef;

            fn $method(self, rhs: &ValueRef) -> ValueRef {
                (&self).$method(rhs)
            }
        }

        impl $imp<ValueRef> for &ValueRef {
            type Output = ValueRef;

            fn $method(self, rhs: ValueRef) -> ValueRef {
                self.$method(&rhs)
            }
        }

        impl $imp<f64> for &ValueRef {
            type Output = ValueRef;

            fn $method(self, rhs: f64) -> ValueRef {
                self.$method(&ValueRef::new(rhs))
            }
        }

        impl $imp<f64> for ValueRef {
            type Output = ValueRef;

            fn $method(self, rhs: f64) -> ValueRef {
                (&self).$method(&ValueRef::new(rhs))
            }
        }

        impl $imp<&ValueRef> for f64 {
            type Output = ValueRef;

            fn $method(self, rhs: &ValueRef) -> ValueRef {
                (&ValueRef::new(self)).$method(rhs)
            }
        }

        impl $imp<ValueRef> for f64 {
            type Output = ValueRef;

            fn $method(self, rhs: ValueRef) -> ValueRef {
                (&ValueRef::new(self)).$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Sum for ValueRef {
    fn sum<I: Iterator<Item = ValueRef>>(iter: I) -> ValueRef {
        iter.reduce(|acc, v| &acc + &v)
            .unwrap_or_else(|| ValueRef::new(0.0))
    }
}

impl<'a> Sum<&'a ValueRef> for ValueRef {
    fn sum<I: Iterator<Item = &'a ValueRef>>(mut iter: I) -> ValueRef {
        match iter.next() {
            Some(first) => iter.fold(first.clone(), |acc, v| &acc + v),
            None => ValueRef::new(0.0),
        }
    }
}

// -----------------------------------------------------------------------------
// Pow, Exp, Log — (&a).pow(exp), (&a).exp(), (&a).log()
// -----------------------------------------------------------------------------

impl Pow<f64> for &ValueRef {
    type Output = Result<ValueRef, AutogradError>;

    fn pow(self, exp: f64) -> Result<ValueRef, AutogradError> {
        ValueRef::pow(self, exp)
    }
}

impl Exp for &ValueRef {
    type Output = ValueRef;

    fn exp(self) -> ValueRef {
        ValueRef::from_op(self.data().exp(), vec![self.clone()], Op::Exp)
    }
}

impl Log for &ValueRef {
    type Output = ValueRef;

    fn log(self) -> ValueRef {
        ValueRef::from_op(self.data().ln(), vec![self.clone()], Op::Log)
    }
}

impl ScalarNode for ValueRef {
    fn data(&self) -> f64 {
        self.0.borrow().data
    }

    fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    fn backward(&self) {
        let topo = self.topological_order();
        trace!("backward: {} node(s) reachable from root", topo.len());
        self.set_grad(1.0);
        for node in &topo {
            node.backward_step();
        }
    }

    fn zero_grad(&self) {
        self.set_grad(0.0);
    }
}
