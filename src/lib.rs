//! # micrograd
//!
//! A scalar-valued reverse-mode autograd engine and a small neural network library on
//! top of it. Every value is a node in a dynamically built graph; calling
//! [`backward`](autograd::ScalarNode::backward) on a result fills in `grad` for every node
//! it depends on.
//!
//! ```
//! use micrograd::{ScalarNode, ValueRef};
//!
//! let a = ValueRef::new(2.0);
//! let b = ValueRef::new(3.0);
//! let c = &a * &b;
//! c.backward();
//! assert_eq!(a.grad(), 3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod config;
pub mod data;
pub mod nn;
pub mod optim;
pub mod train;

pub use autograd::{AutogradError, Exp, Log, Op, Pow, ScalarNode, ValueRef};
pub use nn::{Layer, Mlp, Module, Neuron, NnError};
pub use optim::Sgd;
pub use train::{FitReport, LossKind, Trainer};
