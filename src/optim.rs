//! Plain stochastic gradient descent over explicitly passed parameters.

use crate::autograd::{ScalarNode, ValueRef};

/// Fraction of the base learning rate removed by the end of a decayed schedule.
const DECAY: f64 = 0.9;

/// SGD optimizer. Owns the learning rate; parameters are handed in on every step.
#[derive(Clone, Debug, PartialEq)]
pub struct Sgd {
    learning_rate: f64,
}

impl Sgd {
    /// Creates an optimizer with a fixed base learning rate.
    #[must_use]
    pub fn new(learning_rate: f64) -> Self {
        Sgd { learning_rate }
    }

    /// Base learning rate.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Linearly decayed rate for `step` out of `total`: `lr * (1 - 0.9 * step / total)`.
    #[must_use]
    pub fn decayed_lr(&self, step: usize, total: usize) -> f64 {
        if total == 0 {
            return self.learning_rate;
        }
        self.learning_rate * (1.0 - DECAY * step as f64 / total as f64)
    }

    /// `p.data -= lr * p.grad` for every parameter, using the base learning rate.
    pub fn step(&self, params: &[ValueRef]) {
        self.step_with_lr(params, self.learning_rate);
    }

    /// Same as [`Sgd::step`] with an explicit rate (e.g. from [`Sgd::decayed_lr`]).
    pub fn step_with_lr(&self, params: &[ValueRef], lr: f64) {
        for p in params {
            p.set_data(p.data() - lr * p.grad());
        }
    }
}
