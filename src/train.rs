//! Training loop: forward, loss, zero_grad, backward, SGD step.
//!
//! The loop owns its optimizer and hyper-parameters and receives the model and data
//! explicitly, so nothing about training lives inside the model.

use log::{debug, info};

use crate::autograd::{ScalarNode, ValueRef};
use crate::config::Config;
use crate::data::Dataset;
use crate::nn::loss::{hinge, l2_penalty, mse};
use crate::nn::{Mlp, Module, NnError};
use crate::optim::Sgd;

/// Which data loss the trainer minimizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LossKind {
    /// Max-margin loss over `-1.0`/`+1.0` labels; accuracy is sign agreement.
    #[default]
    Hinge,
    /// Mean squared error; a prediction counts as correct within 0.5 of its target.
    Mse,
}

/// Outcome of [`Trainer::fit`].
#[derive(Clone, Debug)]
pub struct FitReport {
    /// Total loss (data loss plus L2 penalty) before each update.
    pub losses: Vec<f64>,
    /// Total loss after the last update.
    pub final_loss: f64,
    /// Accuracy after the last update, in `[0, 1]`.
    pub accuracy: f64,
}

/// Full-batch gradient descent driver.
#[derive(Clone, Debug)]
pub struct Trainer {
    sgd: Sgd,
    num_steps: usize,
    loss_log_every: usize,
    alpha: f64,
    loss: LossKind,
}

impl Trainer {
    /// Creates a trainer with hinge loss, no regularization, and logging every 10 steps.
    #[must_use]
    pub fn new(sgd: Sgd, num_steps: usize) -> Self {
        Trainer {
            sgd,
            num_steps,
            loss_log_every: 10,
            alpha: 0.0,
            loss: LossKind::default(),
        }
    }

    /// Builds a trainer from the validated run configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Trainer::new(Sgd::new(config.learning_rate), config.num_steps)
            .with_alpha(config.alpha)
            .with_loss_log_every(config.loss_log_every)
    }

    /// L2 regularization strength.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_loss(mut self, loss: LossKind) -> Self {
        self.loss = loss;
        self
    }

    /// Log progress every `every` steps (0 disables periodic logging).
    #[must_use]
    pub fn with_loss_log_every(mut self, every: usize) -> Self {
        self.loss_log_every = every;
        self
    }

    /// One prediction per sample.
    ///
    /// # Errors
    ///
    /// [`NnError::NonScalarOutput`] if the model does not have exactly one output, or
    /// [`NnError::ArityMismatch`] if the data width differs from the model's.
    pub fn predict(&self, model: &Mlp, data: &Dataset) -> Result<Vec<ValueRef>, NnError> {
        if model.out_degree() != 1 {
            return Err(NnError::NonScalarOutput {
                width: model.out_degree(),
            });
        }
        data.samples()
            .iter()
            .map(|s| {
                model
                    .forward_values(&s.inputs)
                    .map(|mut out| out.swap_remove(0))
            })
            .collect()
    }

    /// Total loss node over the whole dataset and the current accuracy.
    ///
    /// # Errors
    ///
    /// Same as [`Trainer::predict`].
    pub fn evaluate(&self, model: &Mlp, data: &Dataset) -> Result<(ValueRef, f64), NnError> {
        let preds = self.predict(model, data)?;
        let targets = data.targets();
        let data_loss = match self.loss {
            LossKind::Hinge => hinge(&preds, &targets)?,
            LossKind::Mse => mse(&preds, &targets)?,
        };
        let total = if self.alpha > 0.0 {
            &data_loss + &l2_penalty(&model.parameters(), self.alpha)
        } else {
            data_loss
        };

        let correct = preds
            .iter()
            .zip(&targets)
            .filter(|(p, t)| match self.loss {
                LossKind::Hinge => (p.data() > 0.0) == (**t > 0.0),
                LossKind::Mse => (p.data() - **t).abs() < 0.5,
            })
            .count();
        Ok((total, correct as f64 / preds.len() as f64))
    }

    /// Runs `num_steps` full-batch updates on `model`.
    ///
    /// # Errors
    ///
    /// Same as [`Trainer::predict`].
    pub fn fit(&self, model: &Mlp, data: &Dataset) -> Result<FitReport, NnError> {
        let params = model.parameters();
        let mut losses = Vec::with_capacity(self.num_steps);
        debug!(
            "training {} parameters on {} samples for {} steps",
            params.len(),
            data.len(),
            self.num_steps
        );

        for step in 0..self.num_steps {
            let (loss, accuracy) = self.evaluate(model, data)?;
            model.zero_grad();
            loss.backward();

            let lr = self.sgd.decayed_lr(step, self.num_steps);
            self.sgd.step_with_lr(&params, lr);
            losses.push(loss.data());

            if step == 0 || (self.loss_log_every > 0 && (step + 1) % self.loss_log_every == 0) {
                info!(
                    "step {:4} / {:4} | loss {:.4} | accuracy {:5.1}%",
                    step + 1,
                    self.num_steps,
                    loss.data(),
                    accuracy * 100.0
                );
            }
        }

        let (loss, accuracy) = self.evaluate(model, data)?;
        Ok(FitReport {
            losses,
            final_loss: loss.data(),
            accuracy,
        })
    }
}
