//! Configuration for the demo training run: model shape, optimizer, and dataset.
//!
//! Load from environment via [`from_env`] and validate with [`Config::validate`].
//! Default values and env key names are centralized in the `constants` submodule.

mod builder;
mod constants;
mod error;

use constants::{
    DEFAULT_ALPHA, DEFAULT_LAYER_SIZES, DEFAULT_LEARNING_RATE, DEFAULT_LOSS_LOG_EVERY,
    DEFAULT_NOISE, DEFAULT_NUM_STEPS, DEFAULT_SAMPLES, DEFAULT_SEED,
};

pub use builder::{env_key, env_list, env_parsed, env_string, from_env};
pub use error::ConfigError;

/// Run configuration.
///
/// Use [`from_env`] to build from environment variables and [`Config::validate`] before use.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Seed for RNG (weight init and dataset noise).
    pub seed: u64,
    /// Width of each MLP layer; the last must be 1.
    pub layer_sizes: Vec<usize>,
    /// Base SGD learning rate (decayed linearly over the run).
    pub learning_rate: f64,
    /// L2 regularization strength.
    pub alpha: f64,
    /// Number of full-batch training steps.
    pub num_steps: usize,
    /// Log loss every this many steps (and at step 1).
    pub loss_log_every: usize,
    /// Number of points in the generated dataset.
    pub samples: usize,
    /// Standard deviation of the Gaussian noise added to each point.
    pub noise: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            layer_sizes: DEFAULT_LAYER_SIZES.to_vec(),
            learning_rate: DEFAULT_LEARNING_RATE,
            alpha: DEFAULT_ALPHA,
            num_steps: DEFAULT_NUM_STEPS,
            loss_log_every: DEFAULT_LOSS_LOG_EVERY,
            samples: DEFAULT_SAMPLES,
            noise: DEFAULT_NOISE,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(&last) = self.layer_sizes.last() else {
            return Err(ConfigError::Validation(
                "layer_sizes must not be empty".to_string(),
            ));
        };
        if self.layer_sizes.contains(&0) {
            return Err(ConfigError::Validation(format!(
                "layer_sizes ({:?}) must not contain 0",
                self.layer_sizes
            )));
        }
        if last != 1 {
            return Err(ConfigError::Validation(format!(
                "final layer must have width 1, got {last}"
            )));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(
                "learning_rate must be finite and greater than 0".to_string(),
            ));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ConfigError::Validation(
                "alpha must be finite and non-negative".to_string(),
            ));
        }
        if self.loss_log_every == 0 {
            return Err(ConfigError::Validation(
                "loss_log_every must be greater than 0".to_string(),
            ));
        }
        if self.samples == 0 {
            return Err(ConfigError::Validation(
                "samples must be greater than 0".to_string(),
            ));
        }
        if !self.noise.is_finite() || self.noise < 0.0 {
            return Err(ConfigError::Validation(
                "noise must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
