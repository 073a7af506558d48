//! Central place for all configuration constants.
//!
//! Default values and environment variable key names used by the config builder.

/// Environment variable prefix (e.g. `MICROGRAD_SEED`).
pub(crate) const ENV_PREFIX: &str = "MICROGRAD_";

// --- Env key suffixes (full key = ENV_PREFIX + suffix) ---

pub(crate) const ENV_SEED: &str = "SEED";
pub(crate) const ENV_LAYER_SIZES: &str = "LAYER_SIZES";
pub(crate) const ENV_LEARNING_RATE: &str = "LEARNING_RATE";
pub(crate) const ENV_ALPHA: &str = "ALPHA";
pub(crate) const ENV_NUM_STEPS: &str = "NUM_STEPS";
pub(crate) const ENV_LOSS_LOG_EVERY: &str = "LOSS_LOG_EVERY";
pub(crate) const ENV_SAMPLES: &str = "SAMPLES";
pub(crate) const ENV_NOISE: &str = "NOISE";

// --- Default values ---

pub(crate) const DEFAULT_SEED: u64 = 1337;
pub(crate) const DEFAULT_LAYER_SIZES: [usize; 3] = [16, 16, 1];
pub(crate) const DEFAULT_LEARNING_RATE: f64 = 1.0;
pub(crate) const DEFAULT_ALPHA: f64 = 1e-4;
pub(crate) const DEFAULT_NUM_STEPS: usize = 100;
pub(crate) const DEFAULT_LOSS_LOG_EVERY: usize = 10;
pub(crate) const DEFAULT_SAMPLES: usize = 100;
pub(crate) const DEFAULT_NOISE: f64 = 0.1;
