//! Build [`Config`] from environment variables.
//!
//! Uses [`env_string`], [`env_parsed`] and [`env_list`] to read env vars with a single
//! place for key names (see the `constants` submodule) and typed errors ([`ConfigError`]).

use super::constants::{
    ENV_ALPHA, ENV_LAYER_SIZES, ENV_LEARNING_RATE, ENV_LOSS_LOG_EVERY, ENV_NOISE, ENV_NUM_STEPS,
    ENV_PREFIX, ENV_SAMPLES, ENV_SEED,
};
use super::Config;
use super::ConfigError;

/// Returns the full environment variable key for a given suffix (e.g. `SEED` → `MICROGRAD_SEED`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// Returns `Some(value)` if the variable is set and valid UTF-8, `None` if unset.
/// Returns `Err(ConfigError::EnvVar)` if the variable is set but invalid (e.g. not Unicode).
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into type `T`.
///
/// Returns `Ok(Some(value))` if set and parse succeeds, `Ok(None)` if unset, and
/// `Err(ConfigError::Parse)` if set but parsing fails.
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    parse_value(key, &s, s.trim()).map(Some)
}

/// Reads a comma-separated list (e.g. `16,16,1`) and parses every item into `T`.
///
/// Whitespace around items is ignored. An empty item fails to parse.
pub fn env_list<T>(key: &str) -> Result<Option<Vec<T>>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    s.split(',')
        .map(|item| parse_value(key, &s, item.trim()))
        .collect::<Result<Vec<T>, _>>()
        .map(Some)
}

fn parse_value<T>(key: &str, raw: &str, item: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    item.parse().map_err(|e: T::Err| ConfigError::Parse {
        key: key.to_string(),
        value: raw.to_string(),
        message: e.to_string(),
    })
}

/// Builds [`Config`] from environment variables, falling back to [`Config::default`] for unset values.
///
/// Returns [`ConfigError`] if any *set* variable fails to parse (e.g. `MICROGRAD_SEED=abc`).
/// The result is not validated; call [`Config::validate`] before use.
pub fn from_env() -> Result<Config, ConfigError> {
    let default = Config::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let layer_sizes =
        env_list::<usize>(&env_key(ENV_LAYER_SIZES))?.unwrap_or(default.layer_sizes);
    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let alpha = env_parsed::<f64>(&env_key(ENV_ALPHA))?.unwrap_or(default.alpha);
    let num_steps = env_parsed::<usize>(&env_key(ENV_NUM_STEPS))?.unwrap_or(default.num_steps);
    let loss_log_every =
        env_parsed::<usize>(&env_key(ENV_LOSS_LOG_EVERY))?.unwrap_or(default.loss_log_every);
    let samples = env_parsed::<usize>(&env_key(ENV_SAMPLES))?.unwrap_or(default.samples);
    let noise = env_parsed::<f64>(&env_key(ENV_NOISE))?.unwrap_or(default.noise);

    Ok(Config {
        seed,
        layer_sizes,
        learning_rate,
        alpha,
        num_steps,
        loss_log_every,
        samples,
        noise,
    })
}
