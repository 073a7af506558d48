//! Small labelled datasets for training and testing models.
//!
//! This module defines the **models** ([`Sample`], [`Dataset`]), the **error** ([`DataError`]),
//! and toy **generators** ([`xor`], [`moons`]) that produce validated datasets.

mod error;
mod generators;
mod types;

pub use error::DataError;
pub use generators::{moons, xor};
pub use types::{Dataset, Sample};
