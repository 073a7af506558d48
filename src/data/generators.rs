//! Toy dataset generators.

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::{DataError, Dataset, Sample};

/// The four XOR points with `-1.0`/`+1.0` labels.
#[must_use]
pub fn xor() -> Dataset {
    let samples = [
        ([0.0, 0.0], -1.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], -1.0),
    ]
    .into_iter()
    .map(|(x, y)| Sample::new(x.to_vec(), y))
    .collect();
    Dataset(samples)
}

/// Two interleaving half circles in the plane, `n` points in total.
///
/// The upper moon (centered at the origin) is labelled `-1.0`, the lower moon
/// (centered at `(1, 0.5)`) `+1.0`. Each coordinate gets independent Gaussian noise with
/// standard deviation `noise`. Points are emitted upper moon first, evenly spaced along
/// each arc.
///
/// # Errors
///
/// - [`DataError::Empty`] when `n == 0`.
/// - [`DataError::InvalidNoise`] when `noise` is negative or not finite.
pub fn moons<R: Rng + ?Sized>(n: usize, noise: f64, rng: &mut R) -> Result<Dataset, DataError> {
    if n == 0 {
        return Err(DataError::Empty);
    }
    // `Normal::new` accepts a negative std dev, so the sign is checked here.
    if !noise.is_finite() || noise < 0.0 {
        return Err(DataError::InvalidNoise(noise));
    }
    let normal = Normal::new(0.0, noise).map_err(|_| DataError::InvalidNoise(noise))?;

    let n_upper = n / 2 + n % 2;
    let n_lower = n / 2;
    let angle = |i: usize, count: usize| {
        if count > 1 {
            PI * i as f64 / (count - 1) as f64
        } else {
            0.0
        }
    };

    let mut samples = Vec::with_capacity(n);
    for i in 0..n_upper {
        let t = angle(i, n_upper);
        samples.push(Sample::new(
            vec![t.cos() + normal.sample(rng), t.sin() + normal.sample(rng)],
            -1.0,
        ));
    }
    for i in 0..n_lower {
        let t = angle(i, n_lower);
        samples.push(Sample::new(
            vec![1.0 - t.cos() + normal.sample(rng), 0.5 - t.sin() + normal.sample(rng)],
            1.0,
        ));
    }
    Dataset::new(samples)
}
