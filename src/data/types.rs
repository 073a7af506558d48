//! Types for labelled data: [`Sample`] (inputs plus target) and [`Dataset`] (validated list).

use super::DataError;

/// One labelled example.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Model inputs.
    pub inputs: Vec<f64>,
    /// Expected output (a regression target, or `-1.0`/`+1.0` for classification).
    pub target: f64,
}

impl Sample {
    /// Pairs `inputs` with `target`.
    #[must_use]
    pub fn new(inputs: Vec<f64>, target: f64) -> Self {
        Sample { inputs, target }
    }
}

/// A non-empty list of [`Sample`]s that all have the same input width.
#[derive(Clone, Debug)]
pub struct Dataset(pub(super) Vec<Sample>);

impl Dataset {
    /// Builds a dataset, checking that it is non-empty and uniformly shaped.
    ///
    /// # Errors
    ///
    /// - [`DataError::Empty`] when `samples` is empty.
    /// - [`DataError::ArityMismatch`] when a sample's width differs from the first one's.
    pub fn new(samples: Vec<Sample>) -> Result<Self, DataError> {
        let Some(first) = samples.first() else {
            return Err(DataError::Empty);
        };
        let expected = first.inputs.len();
        if let Some((index, s)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| s.inputs.len() != expected)
        {
            return Err(DataError::ArityMismatch {
                index,
                expected,
                actual: s.inputs.len(),
            });
        }
        Ok(Dataset(samples))
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no samples (never the case for a valid [`Dataset`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Input width shared by every sample.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.0[0].inputs.len()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.0
    }

    /// Targets in sample order.
    #[must_use]
    pub fn targets(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.target).collect()
    }
}
