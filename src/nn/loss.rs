//! Loss functions built from the same scalar operations as the models.

use super::NnError;
use crate::autograd::ValueRef;

/// `(pred - target)^2`.
///
/// # Errors
///
/// Never fails in practice; the exponent is a constant. Kept fallible because it is
/// built on [`ValueRef::pow`].
pub fn squared_error(pred: &ValueRef, target: f64) -> Result<ValueRef, NnError> {
    Ok((pred - target).pow(2.0)?)
}

/// Mean of the squared errors over a batch.
///
/// # Errors
///
/// Returns [`NnError::LengthMismatch`] if the slices differ in length, or
/// [`NnError::EmptyBatch`] if they are empty.
pub fn mse(preds: &[ValueRef], targets: &[f64]) -> Result<ValueRef, NnError> {
    check_batch(preds.len(), targets.len())?;
    let total = preds
        .iter()
        .zip(targets)
        .map(|(p, &t)| squared_error(p, t))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .sum::<ValueRef>();
    Ok(total / preds.len() as f64)
}

/// Max-margin loss `mean(relu(1 - y_i * s_i))` for labels in `{-1, +1}`.
///
/// # Errors
///
/// Same as [`mse`].
pub fn hinge(scores: &[ValueRef], labels: &[f64]) -> Result<ValueRef, NnError> {
    check_batch(scores.len(), labels.len())?;
    let total: ValueRef = scores
        .iter()
        .zip(labels)
        .map(|(s, &y)| (1.0 - s * y).relu())
        .sum();
    Ok(total / scores.len() as f64)
}

/// L2 regularization term `alpha * sum(p^2)`.
#[must_use]
pub fn l2_penalty(params: &[ValueRef], alpha: f64) -> ValueRef {
    alpha * params.iter().map(|p| p * p).sum::<ValueRef>()
}

fn check_batch(predictions: usize, targets: usize) -> Result<(), NnError> {
    if predictions != targets {
        return Err(NnError::LengthMismatch {
            predictions,
            targets,
        });
    }
    if predictions == 0 {
        return Err(NnError::EmptyBatch);
    }
    Ok(())
}
