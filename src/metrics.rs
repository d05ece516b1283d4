//! Performance metrics for classifier evaluation.

use crate::error::{Error, Result};
use ndarray::{ArrayBase, Data, Ix1};

/// Fraction of predictions equal to the ground truth, in `[0, 1]`.
///
/// Pure function of its two inputs; fails fast when the vectors differ in
/// length.
pub fn accuracy<C, A, B>(
    prediction: &ArrayBase<A, Ix1>,
    ground_truth: &ArrayBase<B, Ix1>,
) -> Result<f64>
where
    C: PartialEq,
    A: Data<Elem = C>,
    B: Data<Elem = C>,
{
    if prediction.len() != ground_truth.len() {
        return Err(Error::MismatchedShapes(prediction.len(), ground_truth.len()));
    }
    let hits = prediction
        .iter()
        .zip(ground_truth.iter())
        .filter(|(p, t)| p == t)
        .count();
    Ok(hits as f64 / prediction.len() as f64)
}
