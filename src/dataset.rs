//! A typed container pairing a feature matrix with its label vector.
//!
//! Row counts are checked once, at construction, so a shape mismatch
//! surfaces at the boundary instead of deep inside a dot product.

use crate::error::{Error, Result};
use crate::float::Float;
use ndarray::{s, Array1, Array2, ArrayBase, Data, Ix2};

/// A labeled dataset: one row of features and one label per sample.
///
/// By convention the first column of `records` is the constant-1 intercept
/// column (see [`intercept_column`]); the trained parameter at index 0 is
/// then the bias and is exempt from regularization.
#[derive(Debug, Clone)]
pub struct Dataset<F, C> {
    records: Array2<F>,
    targets: Array1<C>,
}

impl<F, C> Dataset<F, C> {
    /// Pair a feature matrix with its labels, failing fast when the label
    /// vector length does not equal the feature-matrix row count.
    pub fn new(records: Array2<F>, targets: Array1<C>) -> Result<Dataset<F, C>> {
        if records.nrows() != targets.len() {
            return Err(Error::MismatchedShapes(records.nrows(), targets.len()));
        }
        Ok(Dataset { records, targets })
    }

    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    pub fn targets(&self) -> &Array1<C> {
        &self.targets
    }

    /// Number of samples (rows).
    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    /// Number of feature columns, intercept column included.
    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }
}

/// Prepend the constant-1 intercept column to a raw feature matrix.
pub fn intercept_column<F: Float, A: Data<Elem = F>>(x: &ArrayBase<A, Ix2>) -> Array2<F> {
    let mut out = Array2::ones((x.nrows(), x.ncols() + 1));
    out.slice_mut(s![.., 1..]).assign(x);
    out
}
