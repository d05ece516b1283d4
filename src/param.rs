//! A newtype over `ndarray`'s `Array1`, used as the parameter vector handed
//! to the optimizer.
//!
//! Argmin only knows about its own math traits, so the handful of operations
//! its solvers need are implemented here by forwarding to `ndarray`. The
//! newtype also lets the rest of the crate stay generic over `f32`/`f64`.

use crate::float::Float;
use argmin::prelude::*;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ParamVec<F>(pub Array1<F>);

impl<F> ParamVec<F> {
    #[inline]
    pub fn as_array(&self) -> &Array1<F> {
        &self.0
    }
}

impl<F: Float> ArgminSub<ParamVec<F>, ParamVec<F>> for ParamVec<F> {
    fn sub(&self, other: &ParamVec<F>) -> ParamVec<F> {
        ParamVec(&self.0 - &other.0)
    }
}

impl<F: Float> ArgminAdd<ParamVec<F>, ParamVec<F>> for ParamVec<F> {
    fn add(&self, other: &ParamVec<F>) -> ParamVec<F> {
        ParamVec(&self.0 + &other.0)
    }
}

impl<F: Float> ArgminDot<ParamVec<F>, F> for ParamVec<F> {
    fn dot(&self, other: &ParamVec<F>) -> F {
        self.0.dot(&other.0)
    }
}

impl<F: Float> ArgminNorm<F> for ParamVec<F> {
    fn norm(&self) -> F {
        self.0.dot(&self.0).sqrt()
    }
}

impl<F: Float> ArgminMul<F, ParamVec<F>> for ParamVec<F> {
    fn mul(&self, other: &F) -> ParamVec<F> {
        ParamVec(&self.0 * *other)
    }
}

impl<F: Float> ArgminMul<ParamVec<F>, ParamVec<F>> for ParamVec<F> {
    fn mul(&self, other: &ParamVec<F>) -> ParamVec<F> {
        ParamVec(&self.0 * &other.0)
    }
}
