use crate::param::ParamVec;
use argmin::prelude::{ArgminFloat, ArgminMul};
use ndarray::NdFloat;
use num_traits::FromPrimitive;

/// A Float trait that captures the requirements we need for the various
/// places we use floats. These are basically imposed by NdArray and Argmin.
pub trait Float:
    ArgminFloat + NdFloat + Default + Clone + FromPrimitive + ArgminMul<ParamVec<Self>, ParamVec<Self>>
{
}

impl ArgminMul<ParamVec<Self>, ParamVec<Self>> for f64 {
    fn mul(&self, other: &ParamVec<Self>) -> ParamVec<Self> {
        ParamVec(&other.0 * *self)
    }
}

impl ArgminMul<ParamVec<Self>, ParamVec<Self>> for f32 {
    fn mul(&self, other: &ParamVec<Self>) -> ParamVec<Self> {
        ParamVec(&other.0 * *self)
    }
}

impl Float for f32 {}
impl Float for f64 {}
