use std::ops::Neg;

use nalgebra::Scalar;
use num::{FromPrimitive, Num};

/// Ordered field with the conversions the cone computers need.
///
/// Satisfied by `f64` and by exact types such as `num::BigRational`.
pub trait Field: Scalar + Num + Neg<Output = Self> + PartialOrd + FromPrimitive {}

impl<T> Field for T where T: Scalar + Num + Neg<Output = T> + PartialOrd + FromPrimitive {}
