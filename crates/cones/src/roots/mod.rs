//! Root-isolation kernels for the exact cone computer.
//!
//! Purpose
//! - `ExactKernel<T>`: the two capabilities `Exact` needs from a number type,
//!   namely the k-th smallest distinct real root of a polynomial and a square
//!   root.
//! - `SturmKernel`: bundled `f64` kernel; roots are separated once per
//!   polynomial with a Sturm chain and refined by exact bisection, only the
//!   final root is rounded.
//!
//! Polynomials always arrive with exact `BigRational` coefficients; only the
//! returned roots and square roots live in `T`.
//!
//! Kernels are injected into `boundaries::Exact`, so tests can swap in a
//! scripted kernel with known roots.

mod sturm;

pub use sturm::SturmKernel;

use num::BigRational;

use crate::error::KernelError;
use crate::geom::Field;
use crate::poly::Polynomial;

/// Root isolation and square root over a field `T`.
pub trait ExactKernel<T: Field> {
    /// The `k`-th smallest distinct real root of `poly` (1-based).
    fn kth_smallest_root(&self, poly: &Polynomial<BigRational>, k: usize)
        -> Result<T, KernelError>;

    /// Non-negative square root of `value`.
    fn sqrt(&self, value: &T) -> Result<T, KernelError>;
}

impl<T: Field, K: ExactKernel<T> + ?Sized> ExactKernel<T> for &K {
    fn kth_smallest_root(
        &self,
        poly: &Polynomial<BigRational>,
        k: usize,
    ) -> Result<T, KernelError> {
        (**self).kth_smallest_root(poly, k)
    }
    fn sqrt(&self, value: &T) -> Result<T, KernelError> {
        (**self).sqrt(value)
    }
}

impl<T: Field, K: ExactKernel<T> + ?Sized> ExactKernel<T> for Box<K> {
    fn kth_smallest_root(
        &self,
        poly: &Polynomial<BigRational>,
        k: usize,
    ) -> Result<T, KernelError> {
        (**self).kth_smallest_root(poly, k)
    }
    fn sqrt(&self, value: &T) -> Result<T, KernelError> {
        (**self).sqrt(value)
    }
}

#[cfg(test)]
mod tests;
