//! Exact cone boundaries from the roots of the cone polynomial.
//!
//! With `m = ⌈n/2⌉`, ranks `1..=m` of `P(X) = T_n(−X) − 1` give the boundary
//! cosines of the upper half plane in counterclockwise order (rank 1 is the
//! anchor itself). The lower half is either the antipodes of the upper half
//! (even `n`) or the same cosines again in descending rank with negative sine
//! (odd `n`, ranks `m..=2`).
//!
//! The polynomial is always built over `BigRational`: its coefficients grow
//! like `2^n` and must not round, whatever `T` the directions use.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use num::BigRational;

use super::{append_or_rollback, check_cone_count, ConeBoundaries};
use crate::error::ConeResult;
use crate::geom::{Direction2, Field, Rot2};
use crate::poly::{cone_polynomial, Polynomial};
use crate::roots::ExactKernel;

#[derive(Clone, Copy, Debug)]
enum HalfPlane {
    Upper,
    Lower,
}

/// Exact strategy with root-isolation kernel `K`; the direction field is
/// whatever `T` the kernel implements `ExactKernel<T>` for.
#[derive(Debug)]
pub struct Exact<K> {
    kernel: K,
    cache: Option<Mutex<HashMap<u32, Arc<Polynomial<BigRational>>>>>,
}

impl<K> Exact<K> {
    /// Rebuild the cone polynomial on every call.
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            cache: None,
        }
    }

    /// Keep built polynomials keyed by cone number.
    pub fn with_cache(kernel: K) -> Self {
        Self {
            kernel,
            cache: Some(Mutex::new(HashMap::new())),
        }
    }

    #[inline]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Number of cached polynomials (0 without a cache).
    pub fn cached_polynomials(&self) -> usize {
        self.cache
            .as_ref()
            .and_then(|c| c.lock().ok().map(|m| m.len()))
            .unwrap_or(0)
    }

    fn polynomial(&self, cone_number: u32) -> Arc<Polynomial<BigRational>> {
        if let Some(Ok(mut map)) = self.cache.as_ref().map(|c| c.lock()) {
            return map
                .entry(cone_number)
                .or_insert_with(|| Arc::new(cone_polynomial(cone_number)))
                .clone();
        }
        // No cache, or a poisoned one: build afresh.
        Arc::new(cone_polynomial(cone_number))
    }

    fn boundary_rotation<T: Field>(
        &self,
        poly: &Polynomial<BigRational>,
        rank: usize,
        half: HalfPlane,
    ) -> ConeResult<Rot2<T>>
    where
        K: ExactKernel<T>,
    {
        let cos = -ExactKernel::<T>::kth_smallest_root(&self.kernel, poly, rank)?;
        let sin = self.kernel.sqrt(&(T::one() - cos.clone() * cos.clone()))?;
        tracing::trace!(rank, ?half, "boundary root isolated");
        Ok(match half {
            HalfPlane::Upper => Rot2::new(cos, sin),
            HalfPlane::Lower => Rot2::new(cos, -sin),
        })
    }
}

impl<T: Field, K: ExactKernel<T>> ConeBoundaries<T> for Exact<K> {
    fn compute_into(
        &self,
        cone_number: u32,
        initial: &Direction2<T>,
        out: &mut Vec<Direction2<T>>,
    ) -> ConeResult<usize> {
        check_cone_count(cone_number)?;
        let poly = self.polynomial(cone_number);
        let m = cone_number.div_ceil(2) as usize;
        let even = cone_number % 2 == 0;
        tracing::debug!(cone_number, degree = poly.degree(), even, "exact cone boundaries");

        append_or_rollback(out, |out| {
            out.reserve(cone_number as usize);
            let start = out.len();
            // Rank 1 is the root −1, i.e. the identity rotation.
            out.push(initial.clone());
            for rank in 2..=m {
                let rot = self.boundary_rotation(&poly, rank, HalfPlane::Upper)?;
                out.push(initial.rotated(&rot));
            }
            if even {
                let antipodes: Vec<_> = out[start..].iter().map(|d| -d).collect();
                out.extend(antipodes);
            } else {
                for rank in (2..=m).rev() {
                    let rot = self.boundary_rotation(&poly, rank, HalfPlane::Lower)?;
                    out.push(initial.rotated(&rot));
                }
            }
            Ok(())
        })
    }
}
