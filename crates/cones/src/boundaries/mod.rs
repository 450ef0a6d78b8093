//! Cone boundary computers.
//!
//! Purpose
//! - `ConeBoundaries<T>`: one contract, "emit `n` boundary directions starting
//!   at `initial`, counterclockwise".
//! - `Approximate`: trigonometry on `f64`, each angle computed independently.
//! - `Exact<K>`: polynomial roots through an injected `ExactKernel`.
//! - `ConeBoundaryComputer`: `f64` facade selected by an explicit `Strategy`.
//!
//! On failure, `compute_into` leaves the output vector at its original length.
//!
//! Code cross-refs: `poly::cone_polynomial`, `roots::ExactKernel`, `cone_set::ConeSet`.

mod approx;
mod computer;
mod exact;

pub use approx::Approximate;
pub use computer::{ConeBoundaryComputer, ParseStrategyError, Strategy};
pub use exact::Exact;

use crate::cone_set::ConeSet;
use crate::error::{ConeError, ConeResult};
use crate::geom::{Direction2, Field};

/// Boundary directions of `cone_number` equal cones around a point.
pub trait ConeBoundaries<T: Field> {
    /// Append `cone_number` directions to `out`, the first being `initial`
    /// itself, the rest in counterclockwise order. Returns the pass-the-end
    /// index into `out`.
    fn compute_into(
        &self,
        cone_number: u32,
        initial: &Direction2<T>,
        out: &mut Vec<Direction2<T>>,
    ) -> ConeResult<usize>;

    /// Fresh `ConeSet` of `cone_number` directions.
    fn compute(&self, cone_number: u32, initial: &Direction2<T>) -> ConeResult<ConeSet<T>> {
        let mut out = Vec::with_capacity(cone_number as usize);
        self.compute_into(cone_number, initial, &mut out)?;
        Ok(ConeSet::from_vec(out))
    }
}

#[inline]
pub(crate) fn check_cone_count(cone_number: u32) -> ConeResult<()> {
    if cone_number < 2 {
        return Err(ConeError::InvalidConeCount { cone_number });
    }
    Ok(())
}

/// Run `fill` on `out`, truncating back to the starting length on error.
pub(crate) fn append_or_rollback<T: Field>(
    out: &mut Vec<Direction2<T>>,
    fill: impl FnOnce(&mut Vec<Direction2<T>>) -> ConeResult<()>,
) -> ConeResult<usize> {
    let start = out.len();
    match fill(out) {
        Ok(()) => Ok(out.len()),
        Err(e) => {
            out.truncate(start);
            Err(e)
        }
    }
}
