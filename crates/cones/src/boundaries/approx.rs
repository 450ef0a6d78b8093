//! Floating-point cone boundaries.
//!
//! Fast and close, but not exact: the emitted directions match the exact
//! strategy only within `cfg::ANGLE_EPS`, and even-`n` antipodes are not
//! bit-exact negations.

use std::f64::consts::TAU;

use super::{check_cone_count, ConeBoundaries};
use crate::error::ConeResult;
use crate::geom::{Direction2, Rot2};

/// Floating-point cone boundaries via `sin`/`cos` of `i·2π/n`.
///
/// Every angle is computed from `i` directly, so rounding does not accumulate
/// along the sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct Approximate;

impl ConeBoundaries<f64> for Approximate {
    fn compute_into(
        &self,
        cone_number: u32,
        initial: &Direction2<f64>,
        out: &mut Vec<Direction2<f64>>,
    ) -> ConeResult<usize> {
        check_cone_count(cone_number)?;
        out.reserve(cone_number as usize);
        out.push(initial.clone());
        let cone_angle = TAU / cone_number as f64;
        for i in 1..cone_number {
            out.push(initial.rotated(&Rot2::from_angle(i as f64 * cone_angle)));
        }
        Ok(out.len())
    }
}
