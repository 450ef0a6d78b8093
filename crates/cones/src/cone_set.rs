//! Output of a cone computation.
//!
//! Invariants (established by the computers, not re-checked here):
//! - `len() == n` and element 0 is the initial direction as given.
//! - Consecutive elements, including last → first, are `2π/n` apart
//!   counterclockwise.
//! - For even `n`, element `i + n/2` is the negation of element `i`.
//!
//! `max_spacing_error` and `max_antipodal_error` measure the angular invariants
//! on `f64` sets.

use std::f64::consts::{PI, TAU};
use std::ops::Index;

use nalgebra::Scalar;

use crate::geom::Direction2;

/// Boundary directions in counterclockwise order.
#[derive(Clone, Debug, PartialEq)]
pub struct ConeSet<T: Scalar> {
    dirs: Vec<Direction2<T>>,
}

impl<T: Scalar> ConeSet<T> {
    pub(crate) fn from_vec(dirs: Vec<Direction2<T>>) -> Self {
        Self { dirs }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    #[inline]
    pub fn directions(&self) -> &[Direction2<T>] {
        &self.dirs
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Direction2<T>> {
        self.dirs.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Direction2<T>> {
        self.dirs
    }
}

impl ConeSet<f64> {
    /// Largest deviation (radians) of a consecutive counterclockwise gap from `2π/n`.
    pub fn max_spacing_error(&self) -> f64 {
        let n = self.dirs.len();
        if n == 0 {
            return 0.0;
        }
        let step = TAU / n as f64;
        (0..n)
            .map(|i| {
                let gap = self.dirs[i].ccw_angle_to(&self.dirs[(i + 1) % n]);
                wrap_pi(gap - step).abs()
            })
            .fold(0.0, f64::max)
    }

    /// Largest angle between element `i + n/2` and the negation of element `i`.
    /// Zero for odd `n`, where the property does not apply.
    pub fn max_antipodal_error(&self) -> f64 {
        let n = self.dirs.len();
        if n % 2 != 0 {
            return 0.0;
        }
        let half = n / 2;
        (0..half)
            .map(|i| self.dirs[i + half].angle_between(&-&self.dirs[i]))
            .fold(0.0, f64::max)
    }
}

/// Map an angle into `(−π, π]`.
fn wrap_pi(theta: f64) -> f64 {
    let t = (theta + PI).rem_euclid(TAU) - PI;
    if t <= -PI {
        t + TAU
    } else {
        t
    }
}

impl<T: Scalar> Index<usize> for ConeSet<T> {
    type Output = Direction2<T>;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.dirs[i]
    }
}

impl<T: Scalar> IntoIterator for ConeSet<T> {
    type Item = Direction2<T>;
    type IntoIter = std::vec::IntoIter<Direction2<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.dirs.into_iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a ConeSet<T> {
    type Item = &'a Direction2<T>;
    type IntoIter = std::slice::Iter<'a, Direction2<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.dirs.iter()
    }
}
