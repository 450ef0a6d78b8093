use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::Neg;

use nalgebra::{Scalar, Vector2};

use super::{Field, Rot2};

/// Direction in the plane: a representative vector, equal to every positive
/// multiple of itself.
///
/// No normalization is performed; `PartialEq` compares representatives, so two
/// equal directions built from different scalings compare unequal. Use
/// `same_direction_eps` for the geometric test on `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Direction2<T: Scalar> {
    v: Vector2<T>,
}

impl<T: Field> Direction2<T> {
    #[inline]
    pub fn new(dx: T, dy: T) -> Self {
        Self {
            v: Vector2::new(dx, dy),
        }
    }

    /// `None` for the zero vector, which has no direction.
    pub fn try_new(dx: T, dy: T) -> Option<Self> {
        if dx.is_zero() && dy.is_zero() {
            None
        } else {
            Some(Self::new(dx, dy))
        }
    }

    #[inline]
    pub fn from_vector(v: Vector2<T>) -> Self {
        Self { v }
    }

    #[inline]
    pub fn dx(&self) -> &T {
        &self.v.x
    }

    #[inline]
    pub fn dy(&self) -> &T {
        &self.v.y
    }

    #[inline]
    pub fn vector(&self) -> &Vector2<T> {
        &self.v
    }

    #[inline]
    pub fn into_vector(self) -> Vector2<T> {
        self.v
    }

    /// Rotate counterclockwise by `rot`.
    #[inline]
    pub fn rotated(&self, rot: &Rot2<T>) -> Self {
        Self { v: rot.apply(&self.v) }
    }
}

impl Direction2<f64> {
    /// Unit direction at angle `theta` (radians, counterclockwise from +x).
    pub fn from_angle(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Polar angle in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.v.y.atan2(self.v.x)
    }

    /// Counterclockwise angle from `self` to `other`, in `[0, 2π)`.
    pub fn ccw_angle_to(&self, other: &Self) -> f64 {
        let cross = self.v.x * other.v.y - self.v.y * other.v.x;
        let dot = self.v.dot(&other.v);
        let theta = cross.atan2(dot);
        if theta < 0.0 {
            theta + TAU
        } else {
            theta
        }
    }

    /// Unsigned angle between the two directions, in `[0, π]`.
    pub fn angle_between(&self, other: &Self) -> f64 {
        let theta = self.ccw_angle_to(other);
        if theta > PI {
            TAU - theta
        } else {
            theta
        }
    }

    /// Geometric equality up to `eps` radians.
    pub fn same_direction_eps(&self, other: &Self, eps: f64) -> bool {
        self.angle_between(other) <= eps
    }
}

impl<T: Field> Neg for Direction2<T> {
    type Output = Direction2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Field> Neg for &Direction2<T> {
    type Output = Direction2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Direction2::new(-self.v.x.clone(), -self.v.y.clone())
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Direction2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v.x, self.v.y)
    }
}
