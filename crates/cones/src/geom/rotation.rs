use nalgebra::{Matrix2, Vector2};

use super::Field;

/// Counterclockwise rotation `[c -s; s c]` given by its cosine and sine.
///
/// `(cos, sin)` is taken as-is; callers are responsible for `cos² + sin² = 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rot2<T> {
    pub cos: T,
    pub sin: T,
}

impl<T: Field> Rot2<T> {
    #[inline]
    pub fn new(cos: T, sin: T) -> Self {
        Self { cos, sin }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            cos: T::one(),
            sin: T::zero(),
        }
    }

    /// `v ↦ (c·x − s·y, s·x + c·y)`.
    #[inline]
    pub fn apply(&self, v: &Vector2<T>) -> Vector2<T> {
        let (c, s) = (&self.cos, &self.sin);
        Vector2::new(
            c.clone() * v.x.clone() - s.clone() * v.y.clone(),
            s.clone() * v.x.clone() + c.clone() * v.y.clone(),
        )
    }
}

impl Rot2<f64> {
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    #[inline]
    pub fn matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.cos, -self.sin, self.sin, self.cos)
    }
}
