//! Dense univariate polynomials over a `Field` and the cone polynomial builder.
//!
//! Purpose
//! - `Polynomial<T>`: immutable coefficient vector in ascending degree order,
//!   with the arithmetic needed by the recurrence and by Sturm-based kernels.
//!   The exact strategy always builds it over `BigRational`, so coefficients
//!   never round, whatever number type the boundaries come out in.
//! - `cone_polynomial(n)`: the polynomial whose roots are `−cos(2πj/n)`.
//!
//! Code cross-refs: `boundaries::Exact`, `roots::SturmKernel`.

use std::ops::{Add, Mul, Neg, Sub};

use crate::geom::Field;

/// Polynomial `c₀ + c₁X + … + c_d X^d`.
///
/// Invariants:
/// - At least one coefficient; the zero polynomial is `[0]`.
/// - No trailing zero coefficients otherwise, so `degree = len − 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T: Field> Polynomial<T> {
    /// Build from ascending coefficients; trailing zeros are dropped.
    pub fn new(mut coeffs: Vec<T>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }
        Self { coeffs }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    #[inline]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// `c · X^degree`.
    pub fn monomial(c: T, degree: usize) -> Self {
        let mut coeffs = vec![T::zero(); degree + 1];
        coeffs[degree] = c;
        Self::new(coeffs)
    }

    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Degree; the zero polynomial reports 0.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    #[inline]
    pub fn leading(&self) -> &T {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Horner evaluation.
    pub fn eval(&self, x: &T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| {
                let k = T::from_usize(i).unwrap_or_else(T::zero);
                c.clone() * k
            })
            .collect();
        Self::new(coeffs)
    }

    /// Euclidean division `self = q·divisor + r`, `deg r < deg divisor`.
    /// `None` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        if divisor.is_zero() {
            return None;
        }
        let dd = divisor.degree();
        if self.degree() < dd || self.is_zero() {
            return Some((Self::zero(), self.clone()));
        }
        let lead = divisor.leading().clone();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![T::zero(); self.degree() - dd + 1];
        for k in (0..quot.len()).rev() {
            let q = rem[k + dd].clone() / lead.clone();
            for (j, c) in divisor.coeffs.iter().enumerate() {
                rem[k + j] = rem[k + j].clone() - q.clone() * c.clone();
            }
            quot[k] = q;
        }
        rem.truncate(dd);
        Some((Self::new(quot), Self::new(rem)))
    }

    /// Coefficient-wise conversion into another field.
    pub fn map<U: Field>(&self, f: impl FnMut(&T) -> U) -> Polynomial<U> {
        Polynomial::new(self.coeffs.iter().map(f).collect())
    }
}

/// Cone polynomial `P(X) = T_n(−X) − 1` for `n` cones.
///
/// Runs the recurrence `a = 1`, `b = x`, `c = 2x·b − a` in the formal variable
/// `x = −X`. The distinct real roots are `−cos(2πj/n)` for `j = 0..=⌊n/2⌋`, so
/// the k-th smallest root is minus the k-th largest boundary cosine; rank 1 is
/// always `−1`. For `n < 2` the recurrence does not run and `P = −X − 1`.
pub fn cone_polynomial<T: Field>(cone_number: u32) -> Polynomial<T> {
    let x = Polynomial::monomial(-T::one(), 1);
    let two_x = &x + &x;
    let mut a = Polynomial::constant(T::one());
    let mut b = x;
    for _ in 2..=cone_number {
        let c = &(&two_x * &b) - &a;
        a = b;
        b = c;
    }
    &b - &Polynomial::constant(T::one())
}

fn zip_coeffs<T: Field>(
    a: &Polynomial<T>,
    b: &Polynomial<T>,
    f: impl Fn(T, T) -> T,
) -> Polynomial<T> {
    let len = a.coeffs.len().max(b.coeffs.len());
    let at = |p: &Polynomial<T>, i: usize| p.coeffs.get(i).cloned().unwrap_or_else(T::zero);
    Polynomial::new((0..len).map(|i| f(at(a, i), at(b, i))).collect())
}

impl<T: Field> Add for &Polynomial<T> {
    type Output = Polynomial<T>;
    fn add(self, rhs: &Polynomial<T>) -> Self::Output {
        zip_coeffs(self, rhs, |x, y| x + y)
    }
}

impl<T: Field> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;
    fn sub(self, rhs: &Polynomial<T>) -> Self::Output {
        zip_coeffs(self, rhs, |x, y| x - y)
    }
}

impl<T: Field> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;
    fn mul(self, rhs: &Polynomial<T>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut out = vec![T::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j].clone() + a.clone() * b.clone();
            }
        }
        Polynomial::new(out)
    }
}

impl<T: Field> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Self::Output {
        Polynomial::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }
}
