//! Sturm-chain root isolation over exact rationals.
//!
//! Once per polynomial (cached by coefficient vector):
//! - Euclid on `p, p'` gives the Sturm chain, each element rescaled to a
//!   primitive integer polynomial; positive rescaling keeps every sign.
//! - Dividing the chain by its last element, `gcd(p, p')`, gives a Sturm chain
//!   of the square-free part, so `V(a) − V(b)` counts distinct roots in `(a, b]`.
//! - Bisection of `(−B, B]` splits the roots into intervals holding one each.
//!
//! A rank query then refines one interval by the sign of the square-free part
//! alone. A midpoint that hits the root is returned as is; otherwise the
//! midpoint of an interval narrower than `2^-resolution_bits` is rounded to
//! `f64`. Running out of `max_bisections` is an error.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use num::bigint::Sign;
use num::{BigInt, BigRational, Integer, One, ToPrimitive, Zero};

use super::ExactKernel;
use crate::cfg::{SturmCfg, MAX_RESOLUTION_BITS};
use crate::error::KernelError;
use crate::poly::Polynomial;

/// `f64` kernel with exact rational root isolation.
///
/// Separated roots are cached per polynomial, so the rank queries of one cone
/// computation share a single Sturm chain.
#[derive(Debug, Default)]
pub struct SturmKernel {
    cfg: SturmCfg,
    isolated: Mutex<HashMap<Vec<BigRational>, Arc<Isolation>>>,
}

impl SturmKernel {
    /// `cfg.resolution_bits` is clamped to `1..=MAX_RESOLUTION_BITS`.
    pub fn new(cfg: SturmCfg) -> Self {
        let resolution_bits = cfg.resolution_bits.clamp(1, MAX_RESOLUTION_BITS);
        Self {
            cfg: SturmCfg {
                resolution_bits,
                ..cfg
            },
            isolated: Mutex::default(),
        }
    }

    pub fn cfg(&self) -> SturmCfg {
        self.cfg
    }

    /// Number of polynomials whose roots are cached.
    pub fn cached_isolations(&self) -> usize {
        self.isolated.lock().map(|m| m.len()).unwrap_or(0)
    }

    fn isolation(&self, p: &Polynomial<BigRational>) -> Result<Arc<Isolation>, KernelError> {
        if let Ok(map) = self.isolated.lock() {
            if let Some(found) = map.get(p.coeffs()) {
                return Ok(found.clone());
            }
        }
        let fresh = Arc::new(Isolation::new(p, self.cfg.max_bisections)?);
        tracing::trace!(
            degree = p.degree(),
            roots = fresh.intervals.len(),
            "roots separated"
        );
        // A poisoned lock only costs the cache entry.
        if let Ok(mut map) = self.isolated.lock() {
            map.insert(p.coeffs().to_vec(), fresh.clone());
        }
        Ok(fresh)
    }
}

impl ExactKernel<f64> for SturmKernel {
    fn kth_smallest_root(
        &self,
        poly: &Polynomial<BigRational>,
        k: usize,
    ) -> Result<f64, KernelError> {
        if poly.is_zero() {
            return Err(KernelError::ZeroPolynomial);
        }
        let root = self.isolation(poly)?.refine(k, &self.cfg)?;
        root.to_f64().ok_or(KernelError::Unrepresentable)
    }

    fn sqrt(&self, value: &f64) -> Result<f64, KernelError> {
        // Also rejects NaN.
        if !(*value >= 0.0) {
            return Err(KernelError::NegativeRadicand);
        }
        Ok(value.sqrt())
    }
}

/// Square-free part and one interval `(lo, hi]` per distinct root, ascending.
#[derive(Debug)]
struct Isolation {
    base: Polynomial<BigInt>,
    intervals: Vec<(BigRational, BigRational)>,
}

/// Interval awaiting separation, with the chain's sign variations at both ends.
struct Span {
    lo: BigRational,
    hi: BigRational,
    v_lo: usize,
    v_hi: usize,
    depth: u32,
}

impl Isolation {
    fn new(p: &Polynomial<BigRational>, budget: u32) -> Result<Self, KernelError> {
        let mut chain = sturm_chain(p);
        let bound = root_bound(&chain[0]);
        let lo = -bound.clone();
        let mut pending = vec![Span {
            v_lo: sign_variations(&chain, &lo),
            v_hi: sign_variations(&chain, &bound),
            lo,
            hi: bound,
            depth: 0,
        }];
        let mut intervals = Vec::new();
        // Left half is pushed last, so intervals come out ascending.
        while let Some(span) = pending.pop() {
            match span.v_lo.saturating_sub(span.v_hi) {
                0 => {}
                1 => intervals.push((span.lo, span.hi)),
                _ if span.depth >= budget => {
                    return Err(KernelError::BisectionBudgetExhausted { budget });
                }
                _ => {
                    let mid = midpoint(&span.lo, &span.hi);
                    let v_mid = sign_variations(&chain, &mid);
                    let depth = span.depth + 1;
                    pending.push(Span {
                        lo: mid.clone(),
                        hi: span.hi,
                        v_lo: v_mid,
                        v_hi: span.v_hi,
                        depth,
                    });
                    pending.push(Span {
                        lo: span.lo,
                        hi: mid,
                        v_lo: span.v_lo,
                        v_hi: v_mid,
                        depth,
                    });
                }
            }
        }
        Ok(Self {
            base: chain.swap_remove(0),
            intervals,
        })
    }

    /// Refine the `k`-th interval (1-based) by bisection on the sign of `base`.
    ///
    /// The root is simple and alone in `(lo, hi]`, so a point strictly inside
    /// lies right of it exactly when its sign matches the sign at `hi`.
    fn refine(&self, k: usize, cfg: &SturmCfg) -> Result<BigRational, KernelError> {
        let Some((lo, hi)) = k.checked_sub(1).and_then(|i| self.intervals.get(i)) else {
            return Err(KernelError::RankOutOfRange {
                rank: k,
                available: self.intervals.len(),
            });
        };
        let (mut lo, mut hi) = (lo.clone(), hi.clone());
        let s_hi = sign_at(&self.base, &hi);
        if s_hi == Sign::NoSign {
            return Ok(hi);
        }
        let eps = BigRational::new(
            BigInt::one(),
            BigInt::one() << cfg.resolution_bits as usize,
        );
        let mut steps = 0;
        while &hi - &lo >= eps {
            if steps == cfg.max_bisections {
                return Err(KernelError::BisectionBudgetExhausted {
                    budget: cfg.max_bisections,
                });
            }
            steps += 1;
            let mid = midpoint(&lo, &hi);
            match sign_at(&self.base, &mid) {
                Sign::NoSign => return Ok(mid),
                s if s == s_hi => hi = mid,
                _ => lo = mid,
            }
        }
        Ok(midpoint(&lo, &hi))
    }
}

/// Sturm chain of the square-free part of `p`, as primitive integer polynomials.
fn sturm_chain(p: &Polynomial<BigRational>) -> Vec<Polynomial<BigInt>> {
    let mut chain = vec![primitive(p), primitive(&p.derivative())];
    loop {
        let n = chain.len();
        if chain[n - 1].is_zero() {
            chain.pop();
            break;
        }
        let Some((_, r)) = rational(&chain[n - 2]).div_rem(&rational(&chain[n - 1])) else {
            break;
        };
        if r.is_zero() {
            break;
        }
        chain.push(primitive(&-&r));
    }
    let gcd = match chain.last() {
        Some(g) if g.degree() > 0 => rational(g),
        _ => return chain,
    };
    chain
        .iter()
        .map(|q| match rational(q).div_rem(&gcd) {
            Some((quot, _)) => primitive(&quot),
            None => q.clone(),
        })
        .collect()
}

/// Positive rational multiple of `p` with coprime integer coefficients.
fn primitive(p: &Polynomial<BigRational>) -> Polynomial<BigInt> {
    let lcm = p
        .coeffs()
        .iter()
        .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
    let scaled = p.map(|c| c.numer() * (&lcm / c.denom()));
    let content = scaled
        .coeffs()
        .iter()
        .fold(BigInt::zero(), |acc, c| acc.gcd(c));
    if content.is_zero() {
        return scaled;
    }
    scaled.map(|c| c / &content)
}

fn rational(q: &Polynomial<BigInt>) -> Polynomial<BigRational> {
    q.map(|c| BigRational::from_integer(c.clone()))
}

fn midpoint(a: &BigRational, b: &BigRational) -> BigRational {
    (a + b) / BigRational::from_integer(BigInt::from(2))
}

/// Sign of `q(x)`: Horner on `Σ cᵢ·numᵢ·den^(d−i)`, all in integers.
fn sign_at(q: &Polynomial<BigInt>, x: &BigRational) -> Sign {
    let (num, den) = (x.numer(), x.denom());
    let mut coeffs = q.coeffs().iter().rev();
    let Some(lead) = coeffs.next() else {
        return Sign::NoSign;
    };
    let mut acc = lead.clone();
    let mut den_pow = BigInt::one();
    for c in coeffs {
        den_pow *= den;
        acc = acc * num + c * &den_pow;
    }
    acc.sign()
}

/// Sign changes along the chain at `x`, zeros skipped.
fn sign_variations(chain: &[Polynomial<BigInt>], x: &BigRational) -> usize {
    let mut count = 0;
    let mut last = Sign::NoSign;
    for q in chain {
        let s = sign_at(q, x);
        if s == Sign::NoSign {
            continue;
        }
        if last != Sign::NoSign && last != s {
            count += 1;
        }
        last = s;
    }
    count
}

/// Power of two `B` with every real root strictly inside `(−B, B)`.
///
/// Fujiwara's bound `2·maxᵢ |c_{d−i} / c_d|^{1/i}`, each ratio bounded through
/// bit lengths.
fn root_bound(q: &Polynomial<BigInt>) -> BigRational {
    let d = q.degree();
    let lead_bits = q.leading().bits() as i64;
    let exp = (1..=d)
        .filter_map(|i| {
            let c = &q.coeffs()[d - i];
            let ratio_bits = c.bits() as i64 - lead_bits + 1;
            (!c.is_zero()).then(|| Integer::div_ceil(&ratio_bits, &(i as i64)))
        })
        .max()
        .unwrap_or(0)
        .max(0);
    BigRational::from_integer(BigInt::one() << (exp as usize + 2))
}
