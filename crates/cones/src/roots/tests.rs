//! Root isolation on hand-built polynomials with known roots.

use num::BigRational;

use super::*;
use crate::cfg::SturmCfg;
use crate::poly::cone_polynomial;

fn kernel() -> SturmKernel {
    SturmKernel::default()
}

/// Integer coefficients, ascending degree.
fn poly(c: &[i64]) -> Polynomial<BigRational> {
    Polynomial::new(c.iter().map(|&v| BigRational::from_integer(v.into())).collect())
}

#[test]
fn simple_rational_roots_are_exact() {
    // 2(X + 2)(X − 1/2)(X − 3) = 2X³ − 3X² − 11X + 6
    let p = poly(&[6, -11, -3, 2]);
    let k = kernel();
    assert_eq!(k.kth_smallest_root(&p, 1).unwrap(), -2.0);
    assert_eq!(k.kth_smallest_root(&p, 2).unwrap(), 0.5);
    assert_eq!(k.kth_smallest_root(&p, 3).unwrap(), 3.0);
}

#[test]
fn irrational_roots_round_to_nearest() {
    let p = poly(&[-2, 0, 1]);
    let k = kernel();
    let r1 = k.kth_smallest_root(&p, 1).unwrap();
    let r2 = k.kth_smallest_root(&p, 2).unwrap();
    assert!((r1 + std::f64::consts::SQRT_2).abs() <= f64::EPSILON);
    assert!((r2 - std::f64::consts::SQRT_2).abs() <= f64::EPSILON);
}

#[test]
fn repeated_roots_count_once() {
    // (X − 1)²(X + 1) has two distinct roots.
    let p = poly(&[1, -1, -1, 1]);
    let k = kernel();
    assert_eq!(k.kth_smallest_root(&p, 1).unwrap(), -1.0);
    assert_eq!(k.kth_smallest_root(&p, 2).unwrap(), 1.0);
    assert_eq!(
        k.kth_smallest_root(&p, 3),
        Err(KernelError::RankOutOfRange {
            rank: 3,
            available: 2
        })
    );
}

#[test]
fn cone_polynomial_roots_are_negated_cosines() {
    let k = kernel();
    for n in (2..=16u32).chain([43, 64]) {
        let p = cone_polynomial::<BigRational>(n);
        let distinct = n as usize / 2 + 1;
        for rank in 1..=distinct {
            let root = k.kth_smallest_root(&p, rank).unwrap();
            let expected = -(std::f64::consts::TAU * (rank - 1) as f64 / n as f64).cos();
            assert!((root - expected).abs() < 1e-12, "n={n} rank={rank}");
        }
        assert!(matches!(
            k.kth_smallest_root(&p, distinct + 1),
            Err(KernelError::RankOutOfRange { .. })
        ));
    }
}

#[test]
fn separated_roots_are_cached_per_polynomial() {
    let k = kernel();
    let p = cone_polynomial::<BigRational>(12);
    for rank in 1..=7 {
        k.kth_smallest_root(&p, rank).unwrap();
    }
    assert_eq!(k.cached_isolations(), 1);
    k.kth_smallest_root(&poly(&[-2, 0, 1]), 1).unwrap();
    assert_eq!(k.cached_isolations(), 2);
}

#[test]
fn rejects_degenerate_inputs() {
    let k = kernel();
    assert_eq!(
        k.kth_smallest_root(&Polynomial::zero(), 1),
        Err(KernelError::ZeroPolynomial)
    );
    assert!(matches!(
        k.kth_smallest_root(&poly(&[4]), 1),
        Err(KernelError::RankOutOfRange { available: 0, .. })
    ));
    assert!(matches!(
        k.kth_smallest_root(&poly(&[-1, 1]), 0),
        Err(KernelError::RankOutOfRange { rank: 0, .. })
    ));
}

#[test]
fn exhausted_refinement_is_an_error() {
    let k = SturmKernel::new(SturmCfg {
        max_bisections: 2,
        ..SturmCfg::default()
    });
    assert_eq!(
        k.kth_smallest_root(&poly(&[-2, 0, 1]), 2),
        Err(KernelError::BisectionBudgetExhausted { budget: 2 })
    );
    let k = SturmKernel::new(SturmCfg {
        max_bisections: 4,
        ..SturmCfg::default()
    });
    assert!(matches!(
        k.kth_smallest_root(&cone_polynomial::<BigRational>(12), 2),
        Err(KernelError::BisectionBudgetExhausted { .. })
    ));
}

#[test]
fn exhausted_separation_is_an_error() {
    // 2^20·(X − 1)(X − 1 − 2^-20): two roots 2^-20 apart.
    let p = poly(&[(1 << 20) + 1, -((1 << 21) + 1), 1 << 20]);
    let k = SturmKernel::new(SturmCfg {
        max_bisections: 4,
        ..SturmCfg::default()
    });
    assert_eq!(
        k.kth_smallest_root(&p, 1),
        Err(KernelError::BisectionBudgetExhausted { budget: 4 })
    );
    assert_eq!(k.cached_isolations(), 0);
    let r = kernel().kth_smallest_root(&p, 2).unwrap();
    assert!((r - (1.0 + 2f64.powi(-20))).abs() <= f64::EPSILON);
}

#[test]
fn sqrt_rejects_negative_and_nan() {
    let k = kernel();
    assert_eq!(k.sqrt(&0.25), Ok(0.5));
    assert_eq!(k.sqrt(&0.0), Ok(0.0));
    assert_eq!(k.sqrt(&-1e-30), Err(KernelError::NegativeRadicand));
    assert_eq!(k.sqrt(&f64::NAN), Err(KernelError::NegativeRadicand));
}

#[test]
fn coarse_resolution_still_brackets_root() {
    let k = SturmKernel::new(SturmCfg {
        resolution_bits: 8,
        ..SturmCfg::default()
    });
    let r = k.kth_smallest_root(&poly(&[-3, 0, 1]), 2).unwrap();
    assert!((r - 3f64.sqrt()).abs() < 1.0 / 256.0);
    assert_eq!(k.cfg().resolution_bits, 8);
}

#[test]
fn oversized_resolution_is_clamped() {
    let k = SturmKernel::new(SturmCfg {
        resolution_bits: 4_000_000_000,
        max_bisections: 5_000,
    });
    assert_eq!(k.cfg().resolution_bits, crate::cfg::MAX_RESOLUTION_BITS);
    assert_eq!(k.kth_smallest_root(&poly(&[-1, 0, 1]), 2), Ok(1.0));
}

#[test]
fn kernel_is_usable_through_references_and_boxes() {
    let p = poly(&[-1, 0, 1]);
    let boxed: Box<dyn ExactKernel<f64>> = Box::new(kernel());
    assert_eq!(boxed.kth_smallest_root(&p, 2).unwrap(), 1.0);
    let k = kernel();
    let by_ref = &k;
    assert_eq!(ExactKernel::<f64>::kth_smallest_root(&by_ref, &p, 1).unwrap(), -1.0);
}
