use super::*;
use nalgebra::vector;
use num::BigRational;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn rotation_quarter_turn_and_matrix() {
    let rot = Rot2::from_angle(FRAC_PI_2);
    let v = rot.apply(&vector![1.0, 0.0]);
    assert!(v.x.abs() < 1e-12 && (v.y - 1.0).abs() < 1e-12);
    // Matrix form agrees with the component form and is a proper rotation.
    let m = rot.matrix();
    assert!((m.determinant() - 1.0).abs() < 1e-12);
    let w = m * vector![0.3, -2.0];
    let u = rot.apply(&vector![0.3, -2.0]);
    assert!((w - u).norm() < 1e-12);
}

#[test]
fn identity_rotation_is_bit_exact() {
    let d = Direction2::new(0.1, -7.25e-3);
    assert_eq!(d.rotated(&Rot2::identity()), d);
}

#[test]
fn exact_rotation_over_rationals() {
    // 3-4-5 triangle: cos = 3/5, sin = 4/5.
    let q = |n: i64, d: i64| BigRational::new(n.into(), d.into());
    let rot = Rot2::new(q(3, 5), q(4, 5));
    let d = Direction2::new(q(5, 1), q(0, 1)).rotated(&rot);
    assert_eq!(d, Direction2::new(q(3, 1), q(4, 1)));
}

#[test]
fn negation_and_zero_vector() {
    let d = Direction2::new(2.0, -1.0);
    assert_eq!(-&d, Direction2::new(-2.0, 1.0));
    assert_eq!(-d.clone(), -&d);
    assert!(Direction2::try_new(0.0, 0.0).is_none());
    assert!(Direction2::try_new(0.0, -3.0).is_some());
}

#[test]
fn ccw_angles_wrap_into_full_turn() {
    let e0 = Direction2::new(1.0, 0.0);
    let down = Direction2::new(0.0, -4.0);
    assert!((e0.ccw_angle_to(&down) - 1.5 * PI).abs() < 1e-12);
    assert!((down.ccw_angle_to(&e0) - FRAC_PI_2).abs() < 1e-12);
    assert!((e0.angle_between(&down) - FRAC_PI_2).abs() < 1e-12);
    // Scaling does not change the direction.
    assert!(Direction2::new(3.0, 3.0).same_direction_eps(&Direction2::new(0.5, 0.5), 1e-12));
    assert!(!e0.same_direction_eps(&-&e0, 1e-6));
}

#[test]
fn rotation_preserves_angle_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let d = Direction2::new(rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
        let theta: f64 = rng.gen_range(0.0..6.0);
        let r = d.rotated(&Rot2::from_angle(theta));
        assert!((d.ccw_angle_to(&r) - theta).abs() < 1e-9);
    }
}

#[test]
fn display_is_a_pair() {
    assert_eq!(Direction2::new(1.5, -2.0).to_string(), "(1.5, -2)");
}
