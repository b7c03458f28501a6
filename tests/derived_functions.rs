use approx::{assert_abs_diff_eq, assert_relative_eq};
use core::f64::consts::PI;
use real_bessel::*;

#[test]
fn airy_at_origin() {
    let v = airy(0.0_f64).unwrap();
    assert_eq!(v.ai, 0.35502805);
    assert_eq!(v.aip, -0.25881940);
    // Bi(0) = Ai(0)/0.5773503, Bi'(0) = −Ai'(0)/0.5773503
    assert_abs_diff_eq!(v.bi, 0.35502805 / 0.5773503, epsilon = 1e-7);
    assert_abs_diff_eq!(v.bip, 0.25881940 / 0.5773503, epsilon = 1e-7);
    assert_abs_diff_eq!(v.bi * 0.5773503, v.ai, epsilon = 1e-7);
}

#[test]
fn airy_wronskian() {
    for &x in &[-25.0_f64, -4.2, -0.5, 0.25, 1.0, 3.0, 8.0] {
        let v = airy(x).unwrap();
        assert_relative_eq!(v.ai * v.bip - v.aip * v.bi, 1.0 / PI, max_relative = 1e-12);
    }
}

#[test]
fn airy_continuous_through_origin() {
    let left = airy(-1.0e-6_f64).unwrap();
    let right = airy(1.0e-6_f64).unwrap();
    assert_abs_diff_eq!(left.ai, right.ai, epsilon = 1e-6);
    assert_abs_diff_eq!(left.bi, right.bi, epsilon = 1e-5);
    assert_abs_diff_eq!(left.aip, right.aip, epsilon = 1e-6);
}

#[test]
fn spherical_closed_forms() {
    for &x in &[0.2_f64, 1.0, 4.0, 15.0] {
        let s0 = spherical_bessel(0, x).unwrap();
        assert_relative_eq!(s0.j, x.sin() / x, max_relative = 1e-13);
        assert_relative_eq!(s0.y, -x.cos() / x, max_relative = 1e-12);
        // j₀' = −j₁
        let s1 = spherical_bessel(1, x).unwrap();
        assert_relative_eq!(s0.jp, -s1.j, epsilon = 1e-14, max_relative = 1e-12);
    }
    assert_eq!(spherical_bessel(2, 0.0_f64).unwrap_err(), Error::InvalidArgument);
}

#[test]
fn struve_continuity_at_three() {
    let below = struve_h0(3.0_f64);
    let above = struve_h0(3.0_f64 + 1e-9);
    assert_abs_diff_eq!(below, above, epsilon = 1e-6);

    let below = struve_h1(3.0_f64);
    let above = struve_h1(3.0_f64 + 1e-9);
    assert_abs_diff_eq!(below, above, epsilon = 1e-6);
}

#[test]
fn struve_symmetry() {
    for &x in &[0.4_f64, 2.9, 3.1, 11.0] {
        assert_eq!(struve_h0(-x), -struve_h0(x));
        assert_eq!(struve_h1(-x), struve_h1(x));
    }
}
