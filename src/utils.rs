//! Small numeric helpers shared by the kernels.

use num_complex::Complex;

use crate::algo::constants::PI;
use crate::machine::BesselFloat;

/// Evaluate `c[0] + c[1]·y + c[2]·y² + …` by Horner's rule.
///
/// Coefficients are stored lowest order first, as f64 literals, and each
/// step uses [`BesselFloat::fma`].
#[inline]
pub(crate) fn poly<T: BesselFloat>(y: T, c: &[f64]) -> T {
    let mut acc = T::zero();
    for &ck in c.iter().rev() {
        acc = BesselFloat::fma(acc, y, T::from_f64(ck));
    }
    acc
}

/// 1/z by Smith's method.
///
/// Divides through by the larger component so that re² + im² is never
/// formed:
///   `|re| ≥ |im|:  r = im/re,  1/z = (1, −r) / (re + im·r)`
#[inline]
pub(crate) fn zrecip<T: BesselFloat>(z: Complex<T>) -> Complex<T> {
    if z.re.abs() >= z.im.abs() {
        let r = z.im / z.re;
        let den = z.re + z.im * r;
        Complex::new(den.recip(), -r / den)
    } else {
        let r = z.re / z.im;
        let den = z.re * r + z.im;
        Complex::new(r / den, -den.recip())
    }
}

/// sin(πx) for |x| ≤ 1/2, exact at the endpoints.
#[inline]
pub(crate) fn sinpi<T: BesselFloat>(x: T) -> T {
    let half = T::from_f64(0.5);
    debug_assert!(x.abs() <= half);
    if x.abs() == half {
        return x.signum();
    }
    (T::from_f64(PI) * x).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn poly_horner() {
        // 1 + 2y + 3y² at y = 2 → 17
        assert_eq!(poly(2.0_f64, &[1.0, 2.0, 3.0]), 17.0);
        assert_eq!(poly(5.0_f64, &[]), 0.0);
    }

    #[test]
    fn zrecip_both_branches() {
        // 1/(3+4i) = (3-4i)/25
        let r = zrecip(Complex64::new(3.0, 4.0));
        assert!((r.re - 0.12).abs() < 1e-15);
        assert!((r.im + 0.16).abs() < 1e-15);
        let r = zrecip(Complex64::new(4.0, -3.0));
        assert!((r.re - 0.16).abs() < 1e-15);
        assert!((r.im - 0.12).abs() < 1e-15);
    }

    #[test]
    fn zrecip_no_overflow() {
        let r = zrecip(Complex64::new(1.0e200, 1.0e200));
        assert!((r.re - 0.5e-200).abs() / 0.5e-200 < 1e-14);
        assert!((r.im + 0.5e-200).abs() / 0.5e-200 < 1e-14);
    }

    #[test]
    fn sinpi_values() {
        assert_eq!(sinpi(0.5_f64), 1.0);
        assert_eq!(sinpi(-0.5_f64), -1.0);
        assert_eq!(sinpi(0.0_f64), 0.0);
        assert!((sinpi(1.0_f64 / 6.0) - 0.5).abs() < 1e-15);
        assert!((sinpi(-0.25_f64) + core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
    }
}
