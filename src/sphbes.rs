//! Spherical Bessel functions jₙ(x), yₙ(x) and their derivatives.
//!
//! jₙ(x) = √(π/2x)·J_{n+1/2}(x), and likewise for y; the derivatives pick
//! up a −f/(2x) term from differentiating the prefactor.

use crate::algo::bessjy::bessjy;
use crate::algo::constants::HPI;
use crate::machine::BesselFloat;
use crate::types::{Error, SphericalValues};

/// jₙ, yₙ, j'ₙ, y'ₙ for x > 0.
pub(crate) fn sphbes<T: BesselFloat>(n: u32, x: T) -> Result<SphericalValues<T>, Error> {
    if x.is_nan() || x <= T::zero() {
        return Err(Error::InvalidArgument);
    }
    let order = T::from_f64(f64::from(n) + 0.5);
    let v = bessjy(x, order)?;

    let factor = T::from_f64(HPI).sqrt() / x.sqrt();
    let two_x = T::from_f64(2.0) * x;
    let j = factor * v.j;
    let y = factor * v.y;
    Ok(SphericalValues {
        j,
        y,
        jp: factor * v.jp - j / two_x,
        yp: factor * v.yp - y / two_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_zero_closed_form() {
        // j₀ = sin x / x, y₀ = −cos x / x
        for &x in &[0.1_f64, 1.0, 5.0, 20.0] {
            let v = sphbes(0, x).unwrap();
            assert!((v.j - x.sin() / x).abs() < 1e-14, "x = {x}");
            assert!((v.y + x.cos() / x).abs() < 1e-13, "x = {x}");
        }
    }

    #[test]
    fn order_one_closed_form() {
        // j₁ = sin x / x² − cos x / x
        let x = 2.5_f64;
        let v = sphbes(1, x).unwrap();
        assert!((v.j - (x.sin() / (x * x) - x.cos() / x)).abs() < 1e-14);
    }

    #[test]
    fn cross_product() {
        // jₙ·y'ₙ − j'ₙ·yₙ = 1/x²
        for n in [0_u32, 2, 5, 10] {
            for &x in &[0.5_f64, 3.0, 12.0] {
                let v = sphbes(n, x).unwrap();
                let w = v.j * v.yp - v.jp * v.y;
                assert!((w * x * x - 1.0).abs() < 1e-12, "n = {n}, x = {x}");
            }
        }
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(sphbes(1, 0.0_f64).unwrap_err(), Error::InvalidArgument);
        assert_eq!(sphbes(1, -2.0_f64).unwrap_err(), Error::InvalidArgument);
    }
}
