//! Airy functions Ai(x), Bi(x) and their derivatives for real x.
//!
//! With z = (2/3)|x|^{3/2}, positive arguments go through K and I of
//! orders 1/3 and 2/3, negative arguments through J and Y of the same
//! orders.

#![allow(clippy::excessive_precision)]

use crate::algo::bessik::bessik;
use crate::algo::bessjy::bessjy;
use crate::algo::constants::{ONOVRT, PI, THIRD, TTH};
use crate::machine::BesselFloat;
use crate::types::{AiryValues, Error};

/// Ai(0) and −Ai'(0) as tabulated to eight places.
const AI_0: f64 = 0.35502805;
const AIP_0: f64 = 0.25881940;

/// Ai(0) and −Ai'(0) to full double precision.
const AI_C1: f64 = 3.55028053887817240e-01;
const AI_C2: f64 = 2.58819403792806799e-01;

/// Values at the origin from Ai(0), −Ai'(0); Bi(0) = √3·Ai(0),
/// Bi'(0) = −√3·Ai'(0).
fn at_origin<T: BesselFloat>(ai: f64, minus_aip: f64) -> AiryValues<T> {
    AiryValues {
        ai: T::from_f64(ai),
        bi: T::from_f64(ai / ONOVRT),
        aip: T::from_f64(-minus_aip),
        bip: T::from_f64(minus_aip / ONOVRT),
    }
}

/// Ai, Bi, Ai', Bi' at x.
///
/// `x == 0` returns the tabulated eight-place constants. For other |x|
/// below machine epsilon the linear terms are lost to rounding and the
/// full-precision limits are returned; this also covers z underflowing to 0.
pub(crate) fn airy<T: BesselFloat>(x: T) -> Result<AiryValues<T>, Error> {
    if !x.is_finite() {
        return Err(Error::InvalidArgument);
    }
    if x == T::zero() {
        return Ok(at_origin(AI_0, AIP_0));
    }
    let ax = x.abs();
    if ax < T::tol() {
        return Ok(at_origin(AI_C1, AI_C2));
    }

    let pi = T::from_f64(PI);
    let c = T::from_f64(ONOVRT);
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let rootx = ax.sqrt();
    let z = T::from_f64(TTH) * ax * rootx;

    if x > T::zero() {
        let third = bessik(z, T::from_f64(THIRD))?;
        let twothirds = bessik(z, T::from_f64(TTH))?;
        Ok(AiryValues {
            ai: rootx * c * third.k / pi,
            bi: rootx * (third.k / pi + two * c * third.i),
            aip: -x * c * twothirds.k / pi,
            bip: x * (twothirds.k / pi + two * c * twothirds.i),
        })
    } else {
        let third = bessjy(z, T::from_f64(THIRD))?;
        let twothirds = bessjy(z, T::from_f64(TTH))?;
        Ok(AiryValues {
            ai: half * rootx * (third.j - c * third.y),
            bi: -half * rootx * (third.y + c * third.j),
            aip: half * ax * (c * twothirds.y + twothirds.j),
            bip: half * ax * (c * twothirds.j - twothirds.y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_constants() {
        let v = airy(0.0_f64).unwrap();
        assert_eq!(v.ai, 0.35502805);
        assert_eq!(v.aip, -0.25881940);
        assert_eq!(v.bi, 0.35502805 / ONOVRT);
        assert_eq!(v.bip, 0.25881940 / ONOVRT);
        assert_eq!(airy(-0.0_f64).unwrap(), v);
    }

    #[test]
    fn near_origin_limits() {
        let v = airy(1.0e-300_f64).unwrap();
        assert_eq!(v.ai, AI_C1);
        assert_eq!(v.aip, -AI_C2);
        assert!((v.bi - 0.614926627446000736).abs() < 1e-15);
        assert!((v.bip - 0.448288357353826359).abs() < 1e-15);
        assert_eq!(airy(-1.0e-300_f64).unwrap(), v);
    }

    #[test]
    fn positive_argument() {
        // Ai(1), Bi(1), Ai'(1), Bi'(1)
        let v = airy(1.0_f64).unwrap();
        assert!((v.ai - 0.1352924163128814).abs() < 1e-14);
        assert!((v.bi - 1.2074235949528713).abs() < 1e-14);
        assert!((v.aip - (-0.15914744129679328)).abs() < 1e-14);
        assert!((v.bip - 0.9324359333927756).abs() < 1e-14);
    }

    #[test]
    fn negative_argument() {
        // Ai(-3), Bi(-3)
        let v = airy(-3.0_f64).unwrap();
        assert!((v.ai - (-0.3788142936776580)).abs() < 1e-14);
        assert!((v.bi - (-0.1982896263749266)).abs() < 1e-14);
    }

    #[test]
    fn wronskian() {
        for &x in &[-10.0_f64, -1.0, -1.0e-3, 0.5, 2.0, 20.0] {
            let v = airy(x).unwrap();
            let w = v.ai * v.bip - v.aip * v.bi;
            assert!((w - 1.0 / PI).abs() < 1e-14, "x = {x}");
        }
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(airy(f64::NAN).unwrap_err(), Error::InvalidArgument);
        assert_eq!(airy(f64::NEG_INFINITY).unwrap_err(), Error::InvalidArgument);
    }
}
