//! Modified Bessel functions of the second kind, integer order, x > 0.
//!
//! K₀, K₁ combine ∓ln(x/2)·Iₙ(x) with a polynomial in x²/4 up to x = 2,
//! and e^{-x}/√x times a polynomial in 2/x beyond. Kₙ grows with n, so
//! the upward recurrence from K₀, K₁ is stable.

#![allow(clippy::excessive_precision)]

use crate::algo::recur::{Kind, RecurrenceState};
use crate::besi::{i0, i1};
use crate::machine::BesselFloat;
use crate::types::{Error, Regime};
use crate::utils::poly;

const K_THRESHOLD: f64 = 2.0;

#[rustfmt::skip]
const K0_SMALL: [f64; 7] = [
    -0.57721566, 0.42278420, 0.23069756, 0.3488590e-1, 0.262698e-2, 0.10750e-3, 0.74e-5,
];
#[rustfmt::skip]
const K0_LARGE: [f64; 7] = [
    1.25331414, -0.7832358e-1, 0.2189568e-1, -0.1062446e-1, 0.587872e-2, -0.251540e-2, 0.53208e-3,
];
#[rustfmt::skip]
const K1_SMALL: [f64; 7] = [
    1.0, 0.15443144, -0.67278579, -0.18156897, -0.1919402e-1, -0.110404e-2, -0.4686e-4,
];
#[rustfmt::skip]
const K1_LARGE: [f64; 7] = [
    1.25331414, 0.23498619, -0.3655620e-1, 0.1504268e-1, -0.780353e-2, 0.325614e-2, -0.68245e-3,
];

/// K₀(x); caller guarantees x > 0.
pub(crate) fn k0<T: BesselFloat>(x: T) -> T {
    match Regime::select(x, K_THRESHOLD, true) {
        Regime::Series => {
            let y = x * x / T::from_f64(4.0);
            -(x / T::from_f64(2.0)).ln() * i0(x) + poly(y, &K0_SMALL)
        }
        Regime::Asymptotic => {
            let y = T::from_f64(2.0) / x;
            ((-x).exp() / x.sqrt()) * poly(y, &K0_LARGE)
        }
    }
}

/// K₁(x); caller guarantees x > 0.
pub(crate) fn k1<T: BesselFloat>(x: T) -> T {
    match Regime::select(x, K_THRESHOLD, true) {
        Regime::Series => {
            let y = x * x / T::from_f64(4.0);
            (x / T::from_f64(2.0)).ln() * i1(x) + poly(y, &K1_SMALL) / x
        }
        Regime::Asymptotic => {
            let y = T::from_f64(2.0) / x;
            ((-x).exp() / x.sqrt()) * poly(y, &K1_LARGE)
        }
    }
}

/// Kₙ(x) for n ≥ 2, x > 0.
pub(crate) fn kn<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    if n < 2 {
        return Err(Error::InvalidOrder);
    }
    if x.is_nan() || x <= T::zero() {
        return Err(Error::InvalidArgument);
    }
    let tox = T::from_f64(2.0) / x;
    let mut state = RecurrenceState::new(Kind::Modified, k0(x), k1(x));
    let bk = state.walk(T::one(), tox, n - 1);
    if !bk.is_finite() {
        log::debug!("kn: recurrence overflowed at n = {n}, x = {x:?}");
        return Err(Error::Overflow);
    }
    Ok(bk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k0_k1_values() {
        assert!((k0(1.0_f64) - 0.42102443824070834).abs() / 0.42102443824070834 < 1e-7);
        assert!((k0(10.0_f64) - 1.778006231616765e-05).abs() / 1.778006231616765e-05 < 1e-7);
        assert!((k1(0.1_f64) - 9.853844780870606).abs() / 9.853844780870606 < 1e-8);
        assert!((k1(2.0_f64) - 0.13986588181652243).abs() / 0.13986588181652243 < 1e-7);
    }

    #[test]
    fn kn_values() {
        // K_5(3) = 0.9377736023868081, K_10(2) = 162482.40397955914
        let v = kn(5, 3.0_f64).unwrap();
        assert!((v - 0.9377736023868081).abs() / 0.9377736023868081 < 1e-7);
        let v = kn(10, 2.0_f64).unwrap();
        assert!((v - 162482.40397955914).abs() / 162482.40397955914 < 1e-7);
    }

    #[test]
    fn kn_domain_and_overflow() {
        assert_eq!(kn(2, 0.0_f64).unwrap_err(), Error::InvalidArgument);
        assert_eq!(kn(2, f64::NAN).unwrap_err(), Error::InvalidArgument);
        assert_eq!(kn(0, 1.0_f64).unwrap_err(), Error::InvalidOrder);
        assert_eq!(kn(300, 1.0e-2_f64).unwrap_err(), Error::Overflow);
    }
}
