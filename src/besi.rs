//! Modified Bessel functions of the first kind, integer order.
//!
//! I₀, I₁ use a polynomial in (x/3.75)² below |x| = 3.75 and
//! e^|x|/√|x| times a polynomial in 3.75/|x| above. Iₙ for n ≥ 2 always
//! uses Miller's backward recurrence: upward recurrence loses accuracy by
//! cancellation for every x.

#![allow(clippy::excessive_precision)]

use crate::algo::miller::miller_i;
use crate::machine::BesselFloat;
use crate::types::{Error, Regime};
use crate::utils::poly;

const I_THRESHOLD: f64 = 3.75;

#[rustfmt::skip]
const I0_SMALL: [f64; 7] = [
    1.0, 3.5156229, 3.0899424, 1.2067492, 0.2659732, 0.360768e-1, 0.45813e-2,
];
#[rustfmt::skip]
const I0_LARGE: [f64; 9] = [
    0.39894228,   0.1328592e-1, 0.225319e-2,
    -0.157565e-2, 0.916281e-2,  -0.2057706e-1,
    0.2635537e-1, -0.1647633e-1, 0.392377e-2,
];
#[rustfmt::skip]
const I1_SMALL: [f64; 7] = [
    0.5, 0.87890594, 0.51498869, 0.15084934, 0.2658733e-1, 0.301532e-2, 0.32411e-3,
];
#[rustfmt::skip]
const I1_LARGE: [f64; 9] = [
    0.39894228,    -0.3988024e-1, -0.362018e-2,
    0.163801e-2,   -0.1031555e-1, 0.2282967e-1,
    -0.2895312e-1, 0.1787654e-1,  -0.420059e-2,
];

/// I₀(x) for any real x.
pub(crate) fn i0<T: BesselFloat>(x: T) -> T {
    let ax = x.abs();
    match Regime::select(ax, I_THRESHOLD, false) {
        Regime::Series => {
            let t = x / T::from_f64(I_THRESHOLD);
            poly(t * t, &I0_SMALL)
        }
        Regime::Asymptotic => {
            let y = T::from_f64(I_THRESHOLD) / ax;
            (ax.exp() / ax.sqrt()) * poly(y, &I0_LARGE)
        }
    }
}

/// I₁(x) for any real x; odd in x.
pub(crate) fn i1<T: BesselFloat>(x: T) -> T {
    let ax = x.abs();
    let ans = match Regime::select(ax, I_THRESHOLD, false) {
        Regime::Series => {
            let t = x / T::from_f64(I_THRESHOLD);
            ax * poly(t * t, &I1_SMALL)
        }
        Regime::Asymptotic => {
            let y = T::from_f64(I_THRESHOLD) / ax;
            (ax.exp() / ax.sqrt()) * poly(y, &I1_LARGE)
        }
    };
    if x < T::zero() { -ans } else { ans }
}

/// Iₙ(x) for n ≥ 2 and any real x.
pub(crate) fn i_n<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    if n < 2 {
        return Err(Error::InvalidOrder);
    }
    if x == T::zero() {
        return Ok(T::zero());
    }
    let ans = miller_i(n, x.abs())?;
    if !ans.is_finite() {
        log::debug!("i_n: I_{n}({x:?}) is not representable");
        return Err(Error::Overflow);
    }
    Ok(if x < T::zero() && n % 2 == 1 { -ans } else { ans })
}
